use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Marginal rate applied to income above `floor`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxSlab {
    pub floor: Decimal,
    pub rate: Decimal,
}

const fn slab(floor: Decimal, rate: Decimal) -> TaxSlab {
    TaxSlab { floor, rate }
}

/// FY 2023-24 slabs, highest first. Income up to 2,50,000 is exempt.
const SLABS_2023_24: [TaxSlab; 6] = [
    slab(dec!(1500000), dec!(0.30)),
    slab(dec!(1250000), dec!(0.25)),
    slab(dec!(1000000), dec!(0.20)),
    slab(dec!(750000), dec!(0.15)),
    slab(dec!(500000), dec!(0.10)),
    slab(dec!(250000), dec!(0.05)),
];

/// Indian financial year (runs 1 April to 31 March).
/// The value is the starting year (e.g., 2023 = FY 2023-24).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FinancialYear(pub i32);

impl Default for FinancialYear {
    fn default() -> Self {
        FinancialYear(2023)
    }
}

impl FinancialYear {
    /// Parse "2023-2024", "2023-24" or "2023"
    pub fn parse(s: &str) -> Option<Self> {
        let start = s.trim().split(['-', '/']).next()?;
        start.trim().parse::<i32>().ok().map(FinancialYear)
    }

    /// Display as "2023-24"
    pub fn display(&self) -> String {
        format!("{}-{:02}", self.0, (self.0 + 1) % 100)
    }

    /// Slab table, highest floor first. Only the 2023-24 regime is modelled;
    /// other years use it too.
    pub fn slabs(&self) -> &'static [TaxSlab] {
        &SLABS_2023_24
    }

    /// Health and education cess on income tax
    pub fn cess_rate(&self) -> Decimal {
        dec!(0.04)
    }

    pub fn standard_deduction(&self) -> Decimal {
        dec!(50000)
    }

    /// Section 80C ceiling (PF, PPF, LIC, tuition, NPS)
    pub fn limit_80c(&self) -> Decimal {
        dec!(150000)
    }

    /// Section 80CCD(1B) additional NPS ceiling
    pub fn limit_80ccd1b(&self) -> Decimal {
        dec!(50000)
    }

    /// Section 80D medical insurance ceiling (self and parents under 60)
    pub fn limit_80d(&self) -> Decimal {
        dec!(25000)
    }

    /// Section 24(b) home loan interest ceiling
    pub fn limit_24(&self) -> Decimal {
        dec!(200000)
    }

    /// Income tax before cess, applying slabs from the top down (unrounded)
    pub fn slab_tax(&self, taxable_income: Decimal) -> Decimal {
        let mut remaining = taxable_income;
        let mut tax = Decimal::ZERO;
        for slab in self.slabs() {
            if remaining > slab.floor {
                let band_tax = (remaining - slab.floor) * slab.rate;
                log::debug!(
                    "Slab above {} @ {}: {} on {}",
                    slab.floor,
                    slab.rate,
                    band_tax,
                    remaining - slab.floor
                );
                tax += band_tax;
                remaining = slab.floor;
            }
        }
        tax
    }
}

impl std::fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

//! Closed-form allowance, loan, savings and pension formulas.
//!
//! Every function is pure and total over non-negative inputs. Amounts that the
//! payslip or pension statement shows are rounded to the rupee here; loan and
//! savings formulas return unrounded values so callers can derive totals before
//! rounding.

use crate::core::employee::HandicapStatus;
use crate::core::money::{growth_factor, percent, round_rupee, round_to_hundred, saturating_div};
use crate::core::tables::{gis_amount, CityCategory};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// One row of a bracket table: applies while the key is below `below`
/// (`None` closes the table).
#[derive(Debug, Clone, Copy)]
pub struct Bracket<T> {
    pub below: Option<Decimal>,
    pub value: T,
}

/// First bracket whose upper bound exceeds `key`, evaluated top-down.
pub fn select_bracket<T>(brackets: &[Bracket<T>], key: Decimal) -> &T {
    brackets
        .iter()
        .find(|b| b.below.map_or(true, |limit| key < limit))
        .map(|b| &b.value)
        .unwrap_or(&brackets[brackets.len() - 1].value)
}

/// HRA percentages per city category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HraRates {
    pub x: Decimal,
    pub y: Decimal,
    pub z: Decimal,
}

impl HraRates {
    pub fn for_category(&self, category: CityCategory) -> Decimal {
        match category {
            CityCategory::X => self.x,
            CityCategory::Y => self.y,
            CityCategory::Z => self.z,
        }
    }
}

/// HRA rate tables keyed by DA rate (percent)
pub const HRA_BRACKETS: [Bracket<HraRates>; 3] = [
    Bracket {
        below: Some(dec!(25)),
        value: HraRates {
            x: dec!(0.24),
            y: dec!(0.16),
            z: dec!(0.08),
        },
    },
    Bracket {
        below: Some(dec!(50)),
        value: HraRates {
            x: dec!(0.27),
            y: dec!(0.18),
            z: dec!(0.09),
        },
    },
    Bracket {
        below: None,
        value: HraRates {
            x: dec!(0.30),
            y: dec!(0.20),
            z: dec!(0.10),
        },
    },
];

/// Minimum HRA per city category
pub fn hra_floor(category: CityCategory) -> Decimal {
    match category {
        CityCategory::X => dec!(5400),
        CityCategory::Y => dec!(3600),
        CityCategory::Z => dec!(1800),
    }
}

/// Transport allowance amounts within one basic-pay bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaAmounts {
    pub regular_non_metro: Decimal,
    pub regular_metro: Decimal,
    pub handicap_non_metro: Decimal,
    pub handicap_metro: Decimal,
}

impl TaAmounts {
    pub fn amount(&self, handicap: HandicapStatus, is_metro: bool) -> Decimal {
        match (handicap, is_metro) {
            (HandicapStatus::Regular, false) => self.regular_non_metro,
            (HandicapStatus::Regular, true) => self.regular_metro,
            (HandicapStatus::Handicap, false) => self.handicap_non_metro,
            (HandicapStatus::Handicap, true) => self.handicap_metro,
        }
    }
}

/// TA amounts keyed by basic pay
pub const TA_BRACKETS: [Bracket<TaAmounts>; 3] = [
    Bracket {
        below: Some(dec!(24200)),
        value: TaAmounts {
            regular_non_metro: dec!(675),
            regular_metro: dec!(1000),
            handicap_non_metro: dec!(2250),
            handicap_metro: dec!(2250),
        },
    },
    Bracket {
        below: Some(dec!(56100)),
        value: TaAmounts {
            regular_non_metro: dec!(1350),
            regular_metro: dec!(2700),
            handicap_non_metro: dec!(2700),
            handicap_metro: dec!(5400),
        },
    },
    Bracket {
        below: None,
        value: TaAmounts {
            regular_non_metro: dec!(2700),
            regular_metro: dec!(5400),
            handicap_non_metro: dec!(5400),
            handicap_metro: dec!(10800),
        },
    },
];

/// Dearness Allowance
pub fn da(basic: Decimal, da_rate: Decimal) -> Decimal {
    round_rupee(basic * percent(da_rate))
}

/// House Rent Allowance, never below the category floor
pub fn hra(basic: Decimal, category: CityCategory, da_rate: Decimal) -> Decimal {
    let rate = select_bracket(&HRA_BRACKETS, da_rate).for_category(category);
    let computed = round_rupee(basic * rate);
    let floor = hra_floor(category);
    log::debug!(
        "HRA: category={}, da_rate={}, rate={}, computed={}, floor={}",
        category,
        da_rate,
        rate,
        computed,
        floor
    );
    computed.max(floor)
}

/// Transport Allowance
pub fn ta(basic: Decimal, handicap: HandicapStatus, is_metro: bool) -> Decimal {
    select_bracket(&TA_BRACKETS, basic).amount(handicap, is_metro)
}

/// Group Insurance Scheme deduction; unknown classes pay nothing
pub fn gis(class: &str) -> Decimal {
    gis_amount(class).unwrap_or(Decimal::ZERO)
}

/// Defined Contribution Pension Scheme deduction (NPS employees)
pub fn dcps(basic: Decimal, da: Decimal) -> Decimal {
    round_rupee((basic + da) * dec!(0.10))
}

/// Non-Practicing Allowance: 35% of basic
pub fn npa(basic: Decimal) -> Decimal {
    round_rupee(basic * dec!(0.35))
}

/// Equated monthly instalment (unrounded).
///
/// Zero months yields 0; a zero rate yields `principal / months`.
pub fn emi(principal: Decimal, monthly_rate: Decimal, months: Decimal) -> Decimal {
    if months <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    if monthly_rate.is_zero() {
        return principal / months;
    }
    let factor = growth_factor(monthly_rate, months);
    let discount = Decimal::ONE - saturating_div(Decimal::ONE, factor);
    if discount.is_zero() {
        return principal / months;
    }
    saturating_div(principal.saturating_mul(monthly_rate), discount)
}

/// Maturity of a lump sum compounded `periods_per_year` times a year (unrounded).
pub fn compound_maturity(
    principal: Decimal,
    annual_rate_percent: Decimal,
    periods_per_year: u32,
    years: Decimal,
) -> Decimal {
    let n = Decimal::from(periods_per_year);
    principal.saturating_mul(growth_factor(percent(annual_rate_percent) / n, n * years))
}

/// Future value of a stream of equal monthly contributions (unrounded).
///
/// A zero rate yields `contribution * months`.
pub fn annuity_fv(contribution: Decimal, monthly_rate: Decimal, months: Decimal) -> Decimal {
    if monthly_rate.is_zero() {
        return contribution.saturating_mul(months);
    }
    let growth = growth_factor(monthly_rate, months) - Decimal::ONE;
    saturating_div(contribution.saturating_mul(growth), monthly_rate)
}

/// Principal that a given EMI can service; inverse of [`emi`] (unrounded).
pub fn loan_eligibility(max_emi: Decimal, monthly_rate: Decimal, months: Decimal) -> Decimal {
    if months <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    if monthly_rate.is_zero() {
        return max_emi.saturating_mul(months);
    }
    let factor = growth_factor(monthly_rate, months);
    let discount = Decimal::ONE - saturating_div(Decimal::ONE, factor);
    saturating_div(max_emi.saturating_mul(discount), monthly_rate)
}

/// Annual pay after each of `years` 3% increments, each rounded to the nearest hundred.
pub fn pay_scale_increments(base_pay: Decimal, years: usize) -> Vec<Decimal> {
    let mut current = base_pay;
    (0..years)
        .map(|_| {
            current = round_to_hundred(current * dec!(1.03));
            current
        })
        .collect()
}

/// Basic pension: half of last basic pay
pub fn basic_pension(basic_pay: Decimal) -> Decimal {
    round_rupee(basic_pay * dec!(0.5))
}

/// Commuted portion: 40% of basic pension
pub fn commuted_pension(basic_pension: Decimal) -> Decimal {
    round_rupee(basic_pension * dec!(0.4))
}

/// Lump sum paid for the commuted portion
pub fn commuted_value(commuted_pension: Decimal, cvp_factor: Decimal) -> Decimal {
    round_rupee(commuted_pension * dec!(12) * cvp_factor)
}

/// Family pension: 30% of basic pension
pub fn family_pension(basic_pension: Decimal) -> Decimal {
    round_rupee(basic_pension * dec!(0.3))
}

/// Completed six-monthly periods; a remainder of three months or more counts as one.
pub fn six_monthly_periods(service_years: u32, service_months: u32) -> u32 {
    service_years * 2 + u32::from(service_months >= 3)
}

pub const GRATUITY_LIMIT: Decimal = dec!(2000000);

/// Retirement gratuity before the statutory ceiling: a quarter of basic pay per period
pub fn gratuity(basic_pay: Decimal, periods: u32) -> Decimal {
    round_rupee(basic_pay * dec!(0.25) * Decimal::from(periods))
}

/// Encashment of earned leave at (basic + DA) / 30 per day
pub fn leave_encashment(basic_pay: Decimal, da_on_basic: Decimal, earned_leave_days: u32) -> Decimal {
    round_rupee((basic_pay + da_on_basic) * Decimal::from(earned_leave_days) / dec!(30))
}

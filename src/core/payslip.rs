//! Monthly payslip: allowances, deductions and net salary.

use crate::core::employee::{EmployeeType, HandicapStatus};
use crate::core::formulas;
use crate::core::input::{deserialize_lenient, deserialize_lenient_opt, InputError, InputField};
use crate::core::money::round_rupee;
use crate::core::tables::{self, CityCategory, CURRENT_DA_RATE};
use crate::core::warnings::Warning;
use paycalc_derive::InputFields;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const PROFESSIONAL_TAX: Decimal = dec!(200);
pub const REVENUE_STAMP: Decimal = dec!(1);

/// An additional allowance line on the payslip.
///
/// NPA is always 35% of basic pay, so it carries no amount of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AllowanceEntry", into = "AllowanceEntry")]
pub enum Allowance {
    Fixed { kind: String, amount: Decimal },
    Npa,
}

impl Allowance {
    pub fn label(&self) -> &str {
        match self {
            Allowance::Fixed { kind, .. } => kind,
            Allowance::Npa => "NPA",
        }
    }

    /// Amount this allowance contributes for the given basic salary
    pub fn amount(&self, basic_salary: Decimal) -> Decimal {
        match self {
            Allowance::Fixed { amount, .. } => *amount,
            Allowance::Npa => formulas::npa(basic_salary),
        }
    }
}

/// Wire form of an allowance: `{"type": "Permanent TA", "amount": 1200}`.
/// Any amount given alongside `"type": "NPA"` is discarded.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AllowanceEntry {
    /// Allowance type, e.g. "Permanent TA", "Washing allowance", "NPA"
    #[serde(rename = "type")]
    pub kind: String,
    /// Monthly amount (ignored for NPA)
    #[serde(default, deserialize_with = "deserialize_lenient_opt", skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<f64>")]
    pub amount: Option<Decimal>,
}

impl From<AllowanceEntry> for Allowance {
    fn from(entry: AllowanceEntry) -> Self {
        if entry.kind.trim().eq_ignore_ascii_case("NPA") {
            Allowance::Npa
        } else {
            Allowance::Fixed {
                kind: entry.kind,
                amount: entry.amount.unwrap_or(Decimal::ZERO),
            }
        }
    }
}

impl From<Allowance> for AllowanceEntry {
    fn from(allowance: Allowance) -> Self {
        match allowance {
            Allowance::Fixed { kind, amount } => AllowanceEntry {
                kind,
                amount: Some(amount),
            },
            Allowance::Npa => AllowanceEntry {
                kind: "NPA".to_string(),
                amount: None,
            },
        }
    }
}

/// Parses `TYPE` or `TYPE=AMOUNT`, e.g. `NPA` or `Washing allowance=150`.
impl FromStr for Allowance {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, amount) = match s.split_once('=') {
            Some((kind, amount)) => (kind.trim(), Some(crate::core::input::lenient_decimal(amount))),
            None => (s.trim(), None),
        };
        if kind.is_empty() {
            return Err(InputError::InvalidAllowance(s.to_string()));
        }
        Ok(AllowanceEntry {
            kind: kind.to_string(),
            amount,
        }
        .into())
    }
}

fn default_da_rate() -> Decimal {
    CURRENT_DA_RATE
}

/// Inputs for one month's payslip
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, InputFields)]
pub struct PayslipInput {
    /// Monthly basic salary
    #[serde(deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub basic_salary: Decimal,
    /// Dearness Allowance rate in percent (defaults to the current rate, 55)
    #[serde(default = "default_da_rate", deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub da_rate: Decimal,
    /// City of posting, e.g. "Pune (UA)"
    pub city: String,
    /// HRA category (X, Y or Z); derived from the city when absent
    #[serde(default)]
    pub city_category: Option<CityCategory>,
    /// Employee class, "Class 1" to "Class 4"
    pub class: String,
    /// GPF or NPS
    #[serde(default)]
    pub employee_type: EmployeeType,
    /// Regular or Handicap
    #[serde(default)]
    pub handicap_status: HandicapStatus,
    /// Permanent travelling allowance
    #[serde(default, deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub per_ta: Decimal,
    /// Additional allowances, e.g. [{"type": "NPA"}, {"type": "Washing allowance", "amount": 150}]
    #[serde(default)]
    #[schemars(with = "Vec<AllowanceEntry>")]
    pub additional_allowances: Vec<Allowance>,
    /// GPF subscription (GPF employees only)
    #[serde(default, deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub gpf_subscription: Decimal,
    /// GPF advance recovery (GPF employees only)
    #[serde(default, deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub gpf_recovery: Decimal,
    /// Festival advance recovery
    #[serde(default, deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub festival_advances: Decimal,
    /// Other advance recovery
    #[serde(default, deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub other_advances: Decimal,
    /// Any other recovery
    #[serde(default, deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub other_recovery: Decimal,
    /// Monthly income tax (TDS)
    #[serde(default, deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub income_tax: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allowances {
    pub basic_salary: Decimal,
    pub da: Decimal,
    pub hra: Decimal,
    pub ta: Decimal,
    pub per_ta: Decimal,
    pub additional_allowances: Decimal,
}

impl Allowances {
    pub fn items(&self) -> [(&'static str, Decimal); 6] {
        [
            ("Basic Salary", self.basic_salary),
            ("Dearness Allowance", self.da),
            ("House Rent Allowance", self.hra),
            ("Transport Allowance", self.ta),
            ("Permanent TA", self.per_ta),
            ("Additional Allowances", self.additional_allowances),
        ]
    }

    pub fn total(&self) -> Decimal {
        round_rupee(self.items().iter().map(|(_, amount)| *amount).sum())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deductions {
    pub professional_tax: Decimal,
    pub gis: Decimal,
    pub dcps: Decimal,
    pub revenue_stamp: Decimal,
    pub gpf_subscription: Decimal,
    pub gpf_recovery: Decimal,
    pub festival_advances: Decimal,
    pub other_advances: Decimal,
    pub other_recovery: Decimal,
    pub income_tax: Decimal,
}

impl Deductions {
    pub fn items(&self) -> [(&'static str, Decimal); 10] {
        [
            ("Professional Tax", self.professional_tax),
            ("GIS", self.gis),
            ("DCPS", self.dcps),
            ("Revenue Stamp", self.revenue_stamp),
            ("GPF Subscription", self.gpf_subscription),
            ("GPF Recovery", self.gpf_recovery),
            ("Festival Advances", self.festival_advances),
            ("Other Advances", self.other_advances),
            ("Other Recovery", self.other_recovery),
            ("Income Tax", self.income_tax),
        ]
    }

    pub fn total(&self) -> Decimal {
        round_rupee(self.items().iter().map(|(_, amount)| *amount).sum())
    }
}

/// One additional allowance as shown on the payslip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllowanceLine {
    pub label: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct PayslipResult {
    pub allowances: Allowances,
    pub deductions: Deductions,
    pub total_allowances: Decimal,
    pub total_deductions: Decimal,
    pub net_salary: Decimal,
    pub additional_allowance_lines: Vec<AllowanceLine>,
    pub city_category: CityCategory,
    pub is_metro: bool,
    pub warnings: Vec<Warning>,
}

/// Compute a payslip. Never fails: unknown city or class fall back to their
/// defaults and are reported in `warnings`.
pub fn calculate_payslip(input: &PayslipInput) -> PayslipResult {
    let mut warnings = Vec::new();
    let basic = input.basic_salary;

    if tables::find_city(&input.city).is_none() {
        log::warn!("city '{}' not in city table; using category Z", input.city);
        warnings.push(Warning::UnknownCity {
            city: input.city.clone(),
        });
    }
    let city_category = input
        .city_category
        .unwrap_or_else(|| tables::city_category(&input.city));
    let is_metro = tables::is_metro(&input.city);

    let da = formulas::da(basic, input.da_rate);
    let hra = formulas::hra(basic, city_category, input.da_rate);
    let ta = formulas::ta(basic, input.handicap_status, is_metro);

    let additional_allowance_lines: Vec<AllowanceLine> = input
        .additional_allowances
        .iter()
        .map(|a| AllowanceLine {
            label: a.label().to_string(),
            amount: a.amount(basic),
        })
        .collect();
    let additional_allowances = additional_allowance_lines.iter().map(|l| l.amount).sum();

    let allowances = Allowances {
        basic_salary: basic,
        da,
        hra,
        ta,
        per_ta: input.per_ta,
        additional_allowances,
    };

    if tables::gis_amount(&input.class).is_none() {
        log::warn!("class '{}' has no GIS rate", input.class);
        warnings.push(Warning::UnknownClass {
            class: input.class.clone(),
        });
    }
    let gis = formulas::gis(&input.class);

    let (dcps, gpf_subscription, gpf_recovery) = match input.employee_type {
        EmployeeType::Nps => (formulas::dcps(basic, da), Decimal::ZERO, Decimal::ZERO),
        EmployeeType::Gpf => (Decimal::ZERO, input.gpf_subscription, input.gpf_recovery),
    };

    let deductions = Deductions {
        professional_tax: PROFESSIONAL_TAX,
        gis,
        dcps,
        revenue_stamp: REVENUE_STAMP,
        gpf_subscription,
        gpf_recovery,
        festival_advances: input.festival_advances,
        other_advances: input.other_advances,
        other_recovery: input.other_recovery,
        income_tax: input.income_tax,
    };

    let total_allowances = allowances.total();
    let total_deductions = deductions.total();
    let net_salary = round_rupee(total_allowances - total_deductions);

    log::debug!(
        "Payslip: basic={}, category={}, metro={}, allowances={}, deductions={}, net={}",
        basic,
        city_category,
        is_metro,
        total_allowances,
        total_deductions,
        net_salary
    );

    PayslipResult {
        allowances,
        deductions,
        total_allowances,
        total_deductions,
        net_salary,
        additional_allowance_lines,
        city_category,
        is_metro,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(basic: Decimal, city: &str, employee_type: EmployeeType) -> PayslipInput {
        PayslipInput {
            basic_salary: basic,
            da_rate: dec!(55),
            city: city.to_string(),
            city_category: None,
            class: "Class 2".to_string(),
            employee_type,
            handicap_status: HandicapStatus::Regular,
            per_ta: Decimal::ZERO,
            additional_allowances: vec![],
            gpf_subscription: Decimal::ZERO,
            gpf_recovery: Decimal::ZERO,
            festival_advances: Decimal::ZERO,
            other_advances: Decimal::ZERO,
            other_recovery: Decimal::ZERO,
            income_tax: Decimal::ZERO,
        }
    }

    #[test]
    fn nps_metro_class_2_scenario() {
        let mut payslip = input(dec!(50000), "Greater Mumbai (UA)", EmployeeType::Nps);
        payslip.city_category = Some(CityCategory::X);
        let result = calculate_payslip(&payslip);

        assert_eq!(result.allowances.da, dec!(27500));
        assert_eq!(result.allowances.hra, dec!(15000));
        assert_eq!(result.allowances.ta, dec!(2700));
        assert_eq!(result.total_allowances, dec!(95200));

        assert_eq!(result.deductions.professional_tax, dec!(200));
        assert_eq!(result.deductions.gis, dec!(480));
        assert_eq!(result.deductions.dcps, dec!(7750));
        assert_eq!(result.deductions.revenue_stamp, dec!(1));
        assert_eq!(result.total_deductions, dec!(8431));

        assert_eq!(result.net_salary, dec!(86769));
        assert!(result.is_metro);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn category_derived_from_city_when_absent() {
        let result = calculate_payslip(&input(dec!(50000), "Nagpur", EmployeeType::Gpf));
        assert_eq!(result.city_category, CityCategory::Y);
        assert!(!result.is_metro);
        assert_eq!(result.allowances.hra, dec!(10000));
        assert_eq!(result.allowances.ta, dec!(1350));
    }

    #[test]
    fn explicit_category_overrides_city_table() {
        let mut payslip = input(dec!(50000), "Nagpur", EmployeeType::Gpf);
        payslip.city_category = Some(CityCategory::X);
        let result = calculate_payslip(&payslip);
        assert_eq!(result.city_category, CityCategory::X);
        assert_eq!(result.allowances.hra, dec!(15000));
    }

    #[test]
    fn unknown_city_falls_back_to_z_with_warning() {
        let result = calculate_payslip(&input(dec!(50000), "Atlantis", EmployeeType::Gpf));
        assert_eq!(result.city_category, CityCategory::Z);
        assert!(!result.is_metro);
        assert_eq!(result.allowances.hra, dec!(5000));
        assert_eq!(
            result.warnings,
            vec![Warning::UnknownCity {
                city: "Atlantis".to_string()
            }]
        );
    }

    #[test]
    fn unknown_class_has_no_gis() {
        let mut payslip = input(dec!(50000), "Pune (UA)", EmployeeType::Gpf);
        payslip.class = "Class 9".to_string();
        let result = calculate_payslip(&payslip);
        assert_eq!(result.deductions.gis, Decimal::ZERO);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn npa_ignores_stored_amount() {
        let entries: Vec<Allowance> = serde_json::from_str(
            r#"[{"type": "NPA", "amount": 999}, {"type": "Washing allowance", "amount": 150}]"#,
        )
        .unwrap();
        let mut payslip = input(dec!(50000), "Pune (UA)", EmployeeType::Gpf);
        payslip.additional_allowances = entries;
        let result = calculate_payslip(&payslip);

        assert_eq!(result.additional_allowance_lines[0].label, "NPA");
        assert_eq!(result.additional_allowance_lines[0].amount, dec!(17500));
        assert_eq!(result.additional_allowance_lines[1].amount, dec!(150));
        assert_eq!(result.allowances.additional_allowances, dec!(17650));
    }

    #[test]
    fn npa_tracks_basic_salary() {
        for basic in [dec!(10000), dec!(12345), dec!(56100), dec!(123456)] {
            let mut payslip = input(basic, "Pune (UA)", EmployeeType::Gpf);
            payslip.additional_allowances = vec![Allowance::Npa];
            let result = calculate_payslip(&payslip);
            assert_eq!(result.allowances.additional_allowances, round_rupee(basic * dec!(0.35)));
        }
    }

    #[test]
    fn gpf_employee_has_no_dcps() {
        let mut payslip = input(dec!(50000), "Pune (UA)", EmployeeType::Gpf);
        payslip.gpf_subscription = dec!(5000);
        payslip.gpf_recovery = dec!(1000);
        let result = calculate_payslip(&payslip);
        assert_eq!(result.deductions.dcps, Decimal::ZERO);
        assert_eq!(result.deductions.gpf_subscription, dec!(5000));
        assert_eq!(result.deductions.gpf_recovery, dec!(1000));
    }

    #[test]
    fn nps_employee_has_no_gpf() {
        let mut payslip = input(dec!(50000), "Pune (UA)", EmployeeType::Nps);
        payslip.gpf_subscription = dec!(5000);
        payslip.gpf_recovery = dec!(1000);
        let result = calculate_payslip(&payslip);
        assert_eq!(result.deductions.dcps, dec!(7750));
        assert_eq!(result.deductions.gpf_subscription, Decimal::ZERO);
        assert_eq!(result.deductions.gpf_recovery, Decimal::ZERO);
    }

    #[test]
    fn net_salary_may_be_negative() {
        let mut payslip = input(dec!(10000), "Akola", EmployeeType::Gpf);
        payslip.other_recovery = dec!(100000);
        let result = calculate_payslip(&payslip);
        assert!(result.net_salary < Decimal::ZERO);
        assert_eq!(result.net_salary, result.total_allowances - result.total_deductions);
    }

    #[test]
    fn totals_match_item_sums() {
        let mut payslip = input(dec!(43210.5), "Sangli", EmployeeType::Nps);
        payslip.per_ta = dec!(400.4);
        payslip.festival_advances = dec!(1500);
        payslip.income_tax = dec!(2000);
        let result = calculate_payslip(&payslip);
        let allowance_sum: Decimal = result.allowances.items().iter().map(|(_, a)| *a).sum();
        let deduction_sum: Decimal = result.deductions.items().iter().map(|(_, a)| *a).sum();
        assert_eq!(result.total_allowances, round_rupee(allowance_sum));
        assert_eq!(result.total_deductions, round_rupee(deduction_sum));
    }

    #[test]
    fn allowance_from_str() {
        assert_eq!("NPA".parse::<Allowance>().unwrap(), Allowance::Npa);
        assert_eq!("npa=500".parse::<Allowance>().unwrap(), Allowance::Npa);
        assert_eq!(
            "Washing allowance=150".parse::<Allowance>().unwrap(),
            Allowance::Fixed {
                kind: "Washing allowance".to_string(),
                amount: dec!(150)
            }
        );
        assert_eq!(
            "=150".parse::<Allowance>(),
            Err(InputError::InvalidAllowance("=150".to_string()))
        );
    }

    #[test]
    fn payslip_input_from_json_with_defaults() {
        let payslip: PayslipInput = serde_json::from_str(
            r#"{"basic_salary": "50000", "city": "Pune (UA)", "class": "Class 1", "employee_type": "NPS"}"#,
        )
        .unwrap();
        assert_eq!(payslip.basic_salary, dec!(50000));
        assert_eq!(payslip.da_rate, dec!(55));
        assert_eq!(payslip.handicap_status, HandicapStatus::Regular);
        assert_eq!(payslip.employee_type, EmployeeType::Nps);
        assert!(payslip.additional_allowances.is_empty());
    }

    #[test]
    fn input_fields_listing() {
        let fields = PayslipInput::input_fields();
        let basic = fields.iter().find(|f| f.name == "basic_salary").unwrap();
        assert!(basic.required);
        assert_eq!(basic.description, "Monthly basic salary");
        let da_rate = fields.iter().find(|f| f.name == "da_rate").unwrap();
        assert!(!da_rate.required);
        let category = fields.iter().find(|f| f.name == "city_category").unwrap();
        assert!(!category.required);
    }
}

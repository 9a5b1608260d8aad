//! Retirement benefits: pension with commutation, family pension, gratuity
//! and leave encashment.

use crate::core::formulas::{
    basic_pension, commuted_pension, commuted_value, da, family_pension, gratuity,
    leave_encashment, six_monthly_periods, GRATUITY_LIMIT,
};
use crate::core::input::{
    deserialize_lenient, deserialize_lenient_count, deserialize_lenient_opt, InputError, InputField,
};
use crate::core::tables::{cvp_factor, cvp_factor_or_default, da_rate_for_year, DEFAULT_CVP_AGE};
use crate::core::warnings::Warning;
use chrono::{Datelike, NaiveDate};
use paycalc_derive::InputFields;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, InputFields)]
pub struct PensionInput {
    /// Employee name
    pub name: String,
    /// Last basic pay drawn
    #[serde(deserialize_with = "deserialize_lenient")]
    #[schemars(with = "f64")]
    pub basic_pay: Decimal,
    /// Date of birth (YYYY-MM-DD)
    pub date_of_birth: NaiveDate,
    /// Date of joining service (YYYY-MM-DD)
    pub date_of_joining: NaiveDate,
    /// Date of retirement (YYYY-MM-DD)
    pub retirement_date: NaiveDate,
    /// Earned leave balance in days
    #[serde(default, deserialize_with = "deserialize_lenient_count")]
    pub total_earned_leave_days: u32,
    /// DA rate in percent; taken from the retirement year when absent
    #[serde(default, deserialize_with = "deserialize_lenient_opt")]
    #[schemars(with = "Option<f64>")]
    pub da_rate_percent: Option<Decimal>,
}

impl PensionInput {
    /// Checks the first failing rule, in the order the fields are entered.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.name.trim().is_empty() {
            return Err(InputError::Missing { field: "name" });
        }
        if self.basic_pay <= Decimal::ZERO {
            return Err(InputError::NotPositive { field: "basic_pay" });
        }
        if self.date_of_joining <= self.date_of_birth {
            return Err(InputError::JoiningBeforeBirth);
        }
        let age_at_joining = completed_years(self.date_of_birth, self.date_of_joining);
        if age_at_joining < 18 {
            return Err(InputError::JoiningUnderage(age_at_joining));
        }
        if self.retirement_date <= self.date_of_joining {
            return Err(InputError::RetirementBeforeJoining);
        }
        Ok(())
    }
}

/// Calendar difference between two dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceLength {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl ServiceLength {
    /// Years, months and days from `start` to `end`. A short final month
    /// borrows the length of the month before `end`'s month.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        let mut years = end.year() - start.year();
        let mut months = end.month() as i32 - start.month() as i32;
        let mut days = end.day() as i32 - start.day() as i32;

        if days < 0 {
            months -= 1;
            days += days_in_previous_month(end) as i32;
        }
        if months < 0 {
            years -= 1;
            months += 12;
        }

        ServiceLength {
            years: years.max(0) as u32,
            months: months.max(0) as u32,
            days: days.max(0) as u32,
        }
    }
}

impl fmt::Display for ServiceLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years, {} months, {} days",
            self.years, self.months, self.days
        )
    }
}

fn days_in_previous_month(date: NaiveDate) -> u32 {
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .map_or(30, |last| last.day())
}

/// Age in completed years on `on`
pub fn completed_years(birth: NaiveDate, on: NaiveDate) -> u32 {
    let mut age = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalDetails {
    pub name: String,
    pub basic_pay: Decimal,
    pub date_of_birth: NaiveDate,
    pub date_of_joining: NaiveDate,
    pub retirement_date: NaiveDate,
    pub service_length: ServiceLength,
    pub total_earned_leave_days: u32,
    pub age_at_retirement: u32,
    pub da_rate: Decimal,
    pub cvp_factor: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PensionBreakdown {
    pub basic_pension: Decimal,
    pub commuted_pension: Decimal,
    pub commuted_value: Decimal,
    pub reduced_pension: Decimal,
    pub da_on_pension: Decimal,
    pub net_pension: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyPension {
    pub family_pension: Decimal,
    pub da_on_family_pension: Decimal,
    pub net_family_pension: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gratuity {
    pub gratuity: Decimal,
    pub net_gratuity: Decimal,
    pub is_limited: bool,
    /// Basic pay only; DA is not part of gratuity emoluments
    pub emoluments: Decimal,
    pub six_monthly_periods: u32,
    pub da: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PensionSummary {
    pub pension_in_hand: Decimal,
    pub family_pension_in_hand: Decimal,
    pub leave_encashment: Decimal,
    pub commuted_value: Decimal,
    pub retirement_gratuity: Decimal,
    pub final_total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PensionResult {
    pub personal: PersonalDetails,
    pub pension: PensionBreakdown,
    pub family_pension: FamilyPension,
    pub gratuity: Gratuity,
    pub leave_encashment: Decimal,
    pub summary: PensionSummary,
    pub warnings: Vec<Warning>,
}

/// Validate the input and compute every retirement benefit.
pub fn calculate_pension(input: &PensionInput) -> Result<PensionResult, InputError> {
    input.validate()?;

    let mut warnings = Vec::new();
    let basic_pay = input.basic_pay;
    let service = ServiceLength::between(input.date_of_joining, input.retirement_date);
    let age = completed_years(input.date_of_birth, input.retirement_date);

    let da_rate = match input.da_rate_percent {
        Some(rate) => rate,
        None => {
            let year = input.retirement_date.year();
            let rate = da_rate_for_year(year);
            log::warn!("no DA rate given; using {}% for {}", rate, year);
            warnings.push(Warning::DaRateFromRetirementYear { year, rate });
            rate
        }
    };

    if cvp_factor(age).is_none() {
        log::warn!("no CVP factor for age {}; using age {}", age, DEFAULT_CVP_AGE);
        warnings.push(Warning::CvpAgeOutOfRange { age });
    }
    let cvp = cvp_factor_or_default(age);

    let basic = basic_pension(basic_pay);
    let commuted = commuted_pension(basic);
    let lump_sum = commuted_value(commuted, cvp);
    let reduced = basic - commuted;
    let da_on_pension = da(basic, da_rate);
    let pension = PensionBreakdown {
        basic_pension: basic,
        commuted_pension: commuted,
        commuted_value: lump_sum,
        reduced_pension: reduced,
        da_on_pension,
        net_pension: reduced + da_on_pension,
    };

    let family = family_pension(basic);
    let da_on_family = da(family, da_rate);
    let family_pension = FamilyPension {
        family_pension: family,
        da_on_family_pension: da_on_family,
        net_family_pension: family + da_on_family,
    };

    let da_on_basic = da(basic_pay, da_rate);
    let periods = six_monthly_periods(service.years, service.months);
    let gross_gratuity = gratuity(basic_pay, periods);
    let gratuity = Gratuity {
        gratuity: gross_gratuity,
        net_gratuity: gross_gratuity.min(GRATUITY_LIMIT),
        is_limited: gross_gratuity > GRATUITY_LIMIT,
        emoluments: basic_pay,
        six_monthly_periods: periods,
        da: da_on_basic,
    };

    let leave = leave_encashment(basic_pay, da_on_basic, input.total_earned_leave_days);

    log::debug!(
        "Pension: service={}, age={}, cvp={}, da_rate={}, periods={}",
        service,
        age,
        cvp,
        da_rate,
        periods
    );

    let summary = PensionSummary {
        pension_in_hand: pension.net_pension,
        family_pension_in_hand: family_pension.net_family_pension,
        leave_encashment: leave,
        commuted_value: lump_sum,
        retirement_gratuity: gratuity.net_gratuity,
        final_total: pension.net_pension
            + family_pension.net_family_pension
            + leave
            + lump_sum
            + gratuity.net_gratuity,
    };

    Ok(PensionResult {
        personal: PersonalDetails {
            name: input.name.clone(),
            basic_pay,
            date_of_birth: input.date_of_birth,
            date_of_joining: input.date_of_joining,
            retirement_date: input.retirement_date,
            service_length: service,
            total_earned_leave_days: input.total_earned_leave_days,
            age_at_retirement: age,
            da_rate,
            cvp_factor: cvp,
        },
        pension,
        family_pension,
        gratuity,
        leave_encashment: leave,
        summary,
        warnings,
    })
}

use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Non-fatal notes raised when an input falls back to its documented default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
pub enum Warning {
    /// City is not in the city table; category Z, non-metro assumed.
    UnknownCity { city: String },
    /// Class has no GIS rate; GIS deduction is zero.
    UnknownClass { class: String },
    /// Age at retirement has no CVP factor; the age-60 factor was used.
    CvpAgeOutOfRange { age: u32 },
    /// No DA rate was supplied; the rate for the retirement year was used.
    DaRateFromRetirementYear {
        year: i32,
        #[schemars(with = "f64")]
        rate: Decimal,
    },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::UnknownCity { city } => {
                write!(f, "city '{}' not found; using category Z, non-metro", city)
            }
            Warning::UnknownClass { class } => {
                write!(f, "class '{}' has no GIS rate; GIS set to 0", class)
            }
            Warning::CvpAgeOutOfRange { age } => {
                write!(f, "no CVP factor for age {}; using the age-60 factor", age)
            }
            Warning::DaRateFromRetirementYear { year, rate } => {
                write!(f, "DA rate not given; using {}% for retirement year {}", rate, year)
            }
        }
    }
}

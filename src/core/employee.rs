use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pension scheme the employee belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum EmployeeType {
    /// General Provident Fund (old pension scheme); subscription entered manually
    #[default]
    #[serde(rename = "GPF")]
    Gpf,
    /// National Pension System; DCPS deducted at 10% of basic + DA
    #[serde(rename = "NPS")]
    Nps,
}

impl EmployeeType {
    pub fn from_str(s: &str) -> Option<EmployeeType> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GPF" => Some(EmployeeType::Gpf),
            "NPS" => Some(EmployeeType::Nps),
            _ => None,
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            EmployeeType::Gpf => "GPF",
            EmployeeType::Nps => "NPS",
        }
    }
}

impl std::fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum HandicapStatus {
    #[default]
    Regular,
    Handicap,
}

impl HandicapStatus {
    pub fn from_str(s: &str) -> Option<HandicapStatus> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Some(HandicapStatus::Regular),
            "handicap" => Some(HandicapStatus::Handicap),
            _ => None,
        }
    }
}

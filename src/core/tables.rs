//! Compiled-in lookup tables: cities, pay matrix, CVP factors, GIS, DA rates.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// HRA city classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum CityCategory {
    X,
    Y,
    #[default]
    Z,
}

impl CityCategory {
    pub fn from_str(s: &str) -> Option<CityCategory> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Some(CityCategory::X),
            "Y" => Some(CityCategory::Y),
            "Z" => Some(CityCategory::Z),
            _ => None,
        }
    }
}

impl std::fmt::Display for CityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CityCategory::X => "X",
            CityCategory::Y => "Y",
            CityCategory::Z => "Z",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub name: &'static str,
    pub category: CityCategory,
    pub is_metro: bool,
}

const fn city(name: &'static str, category: CityCategory, is_metro: bool) -> City {
    City {
        name,
        category,
        is_metro,
    }
}

pub const CITIES: &[City] = &[
    city("Greater Mumbai (UA)", CityCategory::X, true),
    city("Pune (UA)", CityCategory::X, true),
    city("Amravati", CityCategory::Y, false),
    city("Nagpur", CityCategory::Y, false),
    city("Aurangabad", CityCategory::Y, false),
    city("Nashik", CityCategory::Y, false),
    city("Bhiwandi", CityCategory::Y, false),
    city("Solapur", CityCategory::Y, false),
    city("Kolhapur", CityCategory::Y, false),
    city("Vasai-Virar", CityCategory::Y, false),
    city("Malegaon", CityCategory::Y, false),
    city("Nanded-Waghala", CityCategory::Y, false),
    city("Sangli", CityCategory::Y, false),
    city("Akola", CityCategory::Z, false),
    city("Latur", CityCategory::Z, false),
    city("Beed", CityCategory::Z, false),
    city("Dhule", CityCategory::Z, false),
    city("Parbhani", CityCategory::Z, false),
    city("Washim", CityCategory::Z, false),
    city("Other", CityCategory::Z, false),
];

/// Find a city by name (trimmed, ASCII case-insensitive).
pub fn find_city(name: &str) -> Option<&'static City> {
    let name = name.trim();
    CITIES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Category for a city; unknown cities fall in category Z.
pub fn city_category(name: &str) -> CityCategory {
    find_city(name).map_or(CityCategory::Z, |c| c.category)
}

/// Metro status for a city; unknown cities are non-metro.
pub fn is_metro(name: &str) -> bool {
    find_city(name).is_some_and(|c| c.is_metro)
}

/// One row of the 7th CPC pay matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayMatrixEntry {
    pub level: u8,
    pub basic_pay: u32,
    /// Pre-revision grade pay, for indication only
    pub grade_pay: &'static str,
}

const fn level(level: u8, basic_pay: u32, grade_pay: &'static str) -> PayMatrixEntry {
    PayMatrixEntry {
        level,
        basic_pay,
        grade_pay,
    }
}

pub const PAY_MATRIX: [PayMatrixEntry; 20] = [
    level(1, 15000, "1300"),
    level(2, 15300, "1400"),
    level(3, 16600, "1600"),
    level(4, 17100, "1650 & 1700"),
    level(5, 18000, "1800"),
    level(6, 19900, "1900"),
    level(7, 21700, "2000"),
    level(8, 25500, "2400"),
    level(9, 26400, "2500"),
    level(10, 29200, "2800"),
    level(11, 30100, "2900 & 3000"),
    level(12, 32000, "3500"),
    level(13, 35400, "4100 & 4200"),
    level(14, 38600, "4300"),
    level(15, 41800, "4400"),
    level(16, 44900, "4500 & 4600"),
    level(17, 47600, "4800"),
    level(18, 49100, "5000"),
    level(19, 55100, "5000"),
    level(20, 56100, "5400"),
];

/// Pay matrix entry for a level; levels outside 1..=20 resolve to level 1.
pub fn pay_matrix_entry(level: u32) -> &'static PayMatrixEntry {
    PAY_MATRIX
        .iter()
        .find(|e| u32::from(e.level) == level)
        .unwrap_or(&PAY_MATRIX[0])
}

/// Commutation value factors by age at retirement
const CVP_TABLE: [(u32, Decimal); 13] = [
    (58, dec!(8.194)),
    (59, dec!(8.371)),
    (60, dec!(8.543)),
    (61, dec!(8.711)),
    (62, dec!(8.874)),
    (63, dec!(9.032)),
    (64, dec!(9.186)),
    (65, dec!(9.335)),
    (66, dec!(9.480)),
    (67, dec!(9.621)),
    (68, dec!(9.757)),
    (69, dec!(9.890)),
    (70, dec!(10.019)),
];

pub const DEFAULT_CVP_AGE: u32 = 60;

/// CVP factor for an age, or `None` outside 58..=70.
pub fn cvp_factor(age: u32) -> Option<Decimal> {
    CVP_TABLE
        .iter()
        .find(|(a, _)| *a == age)
        .map(|(_, factor)| *factor)
}

/// CVP factor for an age, falling back to the age-60 factor.
pub fn cvp_factor_or_default(age: u32) -> Decimal {
    cvp_factor(age).unwrap_or(dec!(8.543))
}

/// Monthly Group Insurance Scheme deduction by employee class.
pub fn gis_amount(class: &str) -> Option<Decimal> {
    match class.trim() {
        "Class 1" => Some(dec!(960)),
        "Class 2" => Some(dec!(480)),
        "Class 3" => Some(dec!(360)),
        "Class 4" => Some(dec!(240)),
        _ => None,
    }
}

/// DA rate currently in force (percent).
pub const CURRENT_DA_RATE: Decimal = dec!(55);

/// DA rate (percent) applicable to a retirement in the given calendar year.
pub fn da_rate_for_year(year: i32) -> Decimal {
    match year {
        2025.. => dec!(55),
        2024 => dec!(52),
        2023 => dec!(50),
        _ => dec!(48),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_city_lookup() {
        let pune = find_city("Pune (UA)").unwrap();
        assert_eq!(pune.category, CityCategory::X);
        assert!(pune.is_metro);
        assert_eq!(city_category("Nagpur"), CityCategory::Y);
        assert!(!is_metro("Nagpur"));
    }

    #[test]
    fn city_lookup_ignores_case_and_whitespace() {
        assert_eq!(city_category("  greater mumbai (ua) "), CityCategory::X);
        assert!(is_metro("GREATER MUMBAI (UA)"));
    }

    #[test]
    fn unknown_city_defaults_to_z_non_metro() {
        assert!(find_city("Atlantis").is_none());
        assert_eq!(city_category("Atlantis"), CityCategory::Z);
        assert!(!is_metro("Atlantis"));
    }

    #[test]
    fn every_category_has_cities() {
        for cat in [CityCategory::X, CityCategory::Y, CityCategory::Z] {
            assert!(CITIES.iter().any(|c| c.category == cat));
        }
        assert!(CITIES.iter().filter(|c| c.is_metro).all(|c| c.category == CityCategory::X));
    }

    #[test]
    fn pay_matrix_levels() {
        assert_eq!(pay_matrix_entry(1).basic_pay, 15000);
        assert_eq!(pay_matrix_entry(13).grade_pay, "4100 & 4200");
        assert_eq!(pay_matrix_entry(20).basic_pay, 56100);
    }

    #[test]
    fn pay_matrix_out_of_range_defaults_to_level_1() {
        assert_eq!(pay_matrix_entry(0).level, 1);
        assert_eq!(pay_matrix_entry(21).basic_pay, 15000);
    }

    #[test]
    fn pay_matrix_is_ascending() {
        for pair in PAY_MATRIX.windows(2) {
            assert_eq!(pair[1].level, pair[0].level + 1);
            assert!(pair[1].basic_pay >= pair[0].basic_pay);
        }
    }

    #[test]
    fn cvp_factors() {
        assert_eq!(cvp_factor(58), Some(dec!(8.194)));
        assert_eq!(cvp_factor(70), Some(dec!(10.019)));
        assert_eq!(cvp_factor(57), None);
        assert_eq!(cvp_factor_or_default(57), dec!(8.543));
        assert_eq!(cvp_factor_or_default(71), dec!(8.543));
        assert_eq!(cvp_factor_or_default(DEFAULT_CVP_AGE), dec!(8.543));
    }

    #[test]
    fn gis_by_class() {
        assert_eq!(gis_amount("Class 1"), Some(dec!(960)));
        assert_eq!(gis_amount("Class 2"), Some(dec!(480)));
        assert_eq!(gis_amount("Class 3"), Some(dec!(360)));
        assert_eq!(gis_amount("Class 4"), Some(dec!(240)));
        assert_eq!(gis_amount("Class 5"), None);
    }

    #[test]
    fn da_rates_by_year() {
        assert_eq!(da_rate_for_year(2026), dec!(55));
        assert_eq!(da_rate_for_year(2025), dec!(55));
        assert_eq!(da_rate_for_year(2024), dec!(52));
        assert_eq!(da_rate_for_year(2023), dec!(50));
        assert_eq!(da_rate_for_year(2010), dec!(48));
    }

    #[test]
    fn category_from_str() {
        assert_eq!(CityCategory::from_str("x"), Some(CityCategory::X));
        assert_eq!(CityCategory::from_str("Y"), Some(CityCategory::Y));
        assert_eq!(CityCategory::from_str("w"), None);
    }
}

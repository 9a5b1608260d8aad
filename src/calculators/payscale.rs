use crate::core::formulas::pay_scale_increments;
use crate::core::tables::{pay_matrix_entry, PayMatrixEntry, PAY_MATRIX};
use rust_decimal::Decimal;
use serde::Serialize;

/// Annual increments shown for each level
pub const INCREMENT_YEARS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayScale {
    pub id: String,
    pub level: u8,
    pub base_pay: Decimal,
    pub grade_pay: String,
    pub increments: Vec<Decimal>,
    /// Pay after the last increment
    pub current_pay: Decimal,
}

impl PayScale {
    fn from_entry(entry: &PayMatrixEntry) -> Self {
        let base_pay = Decimal::from(entry.basic_pay);
        let increments = pay_scale_increments(base_pay, INCREMENT_YEARS);
        let current_pay = increments.last().copied().unwrap_or(base_pay);
        PayScale {
            id: format!("S-{}", entry.level),
            level: entry.level,
            base_pay,
            grade_pay: entry.grade_pay.to_string(),
            increments,
            current_pay,
        }
    }
}

/// Scale for one pay matrix level; out-of-range levels resolve to level 1.
pub fn pay_scale(level: u32) -> PayScale {
    if !(1..=PAY_MATRIX.len() as u32).contains(&level) {
        log::warn!("pay level {} is outside 1-20; showing level 1", level);
    }
    PayScale::from_entry(pay_matrix_entry(level))
}

pub fn all_pay_scales() -> Vec<PayScale> {
    PAY_MATRIX.iter().map(PayScale::from_entry).collect()
}

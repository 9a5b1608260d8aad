pub mod form16;
pub mod regime;

pub use form16::{calculate_tax, TaxInput, TaxResult};

pub mod employee;
pub mod formulas;
pub mod input;
pub mod money;
pub mod payslip;
pub mod tables;
pub mod warnings;

// Flat public surface for domain types and functions.
pub use employee::{EmployeeType, HandicapStatus};
pub use input::{InputError, InputField};
pub use money::format_inr;
pub use payslip::{calculate_payslip, Allowance, PayslipInput, PayslipResult};
pub use tables::CityCategory;
pub use warnings::Warning;

pub mod cooperative;
pub mod eligibility;
pub mod fd;
pub mod loan;
pub mod payscale;
pub mod pension;
pub mod sip;

pub use cooperative::{calculate_cooperative, CooperativeInput};
pub use eligibility::{calculate_eligibility, EligibilityInput};
pub use fd::{calculate_fd, Compounding, FdInput};
pub use loan::{calculate_loan, LoanResult, LoanTerms};
pub use payscale::{all_pay_scales, pay_scale, PayScale};
pub use pension::{calculate_pension, PensionInput, PensionResult};
pub use sip::{calculate_sip, SipPlan};

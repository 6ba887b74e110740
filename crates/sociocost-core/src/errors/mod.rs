//! Error taxonomy for the cost model.
//!
//! Hard validation and invalid-input errors are rejected at the store
//! boundary and never reach the calculation engine; calculation errors are
//! caught by the model and turned into the zeroed error result.

mod calc_error;
mod error_code;
mod scenario_error;
mod validation_error;

pub use calc_error::CalcError;
pub use error_code::{CostErrorCode, CALC_ERROR, SCENARIO_ERROR, VALIDATION_ERROR};
pub use scenario_error::ScenarioError;
pub use validation_error::ValidationError;

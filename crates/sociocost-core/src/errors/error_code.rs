//! CostErrorCode trait for structured error reporting at the API boundary.

/// Trait for converting model errors to structured code strings.
/// Every error enum implements this so boundary consumers can branch on a
/// stable code rather than parsing display text.
pub trait CostErrorCode {
    /// Returns the stable error code string (e.g., "VALIDATION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const CALC_ERROR: &str = "CALC_ERROR";
pub const SCENARIO_ERROR: &str = "SCENARIO_ERROR";

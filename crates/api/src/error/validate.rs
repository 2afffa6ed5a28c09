//! Validation utilities shared by the kemgate crates

use super::{Error, Result};

/// Validate a parameter condition
pub fn parameter(condition: bool, context: &'static str, message: &str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter {
            context,
            message: message.into(),
        });
    }
    Ok(())
}

/// Validate an exact length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum length
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::InvalidLength {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

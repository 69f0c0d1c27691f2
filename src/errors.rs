use std::result::Result as StdResult;

use thiserror::Error;

use crate::validation::ValidationError;

/// Error type that captures store-facing failures.
///
/// "Not found" is never an error in this crate: lookups return `Option`,
/// mutations against unknown ids are silent no-ops.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = StdResult<T, CoreError>;

impl From<ValidationError> for CoreError {
    fn from(err: ValidationError) -> Self {
        CoreError::InvalidArgument(err.to_string())
    }
}

//! Convenience result type alias for CareerHub.

use crate::error::AppError;

/// A specialized `Result` type for CareerHub operations.
pub type AppResult<T> = Result<T, AppError>;

//! Result type alias

use crate::error::DsError;

/// Standard Result type for fallible operations
pub type DsResult<T> = Result<T, DsError>;

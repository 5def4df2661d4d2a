//! REST API module.
//!
//! Contains the routes and handlers the admin property table talks to.

mod properties;

pub use properties::*;

/// Result type for handlers; errors render as the error envelope.
pub type ApiResult<T> = Result<T, crate::errors::AppError>;

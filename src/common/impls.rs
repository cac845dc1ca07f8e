//! Implementation blocks for common types.

/// Constructor, Display and Error for CustomError.
pub mod custom_error;

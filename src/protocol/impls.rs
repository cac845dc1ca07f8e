//! Implementation blocks for wire types.

/// Display and Error for EncodingError.
pub mod encoding_error;

/// Request helpers (method names).
pub mod request;

/// Reply constructors and accessors.
pub mod response;

//! Enumerations for tracker operations.

/// Outcome of a liveness probe (active, inactive, unreachable).
pub mod probe_status;

/// Domain rejections raised by tracker operations.
pub mod tracker_error;

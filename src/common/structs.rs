//! Common data structures.

/// Generic error carrying a message, used during boot.
pub mod custom_error;

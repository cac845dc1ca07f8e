//! Configuration enumerations.

/// Errors raised while reading or parsing the configuration file.
pub mod configuration_error;

/// Payload encoding used on the wire.
pub mod wire_encoding;

//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Core tracker settings (file list, peer timeouts).
pub mod tracker_config;

/// TCP server configuration.
pub mod tcp_server_config;

/// Sentry error reporting configuration.
pub mod sentry_config;

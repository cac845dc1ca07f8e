//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the tracker configuration
//! from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **tracker_config**: File list location and the timeouts used while talking to peers
//! - **tcp_server**: One or more TCP listeners speaking the rendezvous protocol
//! - **sentry_config**: Error reporting configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use rendezvous_tracker::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one if asked to
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations (wire encoding, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

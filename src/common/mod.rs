//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules in the tracker codebase.
//!
//! # Utilities
//!
//! - Logging setup
//! - Timestamp utilities
//! - Reading the distributable file list
//!
//! # Data Structures
//!
//! - `CustomError` - Boot-time error type
//!
//! # Example
//!
//! ```rust,ignore
//! use rendezvous_tracker::common::common::{current_time, read_file_list};
//!
//! let catalog = read_file_list("fileDownloadList.txt")?;
//! let now = current_time();
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

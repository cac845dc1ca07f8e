//! # Rendezvous Tracker
//!
//! The central meeting point of a peer-to-peer file swarm. Peers register an
//! account, log in to receive a session token, declare which files and pieces
//! they hold, and ask the tracker who else holds a file. The tracker never
//! moves file data itself.
//!
//! ## Overview
//!
//! - **Accounts**: usernames are unique and persist across login/logout
//! - **Sessions**: a random token per login, revoked on logout, re-login or eviction
//! - **Availability index**: file → peers sharing it, always in step with the accounts
//! - **Liveness**: before answering DETAILS the tracker probes every candidate
//!   peer and evicts the ones that do not answer
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rendezvous_tracker::config::structs::configuration::Configuration;
//! use rendezvous_tracker::tracker::structs::peer_tracker::PeerTracker;
//!
//! let config = Arc::new(Configuration::load_from_file("config.toml", false)?);
//! let tracker = Arc::new(PeerTracker::new(config, read_file_list("fileDownloadList.txt")?));
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup, file list parsing and the boot error type
//! - [`config`] - Configuration management and TOML parsing
//! - [`protocol`] - Wire messages, payload encoding and framing
//! - [`stats`] - Real-time statistics counters
//! - [`structs`] - CLI argument parsing
//! - [`tcp`] - TCP server, request dispatch and the liveness prober
//! - [`tracker`] - Accounts, sessions and the file availability index

/// Common utilities and shared functionality.
///
/// Contains logging setup, the file list reader and `CustomError`.
pub mod common;

/// Configuration management module.
///
/// Handles loading, validating and writing the TOML configuration file.
pub mod config;

/// Rendezvous wire protocol.
///
/// Request and reply messages, their MessagePack/JSON encoding and the
/// length-prefixed framing shared by the server and the prober.
pub mod protocol;

/// Statistics tracking module.
pub mod stats;

/// CLI argument structures.
pub mod structs;

/// TCP front end.
///
/// Listens for peer connections, dispatches requests to the tracker and
/// probes peers during DETAILS.
pub mod tcp;

/// Core tracker state.
///
/// Accounts, sessions and the file availability index, kept consistent
/// under concurrent access.
pub mod tracker;

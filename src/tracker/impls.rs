//! Implementation blocks for tracker data structures.
//!
//! Implementations are organized by the struct they extend; the
//! `PeerTracker` methods are split by concern.

/// PeerTracker core implementation: construction and catalog lookups.
pub mod peer_tracker;

/// PeerTracker account operations (register, login details, notifications).
pub mod peer_tracker_accounts;

/// PeerTracker file availability queries.
pub mod peer_tracker_files;

/// PeerTracker session token issuance, logout and eviction.
pub mod peer_tracker_sessions;

/// PeerTracker liveness-verified peer lookups.
pub mod peer_tracker_liveness;

/// PeerRegistry index maintenance.
pub mod peer_registry;

/// PeerAccount construction and snapshots.
pub mod peer_account;

/// SessionToken generation and Display.
pub mod session_token;

/// InventoryReport normalisation.
pub mod inventory_report;

//! Data structures for tracker state.

/// Main tracker instance struct.
///
/// Holds the configuration, the file catalog, the peer registry, the
/// active sessions and the statistics counters.
pub mod peer_tracker;

/// Accounts plus the file availability index, guarded together.
pub mod peer_registry;

/// Per-username account record.
pub mod peer_account;

/// Credential-free account snapshot sent over the wire.
pub mod peer_info;

/// Session bearer token.
pub mod session_token;

/// Address and file inventory declared at login.
pub mod inventory_report;

/// Snapshot of one sharer taken before probing.
pub mod probe_candidate;

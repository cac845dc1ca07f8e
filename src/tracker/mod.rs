//! Core rendezvous tracker state.
//!
//! This module holds everything the tracker knows about the swarm: who is
//! registered, who is logged in, and who holds which file.
//!
//! # Architecture
//!
//! - `PeerRegistry` - accounts keyed by username plus the file → usernames
//!   index, behind one `RwLock` so both change together
//! - Sessions - active tokens mapped to their owner, behind a second `RwLock`
//!   that is only ever taken after the registry lock
//! - `LivenessProbe` - the seam through which DETAILS checks peers before
//!   trusting them; no lock is held while probing
//!
//! # Example
//!
//! ```rust,ignore
//! use rendezvous_tracker::tracker::structs::peer_tracker::PeerTracker;
//!
//! let tracker = PeerTracker::new(config, vec!["movie.mp4".to_string()]);
//! tracker.register("alice", "pw1")?;
//! let token = tracker.issue_token("alice")?;
//! ```

/// Enumerations for tracker operations.
pub mod enums;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Data structures for tracker state.
pub mod structs;

/// Traits at the tracker/network boundary.
pub mod traits;

/// Unit tests for tracker functionality.
#[cfg(test)]
mod tests;

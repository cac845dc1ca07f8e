//! Real-time statistics tracking.
//!
//! Atomic counters for everything the tracker does, updated from every
//! connection task without taking a lock and printed periodically by the
//! console task in `main`.
//!
//! # Statistics Categories
//!
//! - Registry: accounts, live sessions, catalog size
//! - Protocol: connections and each handled request kind
//! - Liveness: probes sent, probes failed, peers evicted
//!
//! # Example
//!
//! ```rust,ignore
//! use rendezvous_tracker::stats::enums::stats_event::StatsEvent;
//!
//! tracker.update_stats(StatsEvent::ListsHandled, 1);
//! let stats = tracker.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;

/// Unit tests for statistics functionality.
#[cfg(test)]
mod tests;

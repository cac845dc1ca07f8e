/// Statistics accessors on the PeerTracker.
pub mod peer_tracker;

/// StatsAtomics construction.
pub mod stats_atomics;

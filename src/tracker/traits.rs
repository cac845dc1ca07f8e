//! Seams between the tracker state and the network.

/// Checks whether a peer still answers at its advertised address.
pub mod liveness_probe;

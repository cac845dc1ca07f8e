//! TCP front end of the tracker.
//!
//! Each accepted connection carries one request (two for LOGIN) and is
//! handled on its own task. The same framing is used in the other
//! direction when the tracker probes a peer during DETAILS.
//!
//! # Request handling
//!
//! - REGISTER, LOGIN, LOGOUT, LIST, DETAILS, ALL_PEERS get exactly one reply
//! - NOTIFY_* and I_AM_SEEDER are fire-and-forget
//! - Anything that does not decode is logged and the connection is closed
//!   without a reply

/// Connection state enumerations.
pub mod enums;

/// Implementation blocks for the server, handler and prober.
pub mod impls;

/// TCP server, connection handler and liveness prober.
pub mod structs;

/// Listener start-up helper.
#[allow(clippy::module_inception)]
pub mod tcp;

/// Per-connection request dispatcher.
pub mod connection_handler;

/// TCP implementation of the liveness probe.
pub mod liveness_prober;

/// Listening socket plus its handler.
pub mod tcp_server;

/// Request dispatch and the LOGIN state machine.
pub mod connection_handler;

/// Probing peers over TCP.
pub mod liveness_prober;

/// Socket setup and the accept loop.
pub mod tcp_server;

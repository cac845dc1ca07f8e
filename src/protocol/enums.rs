//! Wire enumerations.

/// Payload encoding failures.
pub mod encoding_error;

/// Connection-level failures (I/O, framing, decoding, timeouts).
pub mod protocol_error;

/// Requests sent by peers (and by the tracker when probing).
pub mod request;

/// Replies sent back on the same connection.
pub mod response;

/// Outcome codes carried by replies.
pub mod status_code;

//! Rendezvous wire protocol.
//!
//! Every exchange is one request frame followed by at most one reply frame
//! on a fresh TCP connection. LOGIN is the exception: after the reply the
//! peer sends a second frame carrying its inventory.
//!
//! # Framing
//!
//! ```text
//! +----------------------+---------------------------+
//! | length: u32 (BE)     | payload: `length` bytes   |
//! +----------------------+---------------------------+
//! ```
//!
//! The payload is a MessagePack (named fields) or JSON document, chosen per
//! listener in the configuration. Requests are tagged by `method`, replies
//! by `reply`.
//!
//! # Example
//!
//! ```rust,ignore
//! use rendezvous_tracker::protocol::enums::request::Request;
//! use rendezvous_tracker::protocol::framing::{read_message, write_message};
//!
//! write_message(&mut stream, &encoding, &Request::List, max_frame_size).await?;
//! let reply: Response = read_message(&mut stream, &encoding, max_frame_size).await?;
//! ```

/// Request, reply, status code and error enumerations.
pub mod enums;

/// Payload encoding (MessagePack, JSON).
pub mod encoding;

/// Length-prefixed frame reading and writing.
pub mod framing;

/// Implementation blocks for wire types.
pub mod impls;

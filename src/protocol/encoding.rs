//! Payload encoding.

pub mod encoder;

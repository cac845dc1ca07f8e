use std::time::Duration;
use thiserror::Error;
use crate::protocol::enums::encoding_error::EncodingError;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Connection closed by remote")]
    ConnectionClosed,

    #[error("Frame of {size} bytes exceeds the limit of {limit} bytes")]
    FrameTooLarge { size: usize, limit: usize },

    #[error("{0}")]
    Encoding(#[from] EncodingError),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("Unexpected message: {0}")]
    UnexpectedMessage(String),
}

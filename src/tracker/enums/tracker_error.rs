use thiserror::Error;

/// Domain rejections. None of these abort a connection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Username {0} is already registered")]
    AlreadyRegistered(String),

    #[error("Unknown peer: {0}")]
    UnknownPeer(String),

    #[error("Unknown file: {0}")]
    UnknownFile(String),

    #[error("Peer {username} does not share {file_name}")]
    FileNotShared { username: String, file_name: String },

    #[error("Invalid session token")]
    InvalidToken,
}

use serde::{Deserialize, Serialize};
use crate::config::enums::wire_encoding::WireEncoding;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TcpServerConfig {
    pub enabled: bool,
    pub bind_address: String,
    /// Seconds to wait for the first request frame of a connection.
    pub request_timeout: u64,
    pub max_frame_size: usize,
    pub encoding: WireEncoding,
    pub reuse_address: bool,
    pub backlog: i32,
}

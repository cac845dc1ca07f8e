use std::time::Duration;
use crate::config::enums::wire_encoding::WireEncoding;

#[derive(Debug, Clone)]
pub struct LivenessProber {
    pub(crate) encoding: WireEncoding,
    pub(crate) max_frame_size: usize,
    pub(crate) connect_timeout: Duration,
    pub(crate) response_timeout: Duration,
}

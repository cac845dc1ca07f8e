use async_trait::async_trait;
use crate::tracker::enums::probe_status::ProbeStatus;

#[async_trait]
pub trait LivenessProbe: Send + Sync + std::fmt::Debug {
    /// `host` is whatever the peer advertised, an IP literal or a hostname.
    async fn probe(&self, host: &str, port: u16) -> ProbeStatus;
}

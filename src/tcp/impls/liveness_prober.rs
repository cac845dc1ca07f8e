use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use tokio::net::TcpStream;
use tokio::time::timeout;
use crate::config::enums::wire_encoding::WireEncoding;
use crate::protocol::enums::protocol_error::ProtocolError;
use crate::protocol::enums::request::Request;
use crate::protocol::enums::response::Response;
use crate::protocol::enums::status_code::StatusCode;
use crate::protocol::framing::{read_message, write_message};
use crate::tcp::structs::liveness_prober::LivenessProber;
use crate::tracker::enums::probe_status::ProbeStatus;
use crate::tracker::traits::liveness_probe::LivenessProbe;

impl LivenessProber {
    pub fn new(encoding: WireEncoding, max_frame_size: usize, connect_timeout: Duration, response_timeout: Duration) -> LivenessProber
    {
        LivenessProber {
            encoding,
            max_frame_size,
            connect_timeout,
            response_timeout,
        }
    }

    /// One probe round trip: connect, send CHECK_ACTIVE, read one reply.
    /// Hostname resolution counts against the connect timeout.
    pub async fn exchange(&self, host: &str, port: u16) -> Result<Response, ProtocolError>
    {
        let mut stream = timeout(self.connect_timeout, TcpStream::connect((host, port))).await
            .map_err(|_| ProtocolError::Timeout(self.connect_timeout))??;
        write_message(&mut stream, &self.encoding, &Request::CheckActiveTrackerToPeer, self.max_frame_size).await?;
        timeout(self.response_timeout, read_message(&mut stream, &self.encoding, self.max_frame_size)).await
            .map_err(|_| ProtocolError::Timeout(self.response_timeout))?
    }
}

#[async_trait]
impl LivenessProbe for LivenessProber {
    #[tracing::instrument(level = "debug")]
    async fn probe(&self, host: &str, port: u16) -> ProbeStatus
    {
        match self.exchange(host, port).await {
            Ok(response) if response.status_code() == Some(StatusCode::PeerIsActive) => ProbeStatus::Active,
            Ok(response) => {
                debug!("[PROBE] {host}:{port} answered {response:?}");
                ProbeStatus::Inactive
            }
            Err(error) => {
                debug!("[PROBE] {host}:{port} unreachable: {error}");
                ProbeStatus::Unreachable
            }
        }
    }
}

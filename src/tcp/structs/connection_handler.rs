use std::sync::Arc;
use std::time::Duration;
use crate::config::enums::wire_encoding::WireEncoding;
use crate::tracker::structs::peer_tracker::PeerTracker;
use crate::tracker::traits::liveness_probe::LivenessProbe;

#[derive(Debug)]
pub struct ConnectionHandler {
    pub(crate) tracker: Arc<PeerTracker>,
    pub(crate) probe: Arc<dyn LivenessProbe>,
    pub(crate) encoding: WireEncoding,
    pub(crate) max_frame_size: usize,
    pub(crate) request_timeout: Duration,
    pub(crate) login_inventory_timeout: Duration,
}

use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::peer_registry::PeerRegistry;
use crate::tracker::structs::session_token::SessionToken;

/// Lock order: `registry` before `sessions`.
#[derive(Debug)]
pub struct PeerTracker {
    pub config: Arc<Configuration>,
    pub file_catalog: Arc<Vec<String>>,
    pub registry: Arc<RwLock<PeerRegistry>>,
    pub sessions: Arc<RwLock<BTreeMap<SessionToken, String>>>,
    pub stats: Arc<StatsAtomics>,
}

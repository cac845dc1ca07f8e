use std::collections::BTreeMap;
use std::sync::Arc;
use log::info;
use parking_lot::RwLock;
use crate::config::structs::configuration::Configuration;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::peer_registry::PeerRegistry;
use crate::tracker::structs::peer_tracker::PeerTracker;

impl PeerTracker {
    #[tracing::instrument(level = "debug", skip(file_catalog))]
    pub fn new(config: Arc<Configuration>, file_catalog: Vec<String>) -> PeerTracker
    {
        let registry = PeerRegistry::new(&file_catalog);
        info!("[BOOT] Tracker serving a catalog of {} files", file_catalog.len());
        let tracker = PeerTracker {
            config,
            file_catalog: Arc::new(file_catalog),
            registry: Arc::new(RwLock::new(registry)),
            sessions: Arc::new(RwLock::new(BTreeMap::new())),
            stats: Arc::new(StatsAtomics::new()),
        };
        tracker.set_stats(StatsEvent::Files, tracker.file_catalog.len() as i64);
        tracker
    }

    pub fn is_known_file(&self, file_name: &str) -> bool
    {
        self.registry.read_recursive().file_index.contains_key(file_name)
    }

    /// Holds the registry read lock while checking every account against the
    /// file index.
    pub fn is_consistent(&self) -> bool
    {
        self.registry.read_recursive().is_consistent()
    }
}

use futures_util::future::join_all;
use log::debug;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::probe_status::ProbeStatus;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::peer_info::PeerInfo;
use crate::tracker::structs::peer_tracker::PeerTracker;
use crate::tracker::traits::liveness_probe::LivenessProbe;

impl PeerTracker {
    /// Probes every peer sharing `file_name` and returns the ones that
    /// answered. Peers that did not answer are evicted.
    ///
    /// Probes run concurrently with no lock held.
    #[tracing::instrument(level = "debug", skip(probe))]
    pub async fn verified_peers_for(&self, file_name: &str, probe: &dyn LivenessProbe) -> Result<Vec<PeerInfo>, TrackerError>
    {
        let candidates = self.candidates_for(file_name)?;
        let results = join_all(candidates.into_iter().map(|candidate| async move {
            let status = match &candidate.endpoint {
                Some((host, port)) => probe.probe(host, *port).await,
                None => ProbeStatus::Unreachable,
            };
            (candidate, status)
        })).await;

        let mut active = Vec::new();
        for (candidate, status) in results {
            self.update_stats(StatsEvent::Probes, 1);
            debug!("[DETAILS] {} ({:?}) is {status:?}", candidate.username, candidate.endpoint);
            if status.is_active() {
                active.push(candidate.username);
                continue;
            }
            self.update_stats(StatsEvent::ProbesFailed, 1);
            self.evict_peer(&candidate.username, candidate.session_token);
        }

        let lock = self.registry.read_recursive();
        Ok(active.iter()
            .filter_map(|username| lock.accounts.get(username))
            .filter(|account| account.shares(file_name))
            .map(|account| account.to_peer_info())
            .collect())
    }
}

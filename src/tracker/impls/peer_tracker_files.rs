use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::peer_info::PeerInfo;
use crate::tracker::structs::peer_tracker::PeerTracker;
use crate::tracker::structs::probe_candidate::ProbeCandidate;

impl PeerTracker {
    pub fn file_catalog(&self) -> Vec<String>
    {
        self.file_catalog.as_ref().clone()
    }

    /// Snapshots of every account currently sharing `file_name`, unverified.
    #[tracing::instrument(level = "debug")]
    pub fn peers_for(&self, file_name: &str) -> Result<Vec<PeerInfo>, TrackerError>
    {
        let lock = self.registry.read_recursive();
        let holders = lock.file_index.get(file_name)
            .ok_or_else(|| TrackerError::UnknownFile(file_name.to_string()))?;
        Ok(holders.iter()
            .filter_map(|username| lock.accounts.get(username))
            .map(|account| account.to_peer_info())
            .collect())
    }

    /// Sharers of `file_name` with the endpoint and session they had at
    /// snapshot time.
    pub fn candidates_for(&self, file_name: &str) -> Result<Vec<ProbeCandidate>, TrackerError>
    {
        let lock = self.registry.read_recursive();
        let holders = lock.file_index.get(file_name)
            .ok_or_else(|| TrackerError::UnknownFile(file_name.to_string()))?;
        Ok(holders.iter()
            .filter_map(|username| lock.accounts.get(username))
            .map(|account| ProbeCandidate {
                username: account.username.clone(),
                endpoint: account.endpoint(),
                session_token: account.session_token,
            })
            .collect())
    }
}

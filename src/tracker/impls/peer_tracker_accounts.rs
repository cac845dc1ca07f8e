use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use log::{debug, warn};
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::inventory_report::InventoryReport;
use crate::tracker::structs::peer_account::PeerAccount;
use crate::tracker::structs::peer_info::PeerInfo;
use crate::tracker::structs::peer_tracker::PeerTracker;
use crate::tracker::structs::session_token::SessionToken;

impl PeerTracker {
    #[tracing::instrument(level = "debug", skip(password))]
    pub fn register(&self, username: &str, password: &str) -> Result<(), TrackerError>
    {
        let mut lock = self.registry.write();
        match lock.accounts.entry(username.to_string()) {
            Entry::Vacant(entry) => {
                entry.insert(PeerAccount::new(username, password));
                self.update_stats(StatsEvent::Accounts, 1);
                Ok(())
            }
            Entry::Occupied(_) => Err(TrackerError::AlreadyRegistered(username.to_string()))
        }
    }

    #[tracing::instrument(level = "debug", skip(password))]
    pub fn authenticate(&self, username: &str, password: &str) -> bool
    {
        let lock = self.registry.read_recursive();
        lock.accounts.get(username).map(|account| account.password == password).unwrap_or(false)
    }

    /// Overwrites the address and file bookkeeping of `username` with what it
    /// declared after logging in with `token`. File names outside the catalog
    /// are dropped and returned.
    #[tracing::instrument(level = "debug", skip(inventory))]
    pub fn apply_login_details(&self, username: &str, token: SessionToken, inventory: InventoryReport) -> Result<Vec<String>, TrackerError>
    {
        let mut lock = self.registry.write();
        match lock.accounts.get(username) {
            None => return Err(TrackerError::UnknownPeer(username.to_string())),
            Some(account) if account.session_token != Some(token) => return Err(TrackerError::InvalidToken),
            Some(_) => {}
        }

        let (inventory, rejected) = inventory.normalised(|file_name| lock.file_index.contains_key(file_name));
        for file_name in &rejected {
            warn!("[LOGIN] {username} declared {file_name}, which is not in the catalog");
        }
        debug!("[LOGIN] {username} at {}:{} shares {} files", inventory.ip, inventory.port, inventory.shared_files.len());
        lock.replace_inventory(username, inventory)?;
        Ok(rejected)
    }

    /// Returns true if the piece was not recorded yet.
    #[tracing::instrument(level = "debug")]
    pub fn record_piece_acquired(&self, username: &str, file_name: &str, piece_id: u32) -> Result<bool, TrackerError>
    {
        let mut lock = self.registry.write();
        lock.share(username, file_name)?;
        let account = lock.accounts.get_mut(username)
            .ok_or_else(|| TrackerError::UnknownPeer(username.to_string()))?;
        Ok(account.pieces.entry(file_name.to_string()).or_default().insert(piece_id))
    }

    /// Returns true if the file was not shared yet.
    #[tracing::instrument(level = "debug")]
    pub fn record_file_acquired(&self, username: &str, file_name: &str) -> Result<bool, TrackerError>
    {
        self.registry.write().share(username, file_name)
    }

    #[tracing::instrument(level = "debug")]
    pub fn mark_seeder(&self, username: &str, file_name: &str) -> Result<(), TrackerError>
    {
        let mut lock = self.registry.write();
        let account = lock.accounts.get_mut(username)
            .ok_or_else(|| TrackerError::UnknownPeer(username.to_string()))?;
        match account.seeder_bits.get_mut(file_name) {
            Some(bit) => {
                *bit = true;
                Ok(())
            }
            None => Err(TrackerError::FileNotShared {
                username: username.to_string(),
                file_name: file_name.to_string(),
            })
        }
    }

    #[tracing::instrument(level = "debug")]
    pub fn increment_downloads(&self, username: &str) -> bool
    {
        match self.registry.write().accounts.get_mut(username) {
            Some(account) => {
                account.download_count += 1;
                true
            }
            None => false
        }
    }

    #[tracing::instrument(level = "debug")]
    pub fn increment_failures(&self, username: &str) -> bool
    {
        match self.registry.write().accounts.get_mut(username) {
            Some(account) => {
                account.failure_count += 1;
                true
            }
            None => false
        }
    }

    pub fn get_peer(&self, username: &str) -> Option<PeerInfo>
    {
        self.registry.read_recursive().accounts.get(username).map(PeerAccount::to_peer_info)
    }

    pub fn get_peers(&self) -> BTreeMap<String, PeerInfo>
    {
        let lock = self.registry.read_recursive();
        lock.accounts.iter().map(|(username, account)| (username.clone(), account.to_peer_info())).collect()
    }

    pub fn get_account(&self, username: &str) -> Option<PeerAccount>
    {
        self.registry.read_recursive().accounts.get(username).cloned()
    }
}

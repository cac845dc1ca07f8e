use std::collections::{BTreeMap, BTreeSet};
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::inventory_report::InventoryReport;
use crate::tracker::structs::peer_registry::PeerRegistry;

impl PeerRegistry {
    pub fn new(file_catalog: &[String]) -> PeerRegistry
    {
        PeerRegistry {
            accounts: BTreeMap::new(),
            file_index: file_catalog.iter().map(|file_name| (file_name.clone(), BTreeSet::new())).collect(),
        }
    }

    /// Marks `file_name` as shared by `username`, on both the account and the
    /// index. Returns false if it already was.
    pub fn share(&mut self, username: &str, file_name: &str) -> Result<bool, TrackerError>
    {
        let holders = self.file_index.get_mut(file_name)
            .ok_or_else(|| TrackerError::UnknownFile(file_name.to_string()))?;
        let account = self.accounts.get_mut(username)
            .ok_or_else(|| TrackerError::UnknownPeer(username.to_string()))?;
        let added = account.share_file(file_name);
        holders.insert(username.to_string());
        Ok(added)
    }

    /// Removes `username` from every index entry and clears its file
    /// bookkeeping. Returns the files it was sharing.
    pub fn withdraw(&mut self, username: &str) -> Vec<String>
    {
        let Some(account) = self.accounts.get_mut(username) else {
            return Vec::new();
        };
        let files = account.clear_inventory();
        for file_name in &files {
            if let Some(holders) = self.file_index.get_mut(file_name) {
                holders.remove(username);
            }
        }
        files
    }

    /// Replaces the whole inventory of `username`. The report must already be
    /// normalised against the catalog.
    pub fn replace_inventory(&mut self, username: &str, inventory: InventoryReport) -> Result<(), TrackerError>
    {
        if !self.accounts.contains_key(username) {
            return Err(TrackerError::UnknownPeer(username.to_string()));
        }
        self.withdraw(username);

        let InventoryReport { ip, port, shared_files, pieces, seeder_bits } = inventory;
        for file_name in &shared_files {
            if let Some(holders) = self.file_index.get_mut(file_name) {
                holders.insert(username.to_string());
            }
        }
        if let Some(account) = self.accounts.get_mut(username) {
            account.ip = Some(ip);
            account.port = Some(port);
            account.shared_files = shared_files;
            account.pieces = pieces;
            account.seeder_bits = seeder_bits;
        }
        Ok(())
    }

    /// Checks both directions of the account/index invariant and the lockstep
    /// of each account's file collections.
    pub fn is_consistent(&self) -> bool
    {
        for (file_name, holders) in &self.file_index {
            for username in holders {
                match self.accounts.get(username) {
                    Some(account) if account.shared_files.contains(file_name) => {}
                    _ => return false,
                }
            }
        }
        for (username, account) in &self.accounts {
            let shared: BTreeSet<&String> = account.shared_files.iter().collect();
            if shared.len() != account.shared_files.len()
                || !shared.iter().copied().eq(account.pieces.keys())
                || !shared.iter().copied().eq(account.seeder_bits.keys()) {
                return false;
            }
            for file_name in &account.shared_files {
                match self.file_index.get(file_name) {
                    Some(holders) if holders.contains(username) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

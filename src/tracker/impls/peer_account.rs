use std::collections::{BTreeMap, BTreeSet};
use crate::tracker::structs::peer_account::PeerAccount;
use crate::tracker::structs::peer_info::PeerInfo;

impl PeerAccount {
    pub fn new(username: &str, password: &str) -> PeerAccount
    {
        PeerAccount {
            username: username.to_string(),
            password: password.to_string(),
            ip: None,
            port: None,
            session_token: None,
            shared_files: Vec::new(),
            pieces: BTreeMap::new(),
            seeder_bits: BTreeMap::new(),
            download_count: 0,
            failure_count: 0,
        }
    }

    pub fn shares(&self, file_name: &str) -> bool
    {
        self.seeder_bits.contains_key(file_name)
    }

    /// The advertised host and port, if the peer sent both.
    pub fn endpoint(&self) -> Option<(String, u16)>
    {
        let host = self.ip.as_deref()?.trim();
        if host.is_empty() {
            return None;
        }
        Some((host.to_string(), self.port?))
    }

    pub fn to_peer_info(&self) -> PeerInfo
    {
        PeerInfo {
            username: self.username.clone(),
            ip: self.ip.clone(),
            port: self.port,
            shared_files: self.shared_files.clone(),
            pieces: self.pieces.clone(),
            seeder_bits: self.seeder_bits.clone(),
            download_count: self.download_count,
            failure_count: self.failure_count,
        }
    }

    /// Starts sharing `file_name` with an empty piece set and the seeder bit
    /// down. Returns false if the file was already shared.
    pub(crate) fn share_file(&mut self, file_name: &str) -> bool
    {
        if self.shares(file_name) {
            return false;
        }
        self.shared_files.push(file_name.to_string());
        self.pieces.insert(file_name.to_string(), BTreeSet::new());
        self.seeder_bits.insert(file_name.to_string(), false);
        true
    }

    /// Drops all file bookkeeping and returns the files that were shared.
    pub(crate) fn clear_inventory(&mut self) -> Vec<String>
    {
        self.pieces.clear();
        self.seeder_bits.clear();
        std::mem::take(&mut self.shared_files)
    }
}

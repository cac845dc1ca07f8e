use std::collections::{BTreeMap, BTreeSet};
use serde::{Deserialize, Serialize};

/// Public snapshot of a [`PeerAccount`](crate::tracker::structs::peer_account::PeerAccount),
/// without credentials, as sent in DETAILS and ALL_PEERS replies.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PeerInfo {
    pub username: String,
    pub ip: Option<String>,
    pub port: Option<u16>,
    pub shared_files: Vec<String>,
    pub pieces: BTreeMap<String, BTreeSet<u32>>,
    pub seeder_bits: BTreeMap<String, bool>,
    pub download_count: u64,
    pub failure_count: u64,
}

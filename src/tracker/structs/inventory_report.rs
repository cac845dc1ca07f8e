use std::collections::{BTreeMap, BTreeSet};
use serde::{Deserialize, Serialize};

/// What a peer declares right after logging in: where it can be reached and
/// which files, pieces and complete copies it holds.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct InventoryReport {
    pub ip: String,
    pub port: u16,
    #[serde(default)]
    pub shared_files: Vec<String>,
    #[serde(default)]
    pub pieces: BTreeMap<String, BTreeSet<u32>>,
    #[serde(default)]
    pub seeder_bits: BTreeMap<String, bool>,
}

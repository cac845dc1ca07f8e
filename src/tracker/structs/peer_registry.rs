use std::collections::{BTreeMap, BTreeSet};
use crate::tracker::structs::peer_account::PeerAccount;

/// Accounts and the file availability index, kept behind a single lock so
/// that a change to one is never observable without the matching change to
/// the other.
///
/// The index stores usernames only; accounts are resolved on demand.
#[derive(Debug, Default)]
pub struct PeerRegistry {
    pub accounts: BTreeMap<String, PeerAccount>,
    pub file_index: BTreeMap<String, BTreeSet<String>>,
}

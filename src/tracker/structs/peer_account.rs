//! Per-username account record.

use std::collections::{BTreeMap, BTreeSet};
use crate::tracker::structs::session_token::SessionToken;

/// Authoritative state of one registered peer.
///
/// Accounts are created on registration and never deleted. The network
/// address and file bookkeeping are overwritten at every login and cleared
/// when the peer logs out or is evicted.
///
/// # Invariant
///
/// `shared_files` and the keys of `pieces` and `seeder_bits` always name the
/// same set of files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeerAccount {
    pub username: String,
    pub password: String,

    /// Last advertised address, as sent by the peer.
    pub ip: Option<String>,
    pub port: Option<u16>,

    /// Present only while logged in.
    pub session_token: Option<SessionToken>,

    /// Files this account holds at least part of, in declaration order.
    pub shared_files: Vec<String>,
    pub pieces: BTreeMap<String, BTreeSet<u32>>,
    pub seeder_bits: BTreeMap<String, bool>,

    /// Successful transfers other peers credited to this account.
    pub download_count: u64,

    /// Failed transfers other peers blamed on this account.
    pub failure_count: u64,
}

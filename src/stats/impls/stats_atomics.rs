use std::sync::atomic::AtomicI64;
use crate::common::common::current_time;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics
    {
        StatsAtomics {
            started: AtomicI64::new(current_time() as i64),
            timestamp_run_console: AtomicI64::new(0),
            files: AtomicI64::new(0),
            accounts: AtomicI64::new(0),
            sessions: AtomicI64::new(0),
            connections_handled: AtomicI64::new(0),
            registers_handled: AtomicI64::new(0),
            logins_handled: AtomicI64::new(0),
            logins_failed: AtomicI64::new(0),
            logouts_handled: AtomicI64::new(0),
            lists_handled: AtomicI64::new(0),
            all_peers_handled: AtomicI64::new(0),
            details_handled: AtomicI64::new(0),
            notifications_handled: AtomicI64::new(0),
            probes: AtomicI64::new(0),
            probes_failed: AtomicI64::new(0),
            peers_evicted: AtomicI64::new(0),
            bad_requests: AtomicI64::new(0),
        }
    }
}

impl Default for StatsAtomics {
    fn default() -> Self {
        Self::new()
    }
}

use std::sync::atomic::AtomicI64;

#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_console: AtomicI64,
    pub files: AtomicI64,
    pub accounts: AtomicI64,
    pub sessions: AtomicI64,
    pub connections_handled: AtomicI64,
    pub registers_handled: AtomicI64,
    pub logins_handled: AtomicI64,
    pub logins_failed: AtomicI64,
    pub logouts_handled: AtomicI64,
    pub lists_handled: AtomicI64,
    pub all_peers_handled: AtomicI64,
    pub details_handled: AtomicI64,
    pub notifications_handled: AtomicI64,
    pub probes: AtomicI64,
    pub probes_failed: AtomicI64,
    pub peers_evicted: AtomicI64,
    pub bad_requests: AtomicI64,
}

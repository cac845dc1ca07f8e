use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_console: i64,
    pub files: i64,
    pub accounts: i64,
    pub sessions: i64,
    pub connections_handled: i64,
    pub registers_handled: i64,
    pub logins_handled: i64,
    pub logins_failed: i64,
    pub logouts_handled: i64,
    pub lists_handled: i64,
    pub all_peers_handled: i64,
    pub details_handled: i64,
    pub notifications_handled: i64,
    pub probes: i64,
    pub probes_failed: i64,
    pub peers_evicted: i64,
    pub bad_requests: i64,
}

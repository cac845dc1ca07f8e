use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::peer_tracker::PeerTracker;

impl PeerTracker {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            timestamp_run_console: self.stats.timestamp_run_console.load(Ordering::SeqCst),
            files: self.stats.files.load(Ordering::SeqCst),
            accounts: self.stats.accounts.load(Ordering::SeqCst),
            sessions: self.stats.sessions.load(Ordering::SeqCst),
            connections_handled: self.stats.connections_handled.load(Ordering::SeqCst),
            registers_handled: self.stats.registers_handled.load(Ordering::SeqCst),
            logins_handled: self.stats.logins_handled.load(Ordering::SeqCst),
            logins_failed: self.stats.logins_failed.load(Ordering::SeqCst),
            logouts_handled: self.stats.logouts_handled.load(Ordering::SeqCst),
            lists_handled: self.stats.lists_handled.load(Ordering::SeqCst),
            all_peers_handled: self.stats.all_peers_handled.load(Ordering::SeqCst),
            details_handled: self.stats.details_handled.load(Ordering::SeqCst),
            notifications_handled: self.stats.notifications_handled.load(Ordering::SeqCst),
            probes: self.stats.probes.load(Ordering::SeqCst),
            probes_failed: self.stats.probes_failed.load(Ordering::SeqCst),
            peers_evicted: self.stats.peers_evicted.load(Ordering::SeqCst),
            bad_requests: self.stats.bad_requests.load(Ordering::SeqCst),
        }
    }

    fn stats_counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::Files => &self.stats.files,
            StatsEvent::Accounts => &self.stats.accounts,
            StatsEvent::Sessions => &self.stats.sessions,
            StatsEvent::TimestampConsole => &self.stats.timestamp_run_console,
            StatsEvent::ConnectionsHandled => &self.stats.connections_handled,
            StatsEvent::RegistersHandled => &self.stats.registers_handled,
            StatsEvent::LoginsHandled => &self.stats.logins_handled,
            StatsEvent::LoginsFailed => &self.stats.logins_failed,
            StatsEvent::LogoutsHandled => &self.stats.logouts_handled,
            StatsEvent::ListsHandled => &self.stats.lists_handled,
            StatsEvent::AllPeersHandled => &self.stats.all_peers_handled,
            StatsEvent::DetailsHandled => &self.stats.details_handled,
            StatsEvent::NotificationsHandled => &self.stats.notifications_handled,
            StatsEvent::Probes => &self.stats.probes,
            StatsEvent::ProbesFailed => &self.stats.probes_failed,
            StatsEvent::PeersEvicted => &self.stats.peers_evicted,
            StatsEvent::BadRequests => &self.stats.bad_requests,
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        let counter = self.stats_counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats_counter(event).store(value, Ordering::SeqCst);
    }
}

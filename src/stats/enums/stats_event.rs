use serde::{Deserialize, Serialize};

/// Every counter that can be incremented or set.
///
/// Used with `PeerTracker::update_stats()` and `PeerTracker::set_stats()`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Files,
    Accounts,
    Sessions,
    TimestampConsole,
    ConnectionsHandled,
    RegistersHandled,
    LoginsHandled,
    LoginsFailed,
    LogoutsHandled,
    ListsHandled,
    AllPeersHandled,
    DetailsHandled,
    NotificationsHandled,
    Probes,
    ProbesFailed,
    PeersEvicted,
    BadRequests,
}

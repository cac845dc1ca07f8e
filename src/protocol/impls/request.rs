use crate::protocol::enums::request::Request;

impl Request {
    pub fn method(&self) -> &'static str {
        match self {
            Request::Register { .. } => "REGISTER",
            Request::Login { .. } => "LOGIN",
            Request::Inventory(_) => "INVENTORY",
            Request::Logout { .. } => "LOGOUT",
            Request::List => "LIST",
            Request::Details { .. } => "DETAILS",
            Request::NotifySuccessful { .. } => "NOTIFY_SUCCESSFUL",
            Request::NotifySuccessfulPart { .. } => "NOTIFY_SUCCESSFUL_PART",
            Request::NotifyFailed { .. } => "NOTIFY_FAILED",
            Request::IAmSeeder { .. } => "I_AM_SEEDER",
            Request::AllPeers => "ALL_PEERS",
            Request::CheckActiveTrackerToPeer => "CHECK_ACTIVE_TRACKER_TO_PEER",
        }
    }
}

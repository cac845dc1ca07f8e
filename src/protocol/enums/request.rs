use serde::{Deserialize, Serialize};
use crate::tracker::structs::inventory_report::InventoryReport;
use crate::tracker::structs::session_token::SessionToken;

/// A single request frame, discriminated by its `method` tag.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "method", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Request {
    Register {
        username: String,
        password: String,
    },
    Login {
        username: String,
        password: String,
    },
    /// Second frame of a LOGIN exchange: where the peer listens and what it holds.
    Inventory(InventoryReport),
    Logout {
        token: SessionToken,
    },
    List,
    Details {
        file_name: String,
    },
    /// `username` downloaded the whole of `file_name` from `peer_username`.
    NotifySuccessful {
        username: String,
        file_name: String,
        peer_username: String,
    },
    /// `username` downloaded piece `piece_id` of `file_name` from `peer_username`.
    NotifySuccessfulPart {
        username: String,
        file_name: String,
        peer_username: String,
        piece_id: u32,
    },
    /// `username` failed to download `file_name` from `peer_username`.
    NotifyFailed {
        username: String,
        file_name: String,
        peer_username: String,
    },
    IAmSeeder {
        username: String,
        file_name: String,
    },
    AllPeers,
    /// Liveness probe, sent by the tracker to a peer.
    CheckActiveTrackerToPeer,
}

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::protocol::enums::status_code::StatusCode;
use crate::tracker::structs::peer_info::PeerInfo;
use crate::tracker::structs::session_token::SessionToken;

/// A single reply frame, discriminated by its `reply` tag.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "reply", rename_all = "snake_case")]
pub enum Response {
    Status {
        status_code: StatusCode,
    },
    Login {
        status_code: StatusCode,
        token: SessionToken,
    },
    FileCatalog {
        file_catalog: Vec<String>,
    },
    PeerInfos {
        status_code: StatusCode,
        peer_infos: Vec<PeerInfo>,
    },
    AllPeers {
        full_account_snapshot: BTreeMap<String, PeerInfo>,
    },
}

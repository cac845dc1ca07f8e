use std::collections::BTreeMap;
use crate::protocol::enums::response::Response;
use crate::protocol::enums::status_code::StatusCode;
use crate::tracker::structs::peer_info::PeerInfo;
use crate::tracker::structs::session_token::SessionToken;

impl Response {
    pub fn status(status_code: StatusCode) -> Self {
        Response::Status { status_code }
    }

    pub fn login(token: SessionToken) -> Self {
        Response::Login { status_code: StatusCode::SuccessfulLogin, token }
    }

    pub fn file_catalog(file_catalog: Vec<String>) -> Self {
        Response::FileCatalog { file_catalog }
    }

    pub fn file_found(peer_infos: Vec<PeerInfo>) -> Self {
        Response::PeerInfos { status_code: StatusCode::FileFound, peer_infos }
    }

    pub fn all_peers(full_account_snapshot: BTreeMap<String, PeerInfo>) -> Self {
        Response::AllPeers { full_account_snapshot }
    }

    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Response::Status { status_code }
            | Response::Login { status_code, .. }
            | Response::PeerInfos { status_code, .. } => Some(*status_code),
            Response::FileCatalog { .. } | Response::AllPeers { .. } => None,
        }
    }
}

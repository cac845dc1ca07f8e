use crate::tracker::structs::session_token::SessionToken;

/// A sharer as it was when DETAILS took its snapshot. Eviction only applies
/// while the account still holds `session_token`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeCandidate {
    pub username: String,
    pub endpoint: Option<(String, u16)>,
    pub session_token: Option<SessionToken>,
}

use crate::tracker::structs::session_token::SessionToken;

/// Progress of a LOGIN exchange on one connection.
///
/// A token is only issued on leaving `AwaitingCredentials`; if the
/// connection never reaches `Established` the token is revoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginState {
    AwaitingCredentials {
        username: String,
        password: String,
    },
    AwaitingInitialInventory {
        username: String,
        token: SessionToken,
    },
    Established {
        username: String,
        token: SessionToken,
    },
}

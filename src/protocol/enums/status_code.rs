use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    SuccessfulRegister,
    UnsuccessfulRegister,
    SuccessfulLogin,
    UnsuccessfulLogin,
    SuccessfulLogout,
    UnsuccessfulLogout,
    FileFound,
    FileNotFound,
    PeerIsActive,
    PeerIsInactive,
}

use std::fmt;
use std::fmt::Formatter;
use rand::RngExt;
use crate::tracker::structs::session_token::SessionToken;

impl SessionToken {
    pub fn random() -> SessionToken
    {
        let mut rng = rand::rng();
        SessionToken(rng.random::<u64>())
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

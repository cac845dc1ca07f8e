use serde::{Deserialize, Serialize};

/// Opaque bearer value handed out on login.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct SessionToken(pub u64);

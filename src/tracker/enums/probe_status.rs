/// Result of asking a peer whether it is still there.
///
/// `Unreachable` covers connection, decoding and timeout failures; callers
/// treat it the same as `Inactive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    Active,
    Inactive,
    Unreachable,
}

impl ProbeStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, ProbeStatus::Active)
    }
}

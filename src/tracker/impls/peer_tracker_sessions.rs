use std::collections::btree_map::Entry;
use log::{debug, info};
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::peer_tracker::PeerTracker;
use crate::tracker::structs::session_token::SessionToken;

impl PeerTracker {
    /// Issues a fresh token for `username`, revoking the one it held before.
    #[tracing::instrument(level = "debug")]
    pub fn issue_token(&self, username: &str) -> Result<SessionToken, TrackerError>
    {
        let mut registry = self.registry.write();
        let account = registry.accounts.get_mut(username)
            .ok_or_else(|| TrackerError::UnknownPeer(username.to_string()))?;
        let mut sessions = self.sessions.write();

        if let Some(previous) = account.session_token.take()
            && sessions.remove(&previous).is_some() {
            debug!("[LOGIN] Revoked previous token of {username}");
            self.update_stats(StatsEvent::Sessions, -1);
        }

        let token = loop {
            let candidate = SessionToken::random();
            if let Entry::Vacant(entry) = sessions.entry(candidate) {
                entry.insert(username.to_string());
                break candidate;
            }
        };
        account.session_token = Some(token);
        self.update_stats(StatsEvent::Sessions, 1);
        Ok(token)
    }

    pub fn is_valid_token(&self, token: SessionToken) -> bool
    {
        self.sessions.read_recursive().contains_key(&token)
    }

    pub fn token_owner(&self, token: SessionToken) -> Option<String>
    {
        self.sessions.read_recursive().get(&token).cloned()
    }

    /// Unknown tokens are ignored. Returns true if a session ended.
    #[tracing::instrument(level = "debug")]
    pub fn revoke_token(&self, token: SessionToken) -> bool
    {
        let mut registry = self.registry.write();
        let mut sessions = self.sessions.write();
        let Some(username) = sessions.remove(&token) else {
            return false;
        };
        if let Some(account) = registry.accounts.get_mut(&username)
            && account.session_token == Some(token) {
            account.session_token = None;
        }
        self.update_stats(StatsEvent::Sessions, -1);
        true
    }

    /// Ends the session behind `token` and withdraws its owner from every
    /// file it shares. Returns the owner.
    #[tracing::instrument(level = "debug")]
    pub fn logout(&self, token: SessionToken) -> Result<String, TrackerError>
    {
        let mut registry = self.registry.write();
        let mut sessions = self.sessions.write();
        let username = sessions.remove(&token).ok_or(TrackerError::InvalidToken)?;
        registry.withdraw(&username);
        if let Some(account) = registry.accounts.get_mut(&username) {
            account.session_token = None;
        }
        self.update_stats(StatsEvent::Sessions, -1);
        Ok(username)
    }

    /// Logs out `username` after a failed probe, unless it logged in again
    /// since the probe was sent. `probed_token` is the session it held then.
    #[tracing::instrument(level = "debug")]
    pub fn evict_peer(&self, username: &str, probed_token: Option<SessionToken>) -> bool
    {
        let mut registry = self.registry.write();
        let Some(account) = registry.accounts.get_mut(username) else {
            return false;
        };
        if account.session_token != probed_token {
            debug!("[PROBE] {username} started a new session since it was probed, keeping it");
            return false;
        }
        let token = account.session_token.take();
        let mut sessions = self.sessions.write();
        if let Some(token) = token
            && sessions.remove(&token).is_some() {
            self.update_stats(StatsEvent::Sessions, -1);
        }
        drop(sessions);
        let files = registry.withdraw(username);
        info!("[PROBE] Evicted {username}, withdrawn from {} files", files.len());
        self.update_stats(StatsEvent::PeersEvicted, 1);
        true
    }
}

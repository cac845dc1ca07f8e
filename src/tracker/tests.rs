mod peer_tracker_tests {
    use std::collections::{BTreeMap, BTreeSet};
    use std::sync::Arc;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use crate::config::structs::configuration::Configuration;
    use crate::tracker::enums::probe_status::ProbeStatus;
    use crate::tracker::enums::tracker_error::TrackerError;
    use crate::tracker::structs::inventory_report::InventoryReport;
    use crate::tracker::structs::peer_tracker::PeerTracker;
    use crate::tracker::traits::liveness_probe::LivenessProbe;

    /// Reports the peers listening on `active` ports as up.
    #[derive(Debug)]
    struct FixedProbe {
        active: BTreeSet<u16>,
        probed: Mutex<Vec<(String, u16)>>,
    }

    impl FixedProbe {
        fn new(active: &[u16]) -> Self {
            FixedProbe { active: active.iter().copied().collect(), probed: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl LivenessProbe for FixedProbe {
        async fn probe(&self, host: &str, port: u16) -> ProbeStatus {
            self.probed.lock().push((host.to_string(), port));
            if self.active.contains(&port) { ProbeStatus::Active } else { ProbeStatus::Inactive }
        }
    }

    /// Logs `username` in again with a new inventory while DETAILS is
    /// checking it, then reports it down.
    #[derive(Debug)]
    struct ReloggingPeer {
        tracker: Arc<PeerTracker>,
        username: String,
        report: InventoryReport,
    }

    #[async_trait]
    impl LivenessProbe for ReloggingPeer {
        async fn probe(&self, _host: &str, _port: u16) -> ProbeStatus {
            let token = self.tracker.issue_token(&self.username).unwrap();
            self.tracker.apply_login_details(&self.username, token, self.report.clone()).unwrap();
            ProbeStatus::Inactive
        }
    }

    fn tracker() -> PeerTracker {
        PeerTracker::new(
            Arc::new(Configuration::init()),
            vec!["movie.mp4".to_string(), "song.mp3".to_string(), "book.pdf".to_string()],
        )
    }

    fn inventory(port: u16, files: &[(&str, &[u32], bool)]) -> InventoryReport {
        InventoryReport {
            ip: "127.0.0.1".to_string(),
            port,
            shared_files: files.iter().map(|(name, _, _)| name.to_string()).collect(),
            pieces: files.iter().map(|(name, pieces, _)| (name.to_string(), pieces.iter().copied().collect())).collect(),
            seeder_bits: files.iter().map(|(name, _, seeder)| (name.to_string(), *seeder)).collect(),
        }
    }

    fn login(tracker: &PeerTracker, username: &str, report: InventoryReport) {
        let token = tracker.issue_token(username).unwrap();
        tracker.apply_login_details(username, token, report).unwrap();
    }

    fn usernames(tracker: &PeerTracker, file_name: &str) -> Vec<String> {
        tracker.peers_for(file_name).unwrap().into_iter().map(|peer| peer.username).collect()
    }

    #[test]
    fn test_register_rejects_duplicate_username() {
        let tracker = tracker();
        assert!(tracker.register("alice", "pw1").is_ok());
        assert_eq!(tracker.register("alice", "other"), Err(TrackerError::AlreadyRegistered("alice".to_string())));
        assert!(tracker.authenticate("alice", "pw1"));
        assert!(!tracker.authenticate("alice", "other"));
    }

    #[test]
    fn test_authenticate_unknown_user() {
        assert!(!tracker().authenticate("nobody", "pw"));
    }

    #[test]
    fn test_login_details_populate_index() {
        let tracker = tracker();
        tracker.register("alice", "pw1").unwrap();
        login(&tracker, "alice", inventory(6000, &[("movie.mp4", &[0, 1], false)]));

        assert_eq!(usernames(&tracker, "movie.mp4"), vec!["alice"]);
        assert!(usernames(&tracker, "song.mp3").is_empty());
        let peer = tracker.get_peer("alice").unwrap();
        assert_eq!(peer.ip.as_deref(), Some("127.0.0.1"));
        assert_eq!(peer.port, Some(6000));
        assert!(tracker.is_consistent());
    }

    #[test]
    fn test_login_details_normalise_collections() {
        let tracker = tracker();
        tracker.register("alice", "pw1").unwrap();
        let token = tracker.issue_token("alice").unwrap();
        let report = InventoryReport {
            ip: "127.0.0.1".to_string(),
            port: 6000,
            shared_files: vec!["movie.mp4".to_string(), "unknown.iso".to_string()],
            pieces: BTreeMap::from([("song.mp3".to_string(), BTreeSet::from([4]))]),
            seeder_bits: BTreeMap::from([("book.pdf".to_string(), true)]),
        };
        let rejected = tracker.apply_login_details("alice", token, report).unwrap();
        assert_eq!(rejected, vec!["unknown.iso"]);

        let account = tracker.get_account("alice").unwrap();
        assert_eq!(account.shared_files, vec!["movie.mp4", "song.mp3", "book.pdf"]);
        assert_eq!(account.pieces["movie.mp4"], BTreeSet::new());
        assert_eq!(account.pieces["song.mp3"], BTreeSet::from([4]));
        assert!(!account.seeder_bits["song.mp3"]);
        assert!(account.seeder_bits["book.pdf"]);
        assert!(tracker.is_consistent());
    }

    #[test]
    fn test_login_details_replace_previous_inventory() {
        let tracker = tracker();
        tracker.register("alice", "pw1").unwrap();
        login(&tracker, "alice", inventory(6000, &[("movie.mp4", &[0], false)]));
        login(&tracker, "alice", inventory(6001, &[("song.mp3", &[], true)]));

        assert!(usernames(&tracker, "movie.mp4").is_empty());
        assert_eq!(usernames(&tracker, "song.mp3"), vec!["alice"]);
        assert!(tracker.is_consistent());
    }

    #[test]
    fn test_login_details_require_current_token() {
        let tracker = tracker();
        tracker.register("alice", "pw1").unwrap();
        let stale = tracker.issue_token("alice").unwrap();
        tracker.issue_token("alice").unwrap();
        assert_eq!(
            tracker.apply_login_details("alice", stale, inventory(6000, &[])),
            Err(TrackerError::InvalidToken)
        );
    }

    #[test]
    fn test_record_piece_is_idempotent() {
        let tracker = tracker();
        tracker.register("alice", "pw1").unwrap();
        login(&tracker, "alice", inventory(6000, &[("movie.mp4", &[0, 1], false)]));

        assert_eq!(tracker.record_piece_acquired("alice", "movie.mp4", 2), Ok(true));
        assert_eq!(tracker.record_piece_acquired("alice", "movie.mp4", 2), Ok(false));
        let account = tracker.get_account("alice").unwrap();
        assert_eq!(account.pieces["movie.mp4"], BTreeSet::from([0, 1, 2]));
        assert_eq!(account.shared_files, vec!["movie.mp4"]);
    }

    #[test]
    fn test_first_piece_starts_sharing() {
        let tracker = tracker();
        tracker.register("bob", "pw2").unwrap();
        assert_eq!(tracker.record_piece_acquired("bob", "song.mp3", 7), Ok(true));

        let account = tracker.get_account("bob").unwrap();
        assert_eq!(account.shared_files, vec!["song.mp3"]);
        assert!(!account.seeder_bits["song.mp3"]);
        assert_eq!(usernames(&tracker, "song.mp3"), vec!["bob"]);
        assert!(tracker.is_consistent());
    }

    #[test]
    fn test_record_piece_rejects_unknown_file_and_peer() {
        let tracker = tracker();
        tracker.register("bob", "pw2").unwrap();
        assert_eq!(
            tracker.record_piece_acquired("bob", "nope.bin", 0),
            Err(TrackerError::UnknownFile("nope.bin".to_string()))
        );
        assert_eq!(
            tracker.record_piece_acquired("carol", "song.mp3", 0),
            Err(TrackerError::UnknownPeer("carol".to_string()))
        );
        assert!(tracker.get_account("bob").unwrap().shared_files.is_empty());
    }

    #[test]
    fn test_record_file_acquired() {
        let tracker = tracker();
        tracker.register("bob", "pw2").unwrap();
        assert_eq!(tracker.record_file_acquired("bob", "book.pdf"), Ok(true));
        assert_eq!(tracker.record_file_acquired("bob", "book.pdf"), Ok(false));
        assert_eq!(usernames(&tracker, "book.pdf"), vec!["bob"]);
    }

    #[test]
    fn test_mark_seeder() {
        let tracker = tracker();
        tracker.register("alice", "pw1").unwrap();
        login(&tracker, "alice", inventory(6000, &[("movie.mp4", &[0], false)]));

        assert!(tracker.mark_seeder("alice", "movie.mp4").is_ok());
        assert!(tracker.get_account("alice").unwrap().seeder_bits["movie.mp4"]);
        assert_eq!(
            tracker.mark_seeder("alice", "song.mp3"),
            Err(TrackerError::FileNotShared { username: "alice".to_string(), file_name: "song.mp3".to_string() })
        );
        assert!(!tracker.get_account("alice").unwrap().seeder_bits.contains_key("song.mp3"));
    }

    #[test]
    fn test_counters_ignore_unknown_peers() {
        let tracker = tracker();
        tracker.register("alice", "pw1").unwrap();
        assert!(tracker.increment_downloads("alice"));
        assert!(tracker.increment_downloads("alice"));
        assert!(tracker.increment_failures("alice"));
        assert!(!tracker.increment_downloads("ghost"));
        assert!(!tracker.increment_failures("ghost"));
        let peer = tracker.get_peer("alice").unwrap();
        assert_eq!(peer.download_count, 2);
        assert_eq!(peer.failure_count, 1);
    }

    #[test]
    fn test_issue_token_revokes_previous() {
        let tracker = tracker();
        tracker.register("alice", "pw1").unwrap();
        let first = tracker.issue_token("alice").unwrap();
        let second = tracker.issue_token("alice").unwrap();
        assert_ne!(first, second);
        assert!(!tracker.is_valid_token(first));
        assert!(tracker.is_valid_token(second));
        assert_eq!(tracker.token_owner(second).as_deref(), Some("alice"));
        assert_eq!(tracker.issue_token("ghost"), Err(TrackerError::UnknownPeer("ghost".to_string())));
    }

    #[test]
    fn test_logout_clears_index_and_token() {
        let tracker = tracker();
        tracker.register("alice", "pw1").unwrap();
        let token = tracker.issue_token("alice").unwrap();
        tracker.apply_login_details("alice", token, inventory(6000, &[("movie.mp4", &[0, 1], false)])).unwrap();

        assert_eq!(tracker.logout(token), Ok("alice".to_string()));
        assert!(usernames(&tracker, "movie.mp4").is_empty());
        assert!(!tracker.is_valid_token(token));
        assert_eq!(tracker.logout(token), Err(TrackerError::InvalidToken));
        assert!(tracker.get_account("alice").is_some());
        assert!(tracker.is_consistent());
    }

    #[test]
    fn test_revoke_unknown_token_is_noop() {
        let tracker = tracker();
        tracker.register("alice", "pw1").unwrap();
        let token = tracker.issue_token("alice").unwrap();
        assert!(tracker.revoke_token(token));
        assert!(!tracker.revoke_token(token));
        assert!(tracker.get_account("alice").unwrap().session_token.is_none());
    }

    #[test]
    fn test_peers_for_unknown_file() {
        assert_eq!(tracker().peers_for("nope.bin"), Err(TrackerError::UnknownFile("nope.bin".to_string())));
    }

    #[test]
    fn test_file_catalog_keeps_order() {
        let tracker = tracker();
        assert_eq!(tracker.file_catalog(), vec!["movie.mp4", "song.mp3", "book.pdf"]);
        assert!(tracker.is_known_file("song.mp3"));
        assert!(!tracker.is_known_file("nope.bin"));
    }

    #[tokio::test]
    async fn test_verified_peers_evicts_inactive() {
        let tracker = tracker();
        tracker.register("alice", "pw1").unwrap();
        tracker.register("bob", "pw2").unwrap();
        login(&tracker, "alice", inventory(6000, &[("movie.mp4", &[0], false), ("song.mp3", &[], true)]));
        login(&tracker, "bob", inventory(6001, &[("movie.mp4", &[1], false)]));

        let probe = FixedProbe::new(&[6001]);
        let peers = tracker.verified_peers_for("movie.mp4", &probe).await.unwrap();

        assert_eq!(peers.iter().map(|peer| peer.username.as_str()).collect::<Vec<_>>(), vec!["bob"]);
        assert_eq!(probe.probed.lock().len(), 2);
        assert_eq!(usernames(&tracker, "movie.mp4"), vec!["bob"]);
        assert!(usernames(&tracker, "song.mp3").is_empty());
        assert!(tracker.get_account("alice").unwrap().session_token.is_none());
        assert_eq!(tracker.get_stats().peers_evicted, 1);
        assert!(tracker.is_consistent());
    }

    #[tokio::test]
    async fn test_verified_peers_without_address_are_unreachable() {
        let tracker = tracker();
        tracker.register("bob", "pw2").unwrap();
        tracker.record_file_acquired("bob", "book.pdf").unwrap();

        let probe = FixedProbe::new(&[]);
        let peers = tracker.verified_peers_for("book.pdf", &probe).await.unwrap();
        assert!(peers.is_empty());
        assert!(probe.probed.lock().is_empty());
        assert!(usernames(&tracker, "book.pdf").is_empty());
    }

    #[tokio::test]
    async fn test_verified_peers_unknown_file() {
        let probe = FixedProbe::new(&[]);
        assert_eq!(
            tracker().verified_peers_for("nope.bin", &probe).await,
            Err(TrackerError::UnknownFile("nope.bin".to_string()))
        );
    }

    #[tokio::test]
    async fn test_verified_peers_pass_advertised_host_through() {
        let tracker = tracker();
        tracker.register("alice", "pw1").unwrap();
        let mut report = inventory(6000, &[("movie.mp4", &[0], false)]);
        report.ip = "localhost".to_string();
        login(&tracker, "alice", report);

        let probe = FixedProbe::new(&[6000]);
        let peers = tracker.verified_peers_for("movie.mp4", &probe).await.unwrap();
        assert_eq!(peers.len(), 1);
        assert_eq!(*probe.probed.lock(), vec![("localhost".to_string(), 6000)]);
    }

    #[test]
    fn test_evict_skips_peer_with_new_session() {
        let tracker = tracker();
        tracker.register("alice", "pw1").unwrap();
        let old = tracker.issue_token("alice").unwrap();
        login(&tracker, "alice", inventory(6000, &[("movie.mp4", &[0], false)]));
        assert!(!tracker.evict_peer("alice", Some(old)));
        assert_eq!(usernames(&tracker, "movie.mp4"), vec!["alice"]);
        assert!(tracker.get_account("alice").unwrap().session_token.is_some());
    }

    #[tokio::test]
    async fn test_relogin_during_details_keeps_new_session() {
        let tracker = Arc::new(tracker());
        tracker.register("alice", "pw1").unwrap();
        login(&tracker, "alice", inventory(6000, &[("movie.mp4", &[0], false)]));

        let probe = ReloggingPeer {
            tracker: tracker.clone(),
            username: "alice".to_string(),
            report: inventory(6000, &[("song.mp3", &[], true)]),
        };
        let peers = tracker.verified_peers_for("movie.mp4", &probe).await.unwrap();

        assert!(peers.is_empty());
        let token = tracker.get_account("alice").unwrap().session_token.unwrap();
        assert!(tracker.is_valid_token(token));
        assert_eq!(usernames(&tracker, "song.mp3"), vec!["alice"]);
        assert!(usernames(&tracker, "movie.mp4").is_empty());
        assert_eq!(tracker.get_stats().peers_evicted, 0);
        assert!(tracker.is_consistent());
    }
}

mod inventory_report_tests {
    use std::collections::{BTreeMap, BTreeSet};
    use crate::tracker::structs::inventory_report::InventoryReport;

    #[test]
    fn test_normalised_deduplicates_and_fills_defaults() {
        let report = InventoryReport {
            ip: "10.0.0.1".to_string(),
            port: 7000,
            shared_files: vec!["a".to_string(), "a".to_string()],
            pieces: BTreeMap::from([("a".to_string(), BTreeSet::from([1, 2]))]),
            seeder_bits: BTreeMap::from([("b".to_string(), true), ("z".to_string(), false)]),
        };
        let (normalised, rejected) = report.normalised(|name| name != "z");
        assert_eq!(rejected, vec!["z"]);
        assert_eq!(normalised.shared_files, vec!["a", "b"]);
        assert_eq!(normalised.pieces["b"], BTreeSet::new());
        assert!(!normalised.seeder_bits["a"]);
        assert_eq!(normalised.port, 7000);
    }
}

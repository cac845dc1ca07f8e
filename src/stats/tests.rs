mod stats_tests {
    use std::sync::Arc;
    use crate::config::structs::configuration::Configuration;
    use crate::stats::enums::stats_event::StatsEvent;
    use crate::tracker::structs::peer_tracker::PeerTracker;

    fn tracker() -> PeerTracker {
        PeerTracker::new(Arc::new(Configuration::init()), vec!["movie.mp4".to_string(), "song.mp3".to_string()])
    }

    #[test]
    fn test_update_stats_adds_and_subtracts() {
        let tracker = tracker();
        tracker.update_stats(StatsEvent::ListsHandled, 3);
        tracker.update_stats(StatsEvent::ListsHandled, -1);
        assert_eq!(tracker.get_stats().lists_handled, 2);
    }

    #[test]
    fn test_set_stats_overwrites() {
        let tracker = tracker();
        tracker.update_stats(StatsEvent::BadRequests, 5);
        tracker.set_stats(StatsEvent::BadRequests, 1);
        assert_eq!(tracker.get_stats().bad_requests, 1);
    }

    #[test]
    fn test_catalog_size_recorded_on_start() {
        assert_eq!(tracker().get_stats().files, 2);
    }

    #[test]
    fn test_accounts_and_sessions_follow_tracker() {
        let tracker = tracker();
        tracker.register("alice", "pw1").unwrap();
        tracker.register("bob", "pw2").unwrap();
        let token = tracker.issue_token("alice").unwrap();
        tracker.issue_token("alice").unwrap();
        let stats = tracker.get_stats();
        assert_eq!(stats.accounts, 2);
        assert_eq!(stats.sessions, 1);
        assert!(!tracker.revoke_token(token));
        assert_eq!(tracker.get_stats().sessions, 1);
    }
}

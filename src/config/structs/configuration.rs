use serde::{Deserialize, Serialize};
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tcp_server_config::TcpServerConfig;
use crate::config::structs::tracker_config::TrackerConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub tracker_config: TrackerConfig,
    pub tcp_server: Vec<TcpServerConfig>,
    pub sentry_config: SentryConfig,
}

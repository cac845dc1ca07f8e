use serde::{Deserialize, Serialize};

/// Core tracker settings. All timeouts are in seconds.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackerConfig {
    pub file_list_path: String,
    pub login_inventory_timeout: u64,
    pub probe_connect_timeout: u64,
    pub probe_response_timeout: u64,
}

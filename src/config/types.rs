use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
}

/// Connection settings for the hosted record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the store (e.g., "https://xyz.supabase.co").
    #[serde(default)]
    pub base_url: Option<String>,
    /// Static access key sent as both `apikey` and bearer token.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Table resource holding creator rows (default: "creators").
    #[serde(default = "default_resource")]
    pub resource: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

fn default_resource() -> String {
    "creators".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            resource: default_resource(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod memory_store;
pub mod mock_store;

use creator_catalog::config::StoreConfig;
use creator_catalog::creators::{CreatorClient, CreatorDraft};
use creator_catalog::store::StoreConnector;
use memory_store::MemoryStore;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::sync::Arc;

pub const TEST_KEY: &str = "test-anon-key";

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Store config pointing at `base_url` with the test key.
pub fn store_config(base_url: &str) -> StoreConfig {
    StoreConfig {
        base_url: Some(base_url.to_string()),
        api_key: Some(TEST_KEY.to_string()),
        connect_timeout_seconds: 2,
        ..StoreConfig::default()
    }
}

/// Creator client talking HTTP to `base_url`.
pub fn http_client(base_url: &str) -> CreatorClient<StoreConnector> {
    CreatorClient::new(StoreConnector::new(store_config(base_url)).unwrap())
}

/// Creator client over a shared in-memory store.
pub fn memory_client(store: &Arc<MemoryStore>) -> CreatorClient<Arc<MemoryStore>> {
    CreatorClient::new(store.clone())
}

pub fn draft(name: &str) -> CreatorDraft {
    CreatorDraft::new(
        name,
        format!("https://{}.test", name.to_lowercase()),
        format!("About {}", name),
        "",
    )
}

/// A stored row as the server would return it.
pub fn row(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "url": format!("https://{}.test", name.to_lowercase()),
        "description": format!("About {}", name),
        "imageURL": null
    })
}

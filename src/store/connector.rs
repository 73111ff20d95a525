use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::config::{build_auth_headers, CredentialStatus, StoreConfig};
use crate::store::error::StoreError;
use crate::store::{TableRequest, TableStore};

const REST_PREFIX: &str = "rest/v1";
const PREFER_REPRESENTATION: &str = "return=representation";

/// HTTP connector for a PostgREST-style table endpoint.
///
/// Holds the static store configuration; every request is independent and
/// made exactly once.
pub struct StoreConnector {
    client: Client,
    config: StoreConfig,
}

impl StoreConnector {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(|e| StoreError::Transport { source: e })?;

        Ok(Self { client, config })
    }

    /// Full URL for a request, including its query string.
    pub fn request_url(base_url: &str, request: &TableRequest) -> Result<Url, StoreError> {
        let raw = format!(
            "{}/{}/{}",
            base_url.trim_end_matches('/'),
            REST_PREFIX,
            request.resource
        );
        let mut url = Url::parse(&raw)
            .map_err(|e| StoreError::InvalidRequest(format!("bad store URL '{}': {}", raw, e)))?;

        let pairs = request.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    async fn send(&self, request: TableRequest) -> Result<Value, StoreError> {
        let (base_url, key) = match self.config.resolve_credential() {
            CredentialStatus::Configured { base_url, key } => (base_url, key),
            CredentialStatus::Unconfigured { reason } => {
                return Err(StoreError::NotConfigured { reason });
            }
        };

        let url = Self::request_url(&base_url, &request)?;
        let method = request.method.http_method();
        let mut builder = self
            .client
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in build_auth_headers(&key) {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| StoreError::InvalidRequest(e.to_string()))?;
            // Never echo the value: it is the credential.
            let value = HeaderValue::from_str(&value).map_err(|_| {
                StoreError::InvalidRequest(format!("invalid characters in {} header", name))
            })?;
            builder = builder.header(name, value);
        }

        if request.return_representation {
            builder = builder.header("Prefer", PREFER_REPRESENTATION);
        }

        if let Some(body) = &request.body {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| StoreError::InvalidRequest(format!("unserializable body: {}", e)))?;
            builder = builder.body(bytes);
        }

        tracing::debug!(
            method = %method,
            resource = %request.resource,
            query = url.query().unwrap_or(""),
            "Sending store request"
        );
        let started = Instant::now();

        let response = builder
            .send()
            .await
            .map_err(|e| StoreError::Transport { source: e })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| StoreError::Transport { source: e })?;

        tracing::debug!(
            method = %method,
            resource = %request.resource,
            status = status.as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            bytes = body.len(),
            "Store responded"
        );

        if !status.is_success() {
            let err = StoreError::from_status(status.as_u16(), &body);
            tracing::warn!(
                method = %method,
                resource = %request.resource,
                status = status.as_u16(),
                "Store request failed: {}",
                err
            );
            return Err(err);
        }

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&body).map_err(|e| StoreError::Decode { source: e })
    }
}

#[async_trait]
impl TableStore for StoreConnector {
    async fn execute(&self, request: TableRequest) -> Result<Value, StoreError> {
        self.send(request).await
    }
}

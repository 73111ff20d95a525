//! Credential resolution from configuration.
//!
//! This module provides secure handling of the store access key
//! resolved from the config at runtime.

use super::types::StoreConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to the store.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution for the store.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// Base URL and key resolved successfully.
    Configured {
        base_url: String,
        key: SecureString,
    },
    /// URL or key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl StoreConfig {
    /// Resolve the endpoint and access key.
    ///
    /// Called per request so that a connector built from an incomplete
    /// config fails at call time rather than at startup.
    pub fn resolve_credential(&self) -> CredentialStatus {
        let base_url = self.base_url.as_deref().filter(|u| !u.is_empty());
        let key = self.api_key.as_deref().filter(|k| !k.is_empty());

        match (base_url, key) {
            (Some(base_url), Some(key)) => CredentialStatus::Configured {
                base_url: base_url.to_string(),
                key: SecureString::new(key.to_string()),
            },
            (None, Some(_)) => CredentialStatus::Unconfigured {
                reason: "store base_url is not set".to_string(),
            },
            (Some(_), None) => CredentialStatus::Unconfigured {
                reason: "store api_key is not set".to_string(),
            },
            (None, None) => CredentialStatus::Unconfigured {
                reason: "store base_url and api_key are not set".to_string(),
            },
        }
    }

    /// Check if both the URL and the key are present.
    pub fn is_configured(&self) -> bool {
        matches!(
            self.resolve_credential(),
            CredentialStatus::Configured { .. }
        )
    }
}

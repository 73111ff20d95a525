//! Authentication header building for store requests.
//!
//! The store expects the same static credential twice: once as the
//! `apikey` header and once as a bearer token.

use super::credentials::SecureString;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the authentication headers for the given access key.
pub fn build_auth_headers(key: &SecureString) -> [AuthHeader; 2] {
    [
        ("apikey".to_string(), key.expose().to_string()),
        (
            "Authorization".to_string(),
            format!("Bearer {}", key.expose()),
        ),
    ]
}

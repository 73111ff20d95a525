mod auth;
mod credentials;
mod loader;
mod types;

pub use auth::{build_auth_headers, AuthHeader};
pub use credentials::{CredentialStatus, SecureString};
pub use loader::{
    ConfigError, ENV_STORE_KEY, ENV_STORE_URL, ENV_SUPABASE_KEY, ENV_SUPABASE_URL,
};
pub use types::{Config, StoreConfig};

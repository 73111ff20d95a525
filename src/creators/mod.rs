//! Creator records and the typed client that reads and writes them.

mod client;
mod error;
mod model;
mod validation;

pub(crate) use client::{decode_rows, to_body};
pub use client::{CreatorClient, DEFAULT_RESOURCE};
pub use error::CatalogError;
pub use model::{CreatorFields, CreatorId, CreatorRecord};
pub use validation::{CreatorDraft, RequiredField, ValidationError};

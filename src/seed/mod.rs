//! Bulk replacement of the record set with the sample creators.
//!
//! Seeding is two requests: delete every row, then insert the samples.
//! The pair is not atomic. If the insert fails after the delete succeeded
//! the store is left empty, and nothing is rolled back.

mod samples;

use thiserror::Error;

use crate::creators::{decode_rows, to_body, CreatorClient, CreatorFields, CreatorRecord};
use crate::store::{StoreError, TableRequest, TableStore};

pub use samples::sample_creators;

/// Which half of the seed run failed.
///
/// Both variants display with the same "seeding failed" prefix; match on
/// the variant to learn whether the store may already be empty.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Clearing failed; nothing was inserted.
    #[error("seeding failed: {0}")]
    Clear(#[source] StoreError),

    /// Clearing succeeded but the insert failed; the store may be empty.
    #[error("seeding failed: {0}")]
    Insert(#[source] StoreError),
}

impl SeedError {
    /// True when the store was cleared before the failure.
    pub fn store_cleared(&self) -> bool {
        matches!(self, SeedError::Insert(_))
    }
}

/// Replace every row with the sample creators.
pub async fn seed<S: TableStore>(
    client: &CreatorClient<S>,
) -> Result<Vec<CreatorRecord>, SeedError> {
    seed_with(client, &sample_creators()).await
}

/// Replace every row with `records`. Returns the rows as stored.
pub async fn seed_with<S: TableStore>(
    client: &CreatorClient<S>,
    records: &[CreatorFields],
) -> Result<Vec<CreatorRecord>, SeedError> {
    let resource = client.resource();
    tracing::info!(resource, "Clearing existing creators");

    client
        .store()
        .execute(TableRequest::delete(resource))
        .await
        .map_err(|e| {
            tracing::error!(error_type = e.error_type(), "Error clearing existing data: {}", e);
            SeedError::Clear(e)
        })?;

    let body = to_body(&records).map_err(SeedError::Insert)?;
    let inserted = client
        .store()
        .execute(TableRequest::insert(resource, body))
        .await
        .and_then(decode_rows)
        .map_err(|e| {
            tracing::error!(error_type = e.error_type(), "Error seeding database: {}", e);
            SeedError::Insert(e)
        })?;

    tracing::info!(count = inserted.len(), "Database seeded");
    Ok(inserted)
}

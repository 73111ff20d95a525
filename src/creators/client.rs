use serde::Serialize;
use serde_json::Value;

use super::error::CatalogError;
use super::model::{CreatorId, CreatorRecord};
use super::validation::CreatorDraft;
use crate::store::{Filter, StoreError, TableRequest, TableStore};

/// Default table resource for creator rows.
pub const DEFAULT_RESOURCE: &str = "creators";

/// Typed CRUD operations on creator rows.
///
/// Every operation issues at most one request and never retries. The
/// client keeps no cache; callers that hold a local copy of the records
/// (see [`CatalogView`](crate::view::CatalogView)) keep it in sync
/// themselves.
pub struct CreatorClient<S> {
    store: S,
    resource: String,
}

impl<S: TableStore> CreatorClient<S> {
    pub fn new(store: S) -> Self {
        Self::with_resource(store, DEFAULT_RESOURCE)
    }

    pub fn with_resource(store: S, resource: impl Into<String>) -> Self {
        Self {
            store,
            resource: resource.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Every record, in the order the store returns them.
    pub async fn list_all(&self) -> Result<Vec<CreatorRecord>, CatalogError> {
        let value = self
            .store
            .execute(TableRequest::select(&self.resource))
            .await?;
        let records = decode_rows(value)?;
        tracing::debug!(count = records.len(), "Listed creators");
        Ok(records)
    }

    /// The record with this id, or `None` when no row matches.
    pub async fn get_by_id(&self, id: CreatorId) -> Result<Option<CreatorRecord>, CatalogError> {
        let request = TableRequest::select(&self.resource).with_filter(id_filter(id));
        let value = self.store.execute(request).await?;
        Ok(decode_rows(value)?.into_iter().next())
    }

    /// Validate the draft and insert it, returning the stored row.
    pub async fn create(&self, draft: &CreatorDraft) -> Result<CreatorRecord, CatalogError> {
        let fields = draft.validate()?;
        let request = TableRequest::insert(&self.resource, to_body(&fields)?);
        let value = self.store.execute(request).await?;

        let record = decode_rows(value)?
            .into_iter()
            .next()
            .ok_or(CatalogError::EmptyRepresentation)?;
        tracing::info!(id = record.id, name = %record.name, "Created creator");
        Ok(record)
    }

    /// Validate the draft and overwrite every field of the row with this id.
    pub async fn update(
        &self,
        id: CreatorId,
        draft: &CreatorDraft,
    ) -> Result<CreatorRecord, CatalogError> {
        let fields = draft.validate()?;
        let request =
            TableRequest::update(&self.resource, to_body(&fields)?).with_filter(id_filter(id));
        let value = self.store.execute(request).await?;

        let record = decode_rows(value)?
            .into_iter()
            .next()
            .ok_or(CatalogError::NotFound { id })?;
        tracing::info!(id = record.id, "Updated creator");
        Ok(record)
    }

    /// Delete the row with this id.
    pub async fn delete_by_id(&self, id: CreatorId) -> Result<(), CatalogError> {
        let request = TableRequest::delete(&self.resource).with_filter(id_filter(id));
        self.store.execute(request).await?;
        tracing::info!(id, "Delete request accepted");
        Ok(())
    }
}

fn id_filter(id: CreatorId) -> Filter {
    Filter::eq("id", id)
}

pub(crate) fn to_body<T: Serialize>(payload: &T) -> Result<Value, StoreError> {
    serde_json::to_value(payload)
        .map_err(|e| StoreError::InvalidRequest(format!("unserializable body: {}", e)))
}

/// Rows from a read or representation response. `null` counts as no rows.
pub(crate) fn decode_rows(value: Value) -> Result<Vec<CreatorRecord>, StoreError> {
    match value {
        Value::Null => Ok(Vec::new()),
        value => serde_json::from_value(value).map_err(|e| StoreError::Decode { source: e }),
    }
}

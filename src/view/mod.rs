//! View state for the creator list.

mod render;

pub use render::{render_detail, render_list, render_summary};

use crate::creators::{CatalogError, CreatorClient, CreatorId, CreatorRecord};
use crate::store::TableStore;

/// Local copy of the full record sequence, as shown by the list view.
///
/// Deletes edit the copy in place without re-fetching, so it can drift
/// from the store until the next [`refresh`](Self::refresh).
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    records: Vec<CreatorRecord>,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the copy with the store's current rows.
    ///
    /// On error the previous copy is kept.
    pub async fn refresh<S: TableStore>(
        &mut self,
        client: &CreatorClient<S>,
    ) -> Result<(), CatalogError> {
        self.records = client.list_all().await?;
        Ok(())
    }

    /// Delete through the client, then drop the row from the copy.
    ///
    /// A failed delete leaves the copy untouched.
    pub async fn delete<S: TableStore>(
        &mut self,
        client: &CreatorClient<S>,
        id: CreatorId,
    ) -> Result<(), CatalogError> {
        client.delete_by_id(id).await?;
        self.records.retain(|record| record.id != id);
        Ok(())
    }

    pub fn records(&self) -> &[CreatorRecord] {
        &self.records
    }

    pub fn get(&self, id: CreatorId) -> Option<&CreatorRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

impl From<Vec<CreatorRecord>> for CatalogView {
    fn from(records: Vec<CreatorRecord>) -> Self {
        Self { records }
    }
}

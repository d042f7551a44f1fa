//! Generic repository over one named collection.
//!
//! Every persisted entity gets its CRUD through one `Repository<T>` rather
//! than per-entity duplicated methods. Filters are equality-only documents
//! built with `doc!`; there are no range queries and no sort guarantees.

use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::Database;
use crate::error::StoreError;

/// Typed CRUD accessor bound to one named collection.
pub struct Repository<T: Send + Sync> {
    name: &'static str,
    collection: Collection<T>,
}

impl<T> Repository<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    /// Bind a repository to a collection by name.
    pub fn new(db: &Database, name: &'static str) -> Self {
        Self {
            name,
            collection: db.collection(name),
        }
    }

    /// Collection name this repository is bound to.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Fetch every document in the collection.
    ///
    /// Unbounded and unpaginated; collections here stay moderation-scale.
    pub async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        self.find_by(doc! {}).await
    }

    /// Fetch all documents matching an equality filter.
    pub async fn find_by(&self, filter: Document) -> Result<Vec<T>, StoreError> {
        let cursor = self.collection.find(filter).await?;
        let items: Vec<T> = cursor.try_collect().await?;
        debug!("{}: fetched {} documents", self.name, items.len());
        Ok(items)
    }

    /// Insert a single document. No duplicate-key check beyond `_id`.
    pub async fn insert_one(&self, item: &T) -> Result<(), StoreError> {
        self.collection.insert_one(item).await?;
        debug!("{}: inserted one document", self.name);
        Ok(())
    }

    /// Insert a batch of documents.
    ///
    /// Not atomic: a mid-batch failure can leave a prefix of the batch
    /// persisted. The error is surfaced to the caller either way.
    pub async fn insert_many(&self, items: &[T]) -> Result<(), StoreError> {
        if items.is_empty() {
            return Ok(());
        }
        self.collection.insert_many(items).await?;
        debug!("{}: inserted {} documents", self.name, items.len());
        Ok(())
    }

    /// Replace the document matching `key` or insert it if none matches.
    ///
    /// This is a single conditional replace, so concurrent upserts with the
    /// same key cannot create two documents.
    pub async fn upsert_by_key(&self, key: Document, item: &T) -> Result<(), StoreError> {
        let options = mongodb::options::ReplaceOptions::builder()
            .upsert(true)
            .build();

        self.collection
            .replace_one(key, item)
            .with_options(options)
            .await?;

        debug!("{}: upserted one document", self.name);
        Ok(())
    }

    /// Delete the document with the given `_id`.
    ///
    /// Returns `false` when no document matched; that is a no-op, not an
    /// error.
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        debug!(
            "{}: delete by id {}: {}",
            self.name,
            id,
            result.deleted_count > 0
        );
        Ok(result.deleted_count > 0)
    }

    /// Delete every document matching the filter; returns the deleted count.
    pub async fn delete_by(&self, filter: Document) -> Result<u64, StoreError> {
        let result = self.collection.delete_many(filter).await?;
        debug!("{}: deleted {} documents", self.name, result.deleted_count);
        Ok(result.deleted_count)
    }

    /// Count documents matching the filter.
    pub async fn count(&self, filter: Document) -> Result<u64, StoreError> {
        let count = self.collection.count_documents(filter).await?;
        Ok(count)
    }
}

impl<T: Send + Sync> std::fmt::Debug for Repository<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository").field("name", &self.name).finish()
    }
}

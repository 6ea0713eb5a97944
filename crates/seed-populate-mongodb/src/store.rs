use crate::error::DocumentStoreError;
use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::Document;

/// A document database holding named collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend name for log messages.
    fn backend(&self) -> &'static str;

    /// Insert documents in one batch and return their ids in input order.
    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<Vec<ObjectId>, DocumentStoreError>;

    async fn count_documents(&self, collection: &str) -> Result<u64, DocumentStoreError>;

    /// Drop the collection if it exists.
    async fn drop_collection(&self, collection: &str) -> Result<(), DocumentStoreError>;
}

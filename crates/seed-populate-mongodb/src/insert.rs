//! Batched insert logic for MongoDB.

use crate::error::DocumentStoreError;
use bson::oid::ObjectId;
use bson::{doc, Bson, Document};
use mongodb::Collection;
use std::collections::HashMap;

/// Default batch size for insert operations.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Insert a batch of documents into a MongoDB collection.
///
/// Returns the server-assigned ids in the order the documents were given.
pub async fn insert_batch(
    collection: &Collection<Document>,
    documents: Vec<Document>,
) -> Result<Vec<ObjectId>, DocumentStoreError> {
    if documents.is_empty() {
        return Ok(Vec::new());
    }

    let expected = documents.len();
    let result = collection.insert_many(documents).await?;

    ordered_ids(collection.name(), &result.inserted_ids, expected)
}

/// Drop a collection if it exists.
pub async fn drop_collection(collection: &Collection<Document>) -> Result<(), DocumentStoreError> {
    collection.drop().await?;
    Ok(())
}

/// Get the document count for a collection.
pub async fn count_documents(collection: &Collection<Document>) -> Result<u64, DocumentStoreError> {
    let count = collection.count_documents(doc! {}).await?;
    Ok(count)
}

/// Turn the driver's index-keyed id map into a vector in insertion order.
pub(crate) fn ordered_ids(
    collection: &str,
    inserted_ids: &HashMap<usize, Bson>,
    expected: usize,
) -> Result<Vec<ObjectId>, DocumentStoreError> {
    (0..expected)
        .map(|index| match inserted_ids.get(&index) {
            Some(Bson::ObjectId(id)) => Ok(*id),
            Some(other) => Err(DocumentStoreError::UnexpectedId {
                collection: collection.to_string(),
                value: other.to_string(),
            }),
            None => Err(DocumentStoreError::MissingInsertedId {
                collection: collection.to_string(),
                index,
            }),
        })
        .collect()
}

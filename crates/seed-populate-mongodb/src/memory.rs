//! In-memory document store.

use crate::error::DocumentStoreError;
use crate::store::DocumentStore;
use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::Document;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Document store that keeps every collection in memory.
///
/// Inserted documents receive a fresh ObjectId under `_id` unless they already
/// carry one.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
    rejected: HashSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every insert into `collection` fail.
    pub fn reject_inserts_into(mut self, collection: &str) -> Self {
        self.rejected.insert(collection.to_string());
        self
    }

    /// Snapshot of a collection's documents in insertion order.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.lock().get(collection).cloned().unwrap_or_default()
    }

    /// Names of all collections that hold at least one document.
    pub fn collection_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .lock()
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<Document>>> {
        // A poisoned lock only means another test thread panicked mid-insert.
        self.collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<Vec<ObjectId>, DocumentStoreError> {
        if self.rejected.contains(collection) {
            return Err(DocumentStoreError::Rejected {
                collection: collection.to_string(),
                reason: "inserts disabled for this collection".to_string(),
            });
        }

        let mut ids = Vec::with_capacity(documents.len());
        let mut stored = Vec::with_capacity(documents.len());
        for mut document in documents {
            let id = match document.get_object_id("_id") {
                Ok(id) => id,
                Err(_) => {
                    let id = ObjectId::new();
                    document.insert("_id", id);
                    id
                }
            };
            ids.push(id);
            stored.push(document);
        }

        self.lock()
            .entry(collection.to_string())
            .or_default()
            .extend(stored);
        Ok(ids)
    }

    async fn count_documents(&self, collection: &str) -> Result<u64, DocumentStoreError> {
        Ok(self.lock().get(collection).map_or(0, |docs| docs.len() as u64))
    }

    async fn drop_collection(&self, collection: &str) -> Result<(), DocumentStoreError> {
        self.lock().remove(collection);
        Ok(())
    }
}

//! Error types for document storage.

use thiserror::Error;

/// Errors that can occur while persisting documents.
#[derive(Error, Debug)]
pub enum DocumentStoreError {
    /// MongoDB connection or query error.
    #[error("MongoDB error: {0}")]
    MongoDB(#[from] mongodb::error::Error),

    /// A record could not be converted to a BSON document.
    #[error("Serialization error: {0}")]
    Serialization(#[from] bson::ser::Error),

    /// The server acknowledged fewer documents than were sent.
    #[error("Insert into '{collection}' returned no id for document {index}")]
    MissingInsertedId { collection: String, index: usize },

    /// The server assigned an identifier that is not an ObjectId.
    #[error("Insert into '{collection}' returned a non-ObjectId id: {value}")]
    UnexpectedId { collection: String, value: String },

    /// The store refused the write.
    #[error("Write to '{collection}' rejected: {reason}")]
    Rejected { collection: String, reason: String },
}

//! Document storage for delivery-seed.
//!
//! Stages persist records through the [`DocumentStore`] trait. Two implementations
//! are provided:
//!
//! - [`MongoDBStore`] writes to a MongoDB database.
//! - [`MemoryStore`] keeps documents in memory. Tests use it, and dry runs pass
//!   it so that nothing reaches a real database.
//!
//! # Example
//!
//! ```ignore
//! use seed_populate_mongodb::{insert_records, MongoDBStore};
//!
//! let store = MongoDBStore::connect("mongodb://localhost:27017", "delivery_seed").await?;
//! let outcome = insert_records(&store, "users", &users, 1000).await?;
//! println!("inserted {} users", outcome.ids.len());
//! ```

pub mod args;
mod error;
mod insert;
pub mod memory;
mod populator;
mod store;

pub use args::{CommonSeedArgs, MongoDBSeedArgs};
pub use error::DocumentStoreError;
pub use insert::DEFAULT_BATCH_SIZE;
pub use memory::MemoryStore;
pub use populator::{insert_records, InsertOutcome, MongoDBStore, PopulateMetrics};
pub use store::DocumentStore;

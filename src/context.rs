//! Resources shared by every stage of a run.

use crate::error::SeedError;
use chrono::{DateTime, Utc};
use seed_artifacts::ArtifactDir;
use seed_generator::generators::timestamp::truncate_to_millis;
use seed_generator::DataGenerator;
use seed_populate_mongodb::{insert_records, DocumentStore, InsertOutcome, DEFAULT_BATCH_SIZE};
use serde::Serialize;
use std::sync::Arc;

/// Source of "now" for timestamp generation.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    System,
    Fixed(DateTime<Utc>),
}

/// Store handle, generator and artifact directory for one seeding run.
///
/// Built once before the first stage and passed to each stage in turn. Dropping
/// the context releases the store connection.
pub struct SeedContext {
    store: Arc<dyn DocumentStore>,
    generator: DataGenerator,
    artifacts: ArtifactDir,
    batch_size: usize,
    clock: Clock,
}

impl SeedContext {
    pub fn new(store: Arc<dyn DocumentStore>, artifacts: ArtifactDir, seed: u64) -> Self {
        Self {
            store,
            generator: DataGenerator::new(seed),
            artifacts,
            batch_size: DEFAULT_BATCH_SIZE,
            clock: Clock::System,
        }
    }

    /// Set the batch size for insert operations.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    pub fn generator(&mut self) -> &mut DataGenerator {
        &mut self.generator
    }

    pub fn artifacts(&self) -> &ArtifactDir {
        &self.artifacts
    }

    /// The current time at millisecond precision.
    pub fn now(&self) -> DateTime<Utc> {
        match self.clock {
            Clock::System => truncate_to_millis(Utc::now()),
            Clock::Fixed(now) => truncate_to_millis(now),
        }
    }

    /// Insert records into a collection in batches, returning their ids in order.
    pub async fn insert<T: Serialize>(
        &self,
        collection: &str,
        records: &[T],
    ) -> Result<InsertOutcome, SeedError> {
        Ok(insert_records(self.store(), collection, records, self.batch_size).await?)
    }
}

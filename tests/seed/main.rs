//! Seeding pipeline integration tests.
//!
//! `pipeline_memory` runs the full pipeline against the in-memory document
//! store and checks the referential properties of the generated data set.
//! `mongodb_seed` runs against a live MongoDB server and is ignored by default.

mod mongodb_seed;
mod pipeline_memory;

//! delivery-seed: populate a MongoDB database with a consistent food-delivery
//! data set.
//!
//! A run executes up to five stages in a fixed order:
//!
//! ```text
//! users ──────────────┐
//! restaurants ──┬─────┤
//!               ▼     ▼
//!             menu ─► orders ─► reviews
//! ```
//!
//! Each stage inserts its records, exports the identifiers it created as CSV
//! artifacts under the data directory, and hands them to later stages in memory.
//! A stage run on its own reads its inputs back from those artifacts.

pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod run;
pub mod stages;
pub mod state;

pub use config::{SeedConfig, SeedCounts};
pub use context::{Clock, SeedContext};
pub use error::SeedError;
pub use pipeline::{Pipeline, Stage, StageReport};
pub use run::{run_seed, run_seed_with_clock, SeedSummary};
pub use state::SeedState;

//! The five generation stages.
//!
//! Each stage generates its records, inserts them in batches, exports its
//! artifacts and records its outputs in [`SeedState`] for the stages after it.

mod menu;
mod orders;
mod restaurants;
mod reviews;
mod users;

use crate::config::SeedCounts;
use crate::context::SeedContext;
use crate::error::SeedError;
use crate::pipeline::{Stage, StageReport};
use crate::state::SeedState;
use seed_artifacts::{Artifact, ArtifactDir, ArtifactMetrics};

pub const USERS_COLLECTION: &str = "users";
pub const RESTAURANTS_COLLECTION: &str = "restaurants";
pub const MENU_ITEMS_COLLECTION: &str = "menu_items";
pub const ORDERS_COLLECTION: &str = "orders";
pub const REVIEWS_COLLECTION: &str = "reviews";

/// Run a single stage. Its inputs must already be in `state`.
pub(crate) async fn run_stage(
    stage: Stage,
    ctx: &mut SeedContext,
    state: &mut SeedState,
    counts: &SeedCounts,
) -> Result<StageReport, SeedError> {
    let metrics = match stage {
        Stage::Users => users::run(ctx, state, counts.users).await?,
        Stage::Restaurants => restaurants::run(ctx, state, counts.restaurants).await?,
        Stage::Menu => menu::run(ctx, state, counts.items_per_restaurant).await?,
        Stage::Orders => {
            orders::run(ctx, state, counts.orders, counts.orders_per_restaurant).await?
        }
        Stage::Reviews => reviews::run(ctx, state).await?,
    };

    Ok(StageReport {
        stage,
        records: metrics.rows_inserted,
        batches: metrics.batch_count,
        duration: metrics.total_duration,
        serialize_duration: metrics.serialize_duration,
        insert_duration: metrics.insert_duration,
    })
}

/// Error for an input that should have been loaded before the stage started.
fn missing_input(stage: Stage, artifact: Artifact, dir: &ArtifactDir) -> SeedError {
    SeedError::MissingInput {
        stage: stage.name(),
        artifact,
        dir: dir.root().to_path_buf(),
    }
}

fn log_export(artifact: Artifact, metrics: &ArtifactMetrics) {
    tracing::debug!(
        "Wrote {} rows ({} bytes) to {} in {:?}",
        metrics.rows_written,
        metrics.file_size_bytes,
        artifact,
        metrics.total_duration
    );
}

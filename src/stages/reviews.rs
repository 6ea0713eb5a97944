use super::{log_export, missing_input, REVIEWS_COLLECTION};
use crate::context::SeedContext;
use crate::error::SeedError;
use crate::pipeline::Stage;
use crate::state::SeedState;
use seed_artifacts::Artifact;
use seed_generator::Review;
use seed_populate_mongodb::PopulateMetrics;
use tracing::info;

/// Generate one review per exported order.
pub(super) async fn run(
    ctx: &mut SeedContext,
    state: &mut SeedState,
) -> Result<PopulateMetrics, SeedError> {
    let orders = state
        .orders()
        .ok_or_else(|| missing_input(Stage::Reviews, Artifact::Orders, ctx.artifacts()))?;

    let now = ctx.now();
    let reviews: Vec<Review> = orders
        .iter()
        .map(|order| ctx.generator().review(order, now))
        .collect();

    let outcome = ctx.insert(REVIEWS_COLLECTION, &reviews).await?;
    info!("Inserted {} reviews", outcome.ids.len());

    let export = ctx.artifacts().write_ids(Artifact::ReviewIds, &outcome.ids)?;
    log_export(Artifact::ReviewIds, &export);

    Ok(outcome.metrics)
}

use super::{log_export, RESTAURANTS_COLLECTION};
use crate::context::SeedContext;
use crate::error::SeedError;
use crate::state::SeedState;
use seed_artifacts::Artifact;
use seed_generator::Restaurant;
use seed_populate_mongodb::PopulateMetrics;
use tracing::info;

pub(super) async fn run(
    ctx: &mut SeedContext,
    state: &mut SeedState,
    count: u64,
) -> Result<PopulateMetrics, SeedError> {
    let restaurants: Vec<Restaurant> = (0..count).map(|_| ctx.generator().restaurant()).collect();

    let outcome = ctx.insert(RESTAURANTS_COLLECTION, &restaurants).await?;
    info!("Inserted {} restaurants", outcome.ids.len());

    let export = ctx
        .artifacts()
        .write_ids(Artifact::RestaurantIds, &outcome.ids)?;
    log_export(Artifact::RestaurantIds, &export);

    state.set_restaurant_ids(outcome.ids);
    Ok(outcome.metrics)
}

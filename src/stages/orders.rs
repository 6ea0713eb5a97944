use super::{log_export, missing_input, ORDERS_COLLECTION};
use crate::context::SeedContext;
use crate::error::SeedError;
use crate::pipeline::Stage;
use crate::state::SeedState;
use seed_artifacts::Artifact;
use seed_generator::{Order, OrderSummary};
use seed_populate_mongodb::PopulateMetrics;
use tracing::info;

/// Generate `count` orders against previously created users, restaurants and
/// menu items.
///
/// `per_restaurant` is reported but places no bound on how many orders a single
/// restaurant receives.
pub(super) async fn run(
    ctx: &mut SeedContext,
    state: &mut SeedState,
    count: u64,
    per_restaurant: u64,
) -> Result<PopulateMetrics, SeedError> {
    let missing = |artifact| missing_input(Stage::Orders, artifact, ctx.artifacts());
    let user_ids = state.user_ids().ok_or_else(|| missing(Artifact::UserIds))?;
    let restaurant_ids = state
        .restaurant_ids()
        .ok_or_else(|| missing(Artifact::RestaurantIds))?;
    let menu = state.menu().ok_or_else(|| missing(Artifact::MenuItems))?;

    info!(
        "Generating {} orders across {} users and {} restaurants ({} orders per restaurant requested, not enforced)",
        count,
        user_ids.len(),
        restaurant_ids.len(),
        per_restaurant
    );

    let now = ctx.now();
    let orders = (0..count)
        .map(|_| ctx.generator().order(user_ids, restaurant_ids, menu, now))
        .collect::<Result<Vec<Order>, _>>()?;

    let outcome = ctx.insert(ORDERS_COLLECTION, &orders).await?;
    info!("Inserted {} orders", outcome.ids.len());

    let summaries: Vec<OrderSummary> = outcome
        .ids
        .iter()
        .zip(&orders)
        .map(|(&order_id, order)| OrderSummary::new(order_id, order))
        .collect();

    let export = ctx.artifacts().write_orders(&summaries)?;
    log_export(Artifact::Orders, &export);

    state.set_orders(summaries);
    Ok(outcome.metrics)
}

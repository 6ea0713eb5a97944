use super::{log_export, missing_input, MENU_ITEMS_COLLECTION};
use crate::context::SeedContext;
use crate::error::SeedError;
use crate::pipeline::Stage;
use crate::state::SeedState;
use bson::oid::ObjectId;
use seed_artifacts::Artifact;
use seed_generator::{MenuCatalog, MenuItem, PricedItem};
use seed_populate_mongodb::PopulateMetrics;
use tracing::info;

/// Generate `items_per_restaurant` menu items for every known restaurant.
pub(super) async fn run(
    ctx: &mut SeedContext,
    state: &mut SeedState,
    items_per_restaurant: u64,
) -> Result<PopulateMetrics, SeedError> {
    let restaurant_ids = state
        .restaurant_ids()
        .ok_or_else(|| missing_input(Stage::Menu, Artifact::RestaurantIds, ctx.artifacts()))?;

    let mut items: Vec<MenuItem> = Vec::new();
    for &restaurant_id in restaurant_ids {
        for _ in 0..items_per_restaurant {
            items.push(ctx.generator().menu_item(restaurant_id));
        }
    }

    let outcome = ctx.insert(MENU_ITEMS_COLLECTION, &items).await?;
    info!(
        "Inserted {} menu items for {} restaurants",
        outcome.ids.len(),
        restaurant_ids.len()
    );

    let priced: Vec<(ObjectId, PricedItem)> = items
        .iter()
        .zip(&outcome.ids)
        .map(|(item, &menu_item_id)| {
            (
                item.restaurant_id,
                PricedItem {
                    menu_item_id,
                    price: item.price,
                },
            )
        })
        .collect();

    let export = ctx
        .artifacts()
        .write_menu_items(priced.iter().map(|(restaurant_id, item)| (*restaurant_id, item)))?;
    log_export(Artifact::MenuItems, &export);
    let export = ctx
        .artifacts()
        .write_ids(Artifact::MenuItemIds, &outcome.ids)?;
    log_export(Artifact::MenuItemIds, &export);

    let catalog: MenuCatalog = priced.into_iter().collect();
    state.set_menu(catalog);
    Ok(outcome.metrics)
}

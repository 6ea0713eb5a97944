//! Identifiers produced by completed stages, held in memory for later stages.

use crate::error::SeedError;
use bson::oid::ObjectId;
use seed_artifacts::{Artifact, ArtifactDir};
use seed_generator::{MenuCatalog, OrderSummary};
use tracing::info;

/// Outputs of the stages that have run so far.
///
/// A stage that runs in the same process as its producer reads these directly.
/// Anything not produced in this run is loaded from the artifact directory on
/// first use.
#[derive(Debug, Default)]
pub struct SeedState {
    user_ids: Option<Vec<ObjectId>>,
    restaurant_ids: Option<Vec<ObjectId>>,
    menu: Option<MenuCatalog>,
    orders: Option<Vec<OrderSummary>>,
}

impl SeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the data behind `artifact` is already in memory.
    ///
    /// Menu item ids and review ids are exports only and are never held.
    pub fn holds(&self, artifact: Artifact) -> bool {
        match artifact {
            Artifact::UserIds => self.user_ids.is_some(),
            Artifact::RestaurantIds => self.restaurant_ids.is_some(),
            Artifact::MenuItems => self.menu.is_some(),
            Artifact::Orders => self.orders.is_some(),
            Artifact::MenuItemIds | Artifact::ReviewIds => false,
        }
    }

    /// Make sure the data behind `artifact` is in memory, reading it from `dir`
    /// when no stage of this run produced it.
    pub fn ensure(&mut self, artifact: Artifact, dir: &ArtifactDir) -> Result<(), SeedError> {
        if self.holds(artifact) {
            return Ok(());
        }

        match artifact {
            Artifact::UserIds => {
                let ids = dir.read_ids(artifact)?;
                info!("Loaded {} user ids from '{}'", ids.len(), dir.path(artifact).display());
                self.user_ids = Some(ids);
            }
            Artifact::RestaurantIds => {
                let ids = dir.read_ids(artifact)?;
                info!(
                    "Loaded {} restaurant ids from '{}'",
                    ids.len(),
                    dir.path(artifact).display()
                );
                self.restaurant_ids = Some(ids);
            }
            Artifact::MenuItems => {
                let menu = dir.read_menu_catalog()?;
                info!(
                    "Loaded {} menu items for {} restaurants from '{}'",
                    menu.len(),
                    menu.restaurant_count(),
                    dir.path(artifact).display()
                );
                self.menu = Some(menu);
            }
            Artifact::Orders => {
                let orders = dir.read_orders()?;
                info!("Loaded {} orders from '{}'", orders.len(), dir.path(artifact).display());
                self.orders = Some(orders);
            }
            Artifact::MenuItemIds | Artifact::ReviewIds => {
                return Err(SeedError::Config(format!(
                    "'{artifact}' is an export and no stage reads it"
                )));
            }
        }
        Ok(())
    }

    pub fn user_ids(&self) -> Option<&[ObjectId]> {
        self.user_ids.as_deref()
    }

    pub fn restaurant_ids(&self) -> Option<&[ObjectId]> {
        self.restaurant_ids.as_deref()
    }

    pub fn menu(&self) -> Option<&MenuCatalog> {
        self.menu.as_ref()
    }

    pub fn orders(&self) -> Option<&[OrderSummary]> {
        self.orders.as_deref()
    }

    pub(crate) fn set_user_ids(&mut self, ids: Vec<ObjectId>) {
        self.user_ids = Some(ids);
    }

    pub(crate) fn set_restaurant_ids(&mut self, ids: Vec<ObjectId>) {
        self.restaurant_ids = Some(ids);
    }

    pub(crate) fn set_menu(&mut self, menu: MenuCatalog) {
        self.menu = Some(menu);
    }

    pub(crate) fn set_orders(&mut self, orders: Vec<OrderSummary>) {
        self.orders = Some(orders);
    }
}

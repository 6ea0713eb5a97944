//! The directory that holds a run's artifacts.

use crate::artifact::Artifact;
use crate::error::ArtifactError;
use crate::reader::read_rows;
use crate::writer::{write_rows, ArtifactMetrics};
use bson::oid::ObjectId;
use seed_generator::generators::timestamp::{format_timestamp, parse_timestamp};
use seed_generator::{MenuCatalog, OrderSummary, PricedItem};
use std::path::{Path, PathBuf};

/// Artifact directory for one seeding run.
#[derive(Debug, Clone)]
pub struct ArtifactDir {
    root: PathBuf,
}

impl ArtifactDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of an artifact inside this directory.
    pub fn path(&self, artifact: Artifact) -> PathBuf {
        self.root.join(artifact.file_name())
    }

    pub fn exists(&self, artifact: Artifact) -> bool {
        self.path(artifact).is_file()
    }

    /// Write a single-column identifier list.
    pub fn write_ids(
        &self,
        artifact: Artifact,
        ids: &[ObjectId],
    ) -> Result<ArtifactMetrics, ArtifactError> {
        debug_assert!(artifact.is_id_list(), "{artifact} is not an id list");
        let path = self.prepare(artifact)?;
        write_rows(&path, artifact, ids.iter().map(|id| vec![id.to_hex()]))
    }

    /// Write the `restaurant_id,menu_item_id,price` lookup in the given order.
    pub fn write_menu_items<'a, I>(&self, items: I) -> Result<ArtifactMetrics, ArtifactError>
    where
        I: IntoIterator<Item = (ObjectId, &'a PricedItem)>,
    {
        let path = self.prepare(Artifact::MenuItems)?;
        let rows = items.into_iter().map(|(restaurant_id, item)| {
            vec![
                restaurant_id.to_hex(),
                item.menu_item_id.to_hex(),
                format!("{:.2}", item.price),
            ]
        });
        write_rows(&path, Artifact::MenuItems, rows)
    }

    /// Write the `order_id,user_id,restaurant_id,ordered_at` export.
    pub fn write_orders(&self, orders: &[OrderSummary]) -> Result<ArtifactMetrics, ArtifactError> {
        let path = self.prepare(Artifact::Orders)?;
        let rows = orders.iter().map(|order| {
            vec![
                order.order_id.to_hex(),
                order.user_id.to_hex(),
                order.restaurant_id.to_hex(),
                format_timestamp(&order.ordered_at),
            ]
        });
        write_rows(&path, Artifact::Orders, rows)
    }

    /// Read a single-column identifier list.
    pub fn read_ids(&self, artifact: Artifact) -> Result<Vec<ObjectId>, ArtifactError> {
        debug_assert!(artifact.is_id_list(), "{artifact} is not an id list");
        let path = self.path(artifact);
        let column = artifact.columns()[0];
        read_rows(&path, artifact)?
            .iter()
            .map(|row| row.parse(&path, 0, column, parse_object_id))
            .collect()
    }

    /// Read the menu lookup, grouping items by restaurant.
    pub fn read_menu_catalog(&self) -> Result<MenuCatalog, ArtifactError> {
        let path = self.path(Artifact::MenuItems);
        read_rows(&path, Artifact::MenuItems)?
            .iter()
            .map(|row| -> Result<_, ArtifactError> {
                let restaurant_id = row.parse(&path, 0, "restaurant_id", parse_object_id)?;
                let menu_item_id = row.parse(&path, 1, "menu_item_id", parse_object_id)?;
                let price = row.parse(&path, 2, "price", parse_price)?;
                Ok((
                    restaurant_id,
                    PricedItem {
                        menu_item_id,
                        price,
                    },
                ))
            })
            .collect()
    }

    /// Read the order export.
    pub fn read_orders(&self) -> Result<Vec<OrderSummary>, ArtifactError> {
        let path = self.path(Artifact::Orders);
        read_rows(&path, Artifact::Orders)?
            .iter()
            .map(|row| -> Result<_, ArtifactError> {
                Ok(OrderSummary {
                    order_id: row.parse(&path, 0, "order_id", parse_object_id)?,
                    user_id: row.parse(&path, 1, "user_id", parse_object_id)?,
                    restaurant_id: row.parse(&path, 2, "restaurant_id", parse_object_id)?,
                    ordered_at: row.parse(&path, 3, "ordered_at", |s| {
                        parse_timestamp(s).ok_or("not an ISO 8601 timestamp")
                    })?,
                })
            })
            .collect()
    }

    fn prepare(&self, artifact: Artifact) -> Result<PathBuf, ArtifactError> {
        std::fs::create_dir_all(&self.root).map_err(|source| ArtifactError::Io {
            path: self.root.clone(),
            source,
        })?;
        Ok(self.path(artifact))
    }
}

fn parse_object_id(s: &str) -> Result<ObjectId, bson::oid::Error> {
    ObjectId::parse_str(s)
}

fn parse_price(s: &str) -> Result<f64, String> {
    let price: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if price.is_finite() && price > 0.0 {
        Ok(price)
    } else {
        Err("price must be a positive number".to_string())
    }
}

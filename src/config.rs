//! Validated run configuration.

use crate::error::SeedError;
use crate::pipeline::{Pipeline, Stage};
use seed_generator::MAX_LINE_ITEMS;
use seed_populate::CommonSeedArgs;
use std::path::PathBuf;
use tracing::warn;

/// How many records each stage generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedCounts {
    pub users: u64,
    pub restaurants: u64,
    pub items_per_restaurant: u64,
    pub orders: u64,
    /// Accepted and reported, never used to bound orders per restaurant.
    pub orders_per_restaurant: u64,
}

impl Default for SeedCounts {
    fn default() -> Self {
        Self {
            users: 10_000,
            restaurants: 1_000,
            items_per_restaurant: 15,
            orders: 20_000,
            orders_per_restaurant: 15,
        }
    }
}

/// Everything a seeding run needs besides the store connection.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub data_dir: PathBuf,
    pub counts: SeedCounts,
    pub batch_size: usize,
    pub seed: u64,
    pub pipeline: Pipeline,
    pub drop_existing: bool,
    pub dry_run: bool,
}

impl SeedConfig {
    /// Validate command-line arguments. A missing seed is replaced by a random one.
    pub fn from_args(args: &CommonSeedArgs) -> Result<Self, SeedError> {
        if args.batch_size == 0 {
            return Err(SeedError::Config("batch size must be at least 1".to_string()));
        }

        let pipeline = Pipeline::from_names(&args.stages)?;
        let counts = SeedCounts {
            users: args.users,
            restaurants: args.restaurants,
            items_per_restaurant: args.items_per_restaurant,
            orders: args.orders,
            orders_per_restaurant: args.orders_per_restaurant,
        };

        if pipeline.contains(Stage::Orders)
            && pipeline.contains(Stage::Menu)
            && counts.orders > 0
            && counts.items_per_restaurant < MAX_LINE_ITEMS as u64
        {
            warn!(
                "{} items per restaurant is below the maximum of {} items per order; \
                 orders that draw a larger sample will fail",
                counts.items_per_restaurant, MAX_LINE_ITEMS
            );
        }

        Ok(Self {
            data_dir: args.data_dir.clone(),
            counts,
            batch_size: args.batch_size,
            seed: args.seed.unwrap_or_else(rand::random),
            pipeline,
            drop_existing: args.drop_existing,
            dry_run: args.dry_run,
        })
    }
}

//! Common CLI argument definitions shared by all populators.

use clap::Args;
use std::path::PathBuf;

/// Common arguments shared by all populators.
///
/// Every option has a default, so a bare invocation seeds the full data set.
#[derive(Args, Clone, Debug)]
pub struct CommonSeedArgs {
    /// Directory for the intermediate CSV artifacts
    #[arg(long, env = "SEED_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Number of users to generate
    #[arg(long, default_value = "10000")]
    pub users: u64,

    /// Number of restaurants to generate
    #[arg(long, default_value = "1000")]
    pub restaurants: u64,

    /// Number of menu items to generate for every restaurant
    #[arg(long, default_value = "15")]
    pub items_per_restaurant: u64,

    /// Total number of orders to generate
    #[arg(long, default_value = "20000")]
    pub orders: u64,

    /// Reserved: orders per restaurant (reported, not enforced)
    #[arg(long, default_value = "15")]
    pub orders_per_restaurant: u64,

    /// Batch size for database inserts
    #[arg(long, default_value = "1000")]
    pub batch_size: usize,

    /// Random seed for deterministic generation (random when omitted)
    #[arg(long, env = "SEED_RANDOM_SEED")]
    pub seed: Option<u64>,

    /// Stages to run (comma-separated, empty = all stages in order)
    #[arg(long, value_delimiter = ',')]
    pub stages: Vec<String>,

    /// Drop the target collections before seeding
    #[arg(long)]
    pub drop_existing: bool,

    /// Dry-run mode: validate configuration and print the plan without touching storage
    #[arg(long)]
    pub dry_run: bool,
}

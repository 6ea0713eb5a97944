//! Seeding a live MongoDB database.
//!
//! Requires a running server; set `MONGODB_CONNECTION_STRING` to point at it and
//! run with `cargo test -- --ignored`.

use delivery_seed::{run_seed, Pipeline, SeedConfig, SeedCounts};
use seed_populate_mongodb::{DocumentStore, MongoDBStore};
use std::sync::Arc;
use tempfile::TempDir;

const MONGODB_DATABASE: &str = "delivery_seed_test";

#[tokio::test]
#[ignore = "requires a MongoDB server"]
async fn test_mongodb_small_scale() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("delivery_seed=info,seed_populate_mongodb=info")
        .try_init()
        .ok();

    let uri = std::env::var("MONGODB_CONNECTION_STRING")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let store = Arc::new(MongoDBStore::connect(&uri, MONGODB_DATABASE).await?);
    let temp_dir = TempDir::new()?;

    let config = SeedConfig {
        data_dir: temp_dir.path().to_path_buf(),
        counts: SeedCounts {
            users: 10,
            restaurants: 4,
            items_per_restaurant: 5,
            orders: 15,
            orders_per_restaurant: 15,
        },
        batch_size: 4,
        seed: 42,
        pipeline: Pipeline::full(),
        drop_existing: true,
        dry_run: false,
    };

    let summary = run_seed(&config, store.clone()).await?;
    assert_eq!(
        summary.collection_counts,
        vec![
            ("users", 10),
            ("restaurants", 4),
            ("menu_items", 20),
            ("orders", 15),
            ("reviews", 15),
        ]
    );

    for (collection, _) in &summary.collection_counts {
        store.drop_collection(collection).await?;
    }
    Ok(())
}

//! Full pipeline runs against the in-memory document store.

use bson::oid::ObjectId;
use bson::Document;
use chrono::{DateTime, TimeZone, Utc};
use delivery_seed::{run_seed_with_clock, Clock, Pipeline, SeedConfig, SeedCounts, SeedError, Stage};
use seed_artifacts::{Artifact, ArtifactDir, ArtifactError};
use seed_generator::GeneratorError;
use seed_populate_mongodb::{DocumentStore, DocumentStoreError, MemoryStore};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

const SEED: u64 = 42;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn config(data_dir: &Path, counts: SeedCounts) -> SeedConfig {
    SeedConfig {
        data_dir: data_dir.to_path_buf(),
        counts,
        batch_size: 4,
        seed: SEED,
        pipeline: Pipeline::full(),
        drop_existing: false,
        dry_run: false,
    }
}

fn counts(users: u64, restaurants: u64, items_per_restaurant: u64, orders: u64) -> SeedCounts {
    SeedCounts {
        users,
        restaurants,
        items_per_restaurant,
        orders,
        orders_per_restaurant: 15,
    }
}

async fn run(config: &SeedConfig, store: &Arc<MemoryStore>) -> Result<delivery_seed::SeedSummary, SeedError> {
    let store: Arc<dyn DocumentStore> = store.clone();
    run_seed_with_clock(config, store, Clock::Fixed(now())).await
}

fn ids(documents: &[Document]) -> HashSet<ObjectId> {
    documents
        .iter()
        .map(|doc| doc.get_object_id("_id").unwrap())
        .collect()
}

#[tokio::test]
async fn test_small_pipeline_menu_count() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryStore::new());

    let summary = run(&config(temp_dir.path(), counts(5, 3, 2, 0)), &store)
        .await
        .unwrap();

    assert_eq!(summary.reports.len(), 5);
    assert!(!summary.dry_run);
    for report in &summary.reports {
        assert!(report.serialize_duration + report.insert_duration <= report.duration);
    }
    assert_eq!(
        summary.collection_counts,
        vec![
            ("users", 5),
            ("restaurants", 3),
            ("menu_items", 6),
            ("orders", 0),
            ("reviews", 0),
        ]
    );

    let restaurant_ids = ids(&store.documents("restaurants"));
    assert_eq!(restaurant_ids.len(), 3);
    for item in store.documents("menu_items") {
        assert!(restaurant_ids.contains(&item.get_object_id("restaurant_id").unwrap()));
    }

    // Exports line up with what was stored
    let dir = ArtifactDir::new(temp_dir.path());
    let exported: HashSet<ObjectId> = dir
        .read_ids(Artifact::RestaurantIds)
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(exported, restaurant_ids);
    assert_eq!(dir.read_menu_catalog().unwrap().len(), 6);
    assert_eq!(dir.read_ids(Artifact::MenuItemIds).unwrap().len(), 6);
    assert!(dir.read_orders().unwrap().is_empty());
}

#[tokio::test]
async fn test_full_pipeline_referential_integrity() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryStore::new());

    run(&config(temp_dir.path(), counts(20, 6, 5, 60)), &store)
        .await
        .unwrap();

    let user_ids = ids(&store.documents("users"));
    let restaurant_ids = ids(&store.documents("restaurants"));
    let menu_owner: HashMap<ObjectId, ObjectId> = store
        .documents("menu_items")
        .iter()
        .map(|item| {
            (
                item.get_object_id("_id").unwrap(),
                item.get_object_id("restaurant_id").unwrap(),
            )
        })
        .collect();

    for restaurant in store.documents("restaurants") {
        let categories = restaurant.get_array("categories").unwrap();
        let distinct: HashSet<&str> = categories.iter().map(|c| c.as_str().unwrap()).collect();
        assert!((1..=3).contains(&categories.len()));
        assert_eq!(distinct.len(), categories.len());
    }

    let orders = store.documents("orders");
    assert_eq!(orders.len(), 60);
    let mut ordered_at = HashMap::new();
    for order in &orders {
        let restaurant_id = order.get_object_id("restaurant_id").unwrap();
        assert!(user_ids.contains(&order.get_object_id("user_id").unwrap()));
        assert!(restaurant_ids.contains(&restaurant_id));

        let lines = order.get_array("items").unwrap();
        assert!((1..=5).contains(&lines.len()));
        let mut expected_total = 0.0;
        let mut seen = HashSet::new();
        for line in lines {
            let line = line.as_document().unwrap();
            let menu_item_id = line.get_object_id("menu_item_id").unwrap();
            let quantity = line.get_i32("quantity").unwrap();
            assert_eq!(menu_owner[&menu_item_id], restaurant_id);
            assert!((1..=5).contains(&quantity));
            assert!(seen.insert(menu_item_id), "duplicate item in order");
            expected_total += line.get_f64("unit_price").unwrap() * quantity as f64;
        }
        let total = order.get_f64("total").unwrap();
        assert!((total - (expected_total * 100.0).round() / 100.0).abs() < 1e-9);

        ordered_at.insert(
            order.get_object_id("_id").unwrap(),
            order.get_datetime("ordered_at").unwrap().timestamp_millis(),
        );
    }

    let reviews = store.documents("reviews");
    assert_eq!(reviews.len(), orders.len());
    for review in &reviews {
        let order_time = ordered_at[&review.get_object_id("order_id").unwrap()];
        let review_time = review.get_datetime("reviewed_at").unwrap().timestamp_millis();
        assert!(review_time >= order_time);
        assert!(review_time <= now().timestamp_millis());
        assert!((0..=5).contains(&review.get_i32("rating").unwrap()));
    }

    let dir = ArtifactDir::new(temp_dir.path());
    assert_eq!(dir.read_ids(Artifact::ReviewIds).unwrap().len(), 60);
}

#[tokio::test]
async fn test_single_item_menus_fail_explicitly() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryStore::new());

    let err = run(&config(temp_dir.path(), counts(5, 3, 1, 50)), &store)
        .await
        .unwrap_err();

    match err {
        SeedError::StageFailed { stage, source } => {
            assert_eq!(stage, "orders");
            assert!(matches!(
                *source,
                SeedError::Generator(GeneratorError::InsufficientMenuItems { available: 1, .. })
            ));
        }
        other => panic!("unexpected error: {other}"),
    }

    // Earlier stages are kept, nothing from the failed stage is written
    assert_eq!(store.count_documents("menu_items").await.unwrap(), 3);
    assert_eq!(store.count_documents("orders").await.unwrap(), 0);
    assert!(!temp_dir.path().join("orders.csv").exists());
}

#[tokio::test]
async fn test_later_stages_read_artifacts() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryStore::new());

    let mut first = config(temp_dir.path(), counts(8, 4, 5, 10));
    first.pipeline = Pipeline::new([Stage::Users, Stage::Restaurants, Stage::Menu]);
    run(&first, &store).await.unwrap();
    assert_eq!(store.count_documents("orders").await.unwrap(), 0);

    let mut second = first.clone();
    second.pipeline = Pipeline::from_names(&["orders", "reviews"]).unwrap();
    second.seed = SEED + 1;
    let summary = run(&second, &store).await.unwrap();

    assert_eq!(summary.reports.len(), 2);
    assert_eq!(summary.reports[0].stage, Stage::Orders);
    assert_eq!(summary.reports[0].records, 10);
    assert_eq!(summary.reports[1].records, 10);

    let user_ids = ids(&store.documents("users"));
    let menu_item_ids = ids(&store.documents("menu_items"));
    for order in store.documents("orders") {
        assert!(user_ids.contains(&order.get_object_id("user_id").unwrap()));
        for line in order.get_array("items").unwrap() {
            let menu_item_id = line.as_document().unwrap().get_object_id("menu_item_id").unwrap();
            assert!(menu_item_ids.contains(&menu_item_id));
        }
    }
}

#[tokio::test]
async fn test_missing_artifact_fails_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryStore::new());

    let mut config = config(temp_dir.path(), counts(5, 3, 2, 5));
    config.pipeline = Pipeline::new([Stage::Reviews]);
    let err = run(&config, &store).await.unwrap_err();

    assert!(matches!(
        err,
        SeedError::MissingInput {
            stage: "reviews",
            artifact: Artifact::Orders,
            ..
        }
    ));
    assert!(store.collection_names().is_empty());
}

#[tokio::test]
async fn test_malformed_artifact_fails_stage() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryStore::new());
    std::fs::write(
        temp_dir.path().join("orders.csv"),
        "order_id,user_id,restaurant_id,ordered_at\nnot-an-id,x,y,z\n",
    )
    .unwrap();

    let mut config = config(temp_dir.path(), counts(5, 3, 2, 5));
    config.pipeline = Pipeline::new([Stage::Reviews]);
    let err = run(&config, &store).await.unwrap_err();

    match err {
        SeedError::StageFailed { stage, source } => {
            assert_eq!(stage, "reviews");
            assert!(matches!(
                *source,
                SeedError::Artifact(ArtifactError::Malformed { line: 2, .. })
            ));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(store.count_documents("reviews").await.unwrap(), 0);
}

#[tokio::test]
async fn test_storage_failure_aborts_run() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryStore::new().reject_inserts_into("menu_items"));

    let err = run(&config(temp_dir.path(), counts(5, 3, 2, 5)), &store)
        .await
        .unwrap_err();

    match err {
        SeedError::StageFailed { stage, source } => {
            assert_eq!(stage, "menu");
            assert!(matches!(
                *source,
                SeedError::Store(DocumentStoreError::Rejected { .. })
            ));
        }
        other => panic!("unexpected error: {other}"),
    }

    assert_eq!(store.count_documents("restaurants").await.unwrap(), 3);
    assert_eq!(store.count_documents("orders").await.unwrap(), 0);
    let dir = ArtifactDir::new(temp_dir.path());
    assert!(dir.exists(Artifact::RestaurantIds));
    assert!(!dir.exists(Artifact::MenuItems));
}

#[tokio::test]
async fn test_rerun_duplicates_unless_dropped() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryStore::new());
    let mut config = config(temp_dir.path(), counts(4, 2, 5, 6));

    run(&config, &store).await.unwrap();
    run(&config, &store).await.unwrap();
    assert_eq!(store.count_documents("users").await.unwrap(), 8);

    config.drop_existing = true;
    let summary = run(&config, &store).await.unwrap();
    assert_eq!(summary.collection_counts[0], ("users", 4));
    assert_eq!(store.count_documents("reviews").await.unwrap(), 6);
}

#[tokio::test]
async fn test_same_seed_same_records() {
    let first_dir = TempDir::new().unwrap();
    let second_dir = TempDir::new().unwrap();
    let first = Arc::new(MemoryStore::new());
    let second = Arc::new(MemoryStore::new());

    run(&config(first_dir.path(), counts(10, 3, 5, 10)), &first)
        .await
        .unwrap();
    run(&config(second_dir.path(), counts(10, 3, 5, 10)), &second)
        .await
        .unwrap();

    let strip_ids = |documents: Vec<Document>, field: &str| -> Vec<String> {
        documents
            .iter()
            .map(|doc| doc.get_str(field).unwrap().to_string())
            .collect()
    };
    assert_eq!(
        strip_ids(first.documents("users"), "email"),
        strip_ids(second.documents("users"), "email")
    );
    assert_eq!(
        strip_ids(first.documents("reviews"), "comment"),
        strip_ids(second.documents("reviews"), "comment")
    );
}

#[tokio::test]
async fn test_drop_existing_keeps_upstream_collections() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryStore::new());

    let mut first = config(temp_dir.path(), counts(8, 4, 5, 10));
    first.pipeline = Pipeline::new([Stage::Users, Stage::Restaurants, Stage::Menu]);
    run(&first, &store).await.unwrap();

    let mut second = first.clone();
    second.pipeline = Pipeline::new([Stage::Orders]);
    second.drop_existing = true;
    let summary = run(&second, &store).await.unwrap();
    assert_eq!(summary.collection_counts, vec![("orders", 10)]);

    // Orders were regenerated; the users they reference are still there
    let user_ids = ids(&store.documents("users"));
    let restaurant_ids = ids(&store.documents("restaurants"));
    assert_eq!(user_ids.len(), 8);
    for order in store.documents("orders") {
        assert!(user_ids.contains(&order.get_object_id("user_id").unwrap()));
        assert!(restaurant_ids.contains(&order.get_object_id("restaurant_id").unwrap()));
    }

    // A second drop replaces the orders instead of appending
    run(&second, &store).await.unwrap();
    assert_eq!(store.count_documents("orders").await.unwrap(), 10);
}

#[tokio::test]
async fn test_drop_existing_rejects_orphaned_artifacts() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryStore::new());
    run(&config(temp_dir.path(), counts(4, 2, 5, 6)), &store)
        .await
        .unwrap();

    // menu_items.csv points at the restaurants this run would drop
    let mut config = config(temp_dir.path(), counts(4, 2, 5, 6));
    config.pipeline = Pipeline::new([Stage::Restaurants, Stage::Orders]);
    config.drop_existing = true;
    let err = run(&config, &store).await.unwrap_err();

    assert!(matches!(
        err,
        SeedError::DropConflict {
            stage: "orders",
            artifact: Artifact::MenuItems,
            collection: "restaurants",
        }
    ));
    assert_eq!(store.count_documents("restaurants").await.unwrap(), 2);
    assert_eq!(store.count_documents("orders").await.unwrap(), 6);
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    let store = Arc::new(MemoryStore::new());

    let mut config = config(&data_dir, counts(5, 3, 5, 5));
    config.dry_run = true;
    config.drop_existing = true;
    let summary = run(&config, &store).await.unwrap();

    assert!(summary.dry_run);
    assert!(summary.reports.is_empty());
    assert!(summary.collection_counts.is_empty());
    assert!(store.collection_names().is_empty());
    assert!(!data_dir.exists());
}

#[tokio::test]
async fn test_dry_run_still_validates() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(MemoryStore::new());

    let mut config = config(temp_dir.path(), counts(5, 3, 5, 5));
    config.dry_run = true;
    config.pipeline = Pipeline::new([Stage::Orders]);
    let err = run(&config, &store).await.unwrap_err();

    assert!(matches!(
        err,
        SeedError::MissingInput {
            stage: "orders",
            artifact: Artifact::UserIds,
            ..
        }
    ));
}

//! Top-level seeding run.

use crate::config::SeedConfig;
use crate::context::{Clock, SeedContext};
use crate::error::SeedError;
use crate::pipeline::StageReport;
use crate::state::SeedState;
use seed_artifacts::ArtifactDir;
use seed_populate_mongodb::DocumentStore;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a completed run.
#[derive(Debug, Clone, Default)]
pub struct SeedSummary {
    /// Set when the run only validated and described the plan.
    pub dry_run: bool,
    pub reports: Vec<StageReport>,
    /// Document count of every collection the pipeline wrote.
    pub collection_counts: Vec<(&'static str, u64)>,
    pub total_duration: Duration,
}

impl SeedSummary {
    pub fn total_records(&self) -> u64 {
        self.reports.iter().map(|report| report.records).sum()
    }
}

/// Run the configured pipeline against `store` using the system clock.
pub async fn run_seed(
    config: &SeedConfig,
    store: Arc<dyn DocumentStore>,
) -> Result<SeedSummary, SeedError> {
    run_seed_with_clock(config, store, Clock::System).await
}

/// Run the configured pipeline with an explicit clock.
///
/// A dry run validates the plan and logs it without touching `store` or the
/// artifact directory.
pub async fn run_seed_with_clock(
    config: &SeedConfig,
    store: Arc<dyn DocumentStore>,
    clock: Clock,
) -> Result<SeedSummary, SeedError> {
    let start_time = Instant::now();
    let artifacts = ArtifactDir::new(&config.data_dir);
    let collections = config.pipeline.collections();

    config.pipeline.validate(&artifacts)?;
    if config.drop_existing {
        config.pipeline.check_drop()?;
    }

    if config.dry_run {
        info!(
            "Dry run on {} backend (seed={}, batch size={})",
            store.backend(),
            config.seed,
            config.batch_size
        );
        info!("Counts: {:?}", config.counts);
        for line in config.pipeline.describe(&artifacts) {
            info!("  {}", line);
        }
        if config.drop_existing {
            info!("Would drop: {}", collections.join(", "));
        }
        return Ok(SeedSummary {
            dry_run: true,
            total_duration: start_time.elapsed(),
            ..SeedSummary::default()
        });
    }

    info!(
        "Seeding {} backend with seed {} (stages: {})",
        store.backend(),
        config.seed,
        config
            .pipeline
            .stages()
            .iter()
            .map(|stage| stage.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    if config.drop_existing {
        for &collection in &collections {
            store.drop_collection(collection).await?;
        }
    }

    let mut ctx = SeedContext::new(Arc::clone(&store), artifacts, config.seed)
        .with_batch_size(config.batch_size)
        .with_clock(clock);
    let mut state = SeedState::new();

    let reports = config
        .pipeline
        .run(&mut ctx, &mut state, &config.counts)
        .await?;
    drop(ctx);

    let mut collection_counts = Vec::with_capacity(collections.len());
    for collection in collections {
        collection_counts.push((collection, store.count_documents(collection).await?));
    }

    Ok(SeedSummary {
        dry_run: false,
        reports,
        collection_counts,
        total_duration: start_time.elapsed(),
    })
}

//! The ordered list of seeding stages and their declared dependencies.

use crate::config::SeedCounts;
use crate::context::SeedContext;
use crate::error::SeedError;
use crate::stages;
use crate::state::SeedState;
use seed_artifacts::{Artifact, ArtifactDir};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::info;

/// One generator in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Users,
    Restaurants,
    Menu,
    Orders,
    Reviews,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Stage; 5] = [
        Stage::Users,
        Stage::Restaurants,
        Stage::Menu,
        Stage::Orders,
        Stage::Reviews,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Users => "users",
            Stage::Restaurants => "restaurants",
            Stage::Menu => "menu",
            Stage::Orders => "orders",
            Stage::Reviews => "reviews",
        }
    }

    /// The collection this stage writes to.
    pub fn collection(&self) -> &'static str {
        match self {
            Stage::Users => stages::USERS_COLLECTION,
            Stage::Restaurants => stages::RESTAURANTS_COLLECTION,
            Stage::Menu => stages::MENU_ITEMS_COLLECTION,
            Stage::Orders => stages::ORDERS_COLLECTION,
            Stage::Reviews => stages::REVIEWS_COLLECTION,
        }
    }

    /// Artifacts that must exist before this stage can run.
    pub fn inputs(&self) -> &'static [Artifact] {
        match self {
            Stage::Users | Stage::Restaurants => &[],
            Stage::Menu => &[Artifact::RestaurantIds],
            Stage::Orders => &[
                Artifact::UserIds,
                Artifact::RestaurantIds,
                Artifact::MenuItems,
            ],
            Stage::Reviews => &[Artifact::Orders],
        }
    }

    /// Artifacts this stage writes.
    pub fn outputs(&self) -> &'static [Artifact] {
        match self {
            Stage::Users => &[Artifact::UserIds],
            Stage::Restaurants => &[Artifact::RestaurantIds],
            Stage::Menu => &[Artifact::MenuItems, Artifact::MenuItemIds],
            Stage::Orders => &[Artifact::Orders],
            Stage::Reviews => &[Artifact::ReviewIds],
        }
    }

    /// The stage that writes `artifact`.
    pub fn producing(artifact: Artifact) -> Stage {
        match artifact {
            Artifact::UserIds => Stage::Users,
            Artifact::RestaurantIds => Stage::Restaurants,
            Artifact::MenuItems | Artifact::MenuItemIds => Stage::Menu,
            Artifact::Orders => Stage::Orders,
            Artifact::ReviewIds => Stage::Reviews,
        }
    }

    /// Stages whose documents this stage's records reference, directly or
    /// through their own inputs, in execution order.
    pub fn upstream(&self) -> Vec<Stage> {
        let mut found = Vec::new();
        let mut pending: Vec<Stage> = self
            .inputs()
            .iter()
            .map(|&input| Stage::producing(input))
            .collect();
        while let Some(stage) = pending.pop() {
            if !found.contains(&stage) {
                found.push(stage);
                pending.extend(stage.inputs().iter().map(|&input| Stage::producing(input)));
            }
        }
        found.sort();
        found
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stage {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "users" => Ok(Stage::Users),
            "restaurants" => Ok(Stage::Restaurants),
            "menu" | "menu_items" | "menu-items" => Ok(Stage::Menu),
            "orders" => Ok(Stage::Orders),
            "reviews" => Ok(Stage::Reviews),
            _ => Err(SeedError::UnknownStage(s.trim().to_string())),
        }
    }
}

/// What a stage did.
#[derive(Debug, Clone)]
pub struct StageReport {
    pub stage: Stage,
    /// Documents inserted.
    pub records: u64,
    /// Insert batches executed.
    pub batches: u64,
    pub duration: Duration,
    /// Time spent converting records to documents.
    pub serialize_duration: Duration,
    /// Time spent waiting on the store.
    pub insert_duration: Duration,
}

impl StageReport {
    pub fn records_per_second(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.records as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// An ordered selection of stages.
///
/// Stages always run in the order of [`Stage::ALL`], whatever order they were
/// named in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::full()
    }
}

impl Pipeline {
    /// Every stage, users through reviews.
    pub fn full() -> Self {
        Self {
            stages: Stage::ALL.to_vec(),
        }
    }

    pub fn new(stages: impl IntoIterator<Item = Stage>) -> Self {
        let mut stages: Vec<Stage> = stages.into_iter().collect();
        stages.sort();
        stages.dedup();
        Self { stages }
    }

    /// Build a pipeline from stage names. No names selects every stage.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, SeedError> {
        let names: Vec<&str> = names
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| !name.trim().is_empty())
            .collect();
        if names.is_empty() {
            return Ok(Self::full());
        }

        let stages = names
            .into_iter()
            .map(Stage::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(stages))
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn contains(&self, stage: Stage) -> bool {
        self.stages.contains(&stage)
    }

    /// Collections written by this pipeline, in stage order.
    pub fn collections(&self) -> Vec<&'static str> {
        self.stages.iter().map(Stage::collection).collect()
    }

    /// Check that every stage input is produced by an earlier stage or already
    /// present in `dir`.
    pub fn validate(&self, dir: &ArtifactDir) -> Result<(), SeedError> {
        for (position, stage) in self.stages.iter().enumerate() {
            for &input in stage.inputs() {
                let produced_earlier = self.stages[..position]
                    .iter()
                    .any(|earlier| earlier.outputs().contains(&input));
                if !produced_earlier && !dir.exists(input) {
                    return Err(SeedError::MissingInput {
                        stage: stage.name(),
                        artifact: input,
                        dir: dir.root().to_path_buf(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Check that dropping this pipeline's collections leaves every artifact
    /// read from disk pointing at documents that still exist.
    ///
    /// An input read from disk was written by a stage outside this pipeline. Its
    /// rows reference that stage's collection and, through its inputs, the
    /// collections further upstream. None of those may be dropped.
    pub fn check_drop(&self) -> Result<(), SeedError> {
        for (position, stage) in self.stages.iter().enumerate() {
            for &input in stage.inputs() {
                let produced_earlier = self.stages[..position]
                    .iter()
                    .any(|earlier| earlier.outputs().contains(&input));
                if produced_earlier {
                    continue;
                }

                let producer = Stage::producing(input);
                let referenced = std::iter::once(producer).chain(producer.upstream());
                for dependency in referenced {
                    if self.contains(dependency) {
                        return Err(SeedError::DropConflict {
                            stage: stage.name(),
                            artifact: input,
                            collection: dependency.collection(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// One line per stage naming where its inputs come from.
    pub fn describe(&self, dir: &ArtifactDir) -> Vec<String> {
        self.stages
            .iter()
            .enumerate()
            .map(|(position, stage)| {
                let sources: Vec<String> = stage
                    .inputs()
                    .iter()
                    .map(|&input| {
                        let earlier = self.stages[..position]
                            .iter()
                            .find(|earlier| earlier.outputs().contains(&input));
                        match earlier {
                            Some(producer) => format!("{input} from stage '{producer}'"),
                            None => format!("{input} from '{}'", dir.path(input).display()),
                        }
                    })
                    .collect();
                let outputs: Vec<&str> =
                    stage.outputs().iter().map(Artifact::file_name).collect();

                if sources.is_empty() {
                    format!(
                        "{}. {} -> '{}', writes {}",
                        position + 1,
                        stage,
                        stage.collection(),
                        outputs.join(", ")
                    )
                } else {
                    format!(
                        "{}. {} -> '{}', reads {}, writes {}",
                        position + 1,
                        stage,
                        stage.collection(),
                        sources.join("; "),
                        outputs.join(", ")
                    )
                }
            })
            .collect()
    }

    /// Run every stage in order, stopping at the first failure.
    pub async fn run(
        &self,
        ctx: &mut SeedContext,
        state: &mut SeedState,
        counts: &SeedCounts,
    ) -> Result<Vec<StageReport>, SeedError> {
        let mut reports = Vec::with_capacity(self.stages.len());

        for &stage in &self.stages {
            info!("Stage '{}' starting", stage);
            let start = Instant::now();

            let result = async {
                for &input in stage.inputs() {
                    state.ensure(input, ctx.artifacts())?;
                }
                stages::run_stage(stage, ctx, state, counts).await
            }
            .await;

            let mut report = result.map_err(|e| SeedError::StageFailed {
                stage: stage.name(),
                source: Box::new(e),
            })?;
            report.duration = start.elapsed();

            info!(
                "Stage '{}' complete: {} documents in {} batches, {:.2}s ({:.0} docs/sec; serialize {:.2}s, insert {:.2}s)",
                stage,
                report.records,
                report.batches,
                report.duration.as_secs_f64(),
                report.records_per_second(),
                report.serialize_duration.as_secs_f64(),
                report.insert_duration.as_secs_f64()
            );
            reports.push(report);
        }

        Ok(reports)
    }
}

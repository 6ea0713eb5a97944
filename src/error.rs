//! Error type for the seeding pipeline.

use seed_artifacts::{Artifact, ArtifactError};
use seed_generator::GeneratorError;
use seed_populate_mongodb::DocumentStoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a seeding run.
#[derive(Error, Debug)]
pub enum SeedError {
    /// Invalid options.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A stage name that does not exist.
    #[error("Unknown stage '{0}' (expected one of: users, restaurants, menu, orders, reviews)")]
    UnknownStage(String),

    /// A stage input that no earlier stage produces and that is not on disk.
    #[error(
        "Stage '{stage}' needs '{artifact}', which no earlier stage in this run produces and which is missing from '{}'",
        dir.display()
    )]
    MissingInput {
        stage: &'static str,
        artifact: Artifact,
        dir: PathBuf,
    },

    /// Dropping the pipeline's collections would orphan an artifact read from disk.
    #[error(
        "Stage '{stage}' reads '{artifact}' from disk, which references '{collection}' documents that --drop-existing would remove"
    )]
    DropConflict {
        stage: &'static str,
        artifact: Artifact,
        collection: &'static str,
    },

    /// Storage connectivity or write failure.
    #[error(transparent)]
    Store(#[from] DocumentStoreError),

    /// Missing or malformed intermediate artifact.
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    /// Generation could not satisfy a sampling requirement.
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    /// A stage failed; the run stops here.
    #[error("Stage '{stage}' failed")]
    StageFailed {
        stage: &'static str,
        #[source]
        source: Box<SeedError>,
    },
}

use super::{log_export, USERS_COLLECTION};
use crate::context::SeedContext;
use crate::error::SeedError;
use crate::state::SeedState;
use seed_artifacts::Artifact;
use seed_generator::User;
use seed_populate_mongodb::PopulateMetrics;
use tracing::info;

pub(super) async fn run(
    ctx: &mut SeedContext,
    state: &mut SeedState,
    count: u64,
) -> Result<PopulateMetrics, SeedError> {
    let now = ctx.now();
    let users: Vec<User> = (0..count).map(|_| ctx.generator().user(now)).collect();

    let outcome = ctx.insert(USERS_COLLECTION, &users).await?;
    info!("Inserted {} users", outcome.ids.len());

    let export = ctx.artifacts().write_ids(Artifact::UserIds, &outcome.ids)?;
    log_export(Artifact::UserIds, &export);

    state.set_user_ids(outcome.ids);
    Ok(outcome.metrics)
}

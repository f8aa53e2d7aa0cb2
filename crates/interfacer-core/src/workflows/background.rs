use super::analyze::normalize_identifier;
use crate::core::models::background::BackgroundFrequencyTable;
use crate::engine::cache::BackgroundStore;
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{ProgressReporter, Stage};
use crate::engine::tasks::background;
use tracing::instrument;

/// Resolves (and caches) the background table for `identifier` without scoring anything.
#[instrument(skip_all, name = "background_workflow", fields(identifier = %identifier))]
pub fn run(
    identifier: &str,
    config: &AnalysisConfig,
    store: &dyn BackgroundStore,
    reporter: &ProgressReporter,
) -> Result<BackgroundFrequencyTable, EngineError> {
    let identifier = normalize_identifier(identifier);
    reporter.stage(&identifier, Stage::ResolvingBackground);
    background::resolve(config, &identifier, store)
}

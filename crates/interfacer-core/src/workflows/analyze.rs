use crate::core::io::tables::{self, TableError};
use crate::core::models::report::{InterfaceSummary, PropensityEntry};
use crate::engine::cache::BackgroundStore;
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter, Stage};
use crate::engine::tasks::{background, delta_parsing, propensity, summary};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{error, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct OutputPaths {
    pub summary: PathBuf,
    pub propensity: PathBuf,
}

impl OutputPaths {
    pub fn for_identifier(output_dir: &Path, identifier: &str) -> Self {
        Self {
            summary: output_dir.join(format!("{identifier}_interface_summary.csv")),
            propensity: output_dir.join(format!("{identifier}_residue_propensity.csv")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceReport {
    /// Upper-cased identifier used for lookup and output names.
    pub identifier: String,
    pub summary: InterfaceSummary,
    /// All twenty amino acids, highest ratio first.
    pub propensities: Vec<PropensityEntry>,
    pub outputs: OutputPaths,
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub identifier: String,
    pub result: Result<InterfaceReport, EngineError>,
}

pub fn normalize_identifier(identifier: &str) -> String {
    identifier.trim().to_ascii_uppercase()
}

/// Analyses one structure and writes its summary and propensity tables.
///
/// Nothing is written unless every stage succeeds.
#[instrument(skip_all, name = "analyze_workflow", fields(identifier = %identifier))]
pub fn run(
    identifier: &str,
    config: &AnalysisConfig,
    store: &dyn BackgroundStore,
    reporter: &ProgressReporter,
) -> Result<InterfaceReport, EngineError> {
    let identifier = normalize_identifier(identifier);

    reporter.stage(&identifier, Stage::ParsingRecords);
    let records = delta_parsing::run(
        &config.source_dir,
        &identifier,
        &config.formats.delta_extension,
    )?;

    reporter.stage(&identifier, Stage::ResolvingBackground);
    let background_table = background::resolve(config, &identifier, store)?;

    reporter.stage(&identifier, Stage::Scoring);
    let scores = propensity::run(&records, &background_table);
    let summary = summary::run(&records, scores.composite);
    info!(
        atoms = summary.total_atoms,
        residues = summary.total_residues,
        area = summary.total_area,
        propensity_score = summary.propensity_score,
        "Interface scored."
    );

    reporter.stage(&identifier, Stage::WritingTables);
    let outputs = OutputPaths::for_identifier(&config.output_dir, &identifier);
    write_tables(&config.output_dir, &outputs, &summary, &scores.entries)?;

    Ok(InterfaceReport {
        identifier,
        summary,
        propensities: scores.entries,
        outputs,
    })
}

/// Runs [`run`] for every identifier. A failure is recorded in that identifier's outcome
/// and never stops the rest of the batch. Outcomes keep the input order.
#[instrument(skip_all, name = "analyze_batch", fields(identifiers = identifiers.len()))]
pub fn run_batch<S: AsRef<str> + Sync>(
    identifiers: &[S],
    config: &AnalysisConfig,
    store: &dyn BackgroundStore,
    reporter: &ProgressReporter,
) -> Vec<BatchOutcome> {
    reporter.report(Progress::BatchStart {
        total: identifiers.len() as u64,
    });

    let analyze_one = |identifier: &S| {
        let identifier = normalize_identifier(identifier.as_ref());
        let result = run(&identifier, config, store, reporter);
        match &result {
            Ok(_) => reporter.report(Progress::Completed {
                identifier: identifier.clone(),
            }),
            Err(e) => {
                error!(identifier = %identifier, "Analysis failed: {}", e);
                reporter.report(Progress::Failed {
                    identifier: identifier.clone(),
                    reason: e.to_string(),
                });
            }
        }
        BatchOutcome { identifier, result }
    };

    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<BatchOutcome> = identifiers.iter().map(analyze_one).collect();

    #[cfg(feature = "parallel")]
    let outcomes: Vec<BatchOutcome> = identifiers.par_iter().map(analyze_one).collect();

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    info!(succeeded = outcomes.len() - failed, failed, "Batch finished.");
    reporter.report(Progress::BatchFinish);
    outcomes
}

fn write_tables(
    output_dir: &Path,
    outputs: &OutputPaths,
    summary: &InterfaceSummary,
    entries: &[PropensityEntry],
) -> Result<(), EngineError> {
    fs::create_dir_all(output_dir).map_err(|e| EngineError::io(output_dir, e))?;

    let summary_file = stage_table(output_dir, &outputs.summary, |w| {
        tables::write_summary(summary, w)
    })?;
    let propensity_file = stage_table(output_dir, &outputs.propensity, |w| {
        tables::write_propensities(entries, w)
    })?;

    summary_file
        .persist(&outputs.summary)
        .map_err(|e| EngineError::io(&outputs.summary, e.error))?;
    propensity_file.persist(&outputs.propensity).map_err(|e| {
        // A summary without its propensity table is never left behind.
        if let Err(cleanup) = fs::remove_file(&outputs.summary) {
            error!(path = %outputs.summary.display(), error = %cleanup, "Could not roll back summary table.");
        }
        EngineError::io(&outputs.propensity, e.error)
    })?;
    Ok(())
}

fn stage_table(
    output_dir: &Path,
    target: &Path,
    write: impl FnOnce(&mut dyn Write) -> Result<(), TableError>,
) -> Result<NamedTempFile, EngineError> {
    let mut temp = NamedTempFile::new_in(output_dir).map_err(|e| EngineError::io(output_dir, e))?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        write(&mut writer).map_err(|e| EngineError::csv(target, e))?;
        writer.flush().map_err(|e| EngineError::io(target, e))?;
    }
    Ok(temp)
}

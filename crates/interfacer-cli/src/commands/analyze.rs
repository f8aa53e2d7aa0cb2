use crate::cli::AnalyzeArgs;
use crate::config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use interfacer::engine::cache::CsvBackgroundStore;
use interfacer::engine::progress::ProgressReporter;
use interfacer::workflows::analyze::{self, BatchOutcome, InterfaceReport};
use tracing::{debug, error, info};

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let app = config::resolve(&args.input)?;
    info!(
        identifiers = app.identifiers.len(),
        scope = %app.analysis.scope,
        source = %app.analysis.source_dir.display(),
        output = %app.analysis.output_dir.display(),
        "Starting interface analysis."
    );

    let store = CsvBackgroundStore::new(&app.analysis.cache_dir);
    debug!(cache = %store.dir().display(), "Using background cache directory.");
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let outcomes = analyze::run_batch(&app.identifiers, &app.analysis, &store, &reporter);
    report_outcomes(&outcomes)
}

fn report_outcomes(outcomes: &[BatchOutcome]) -> Result<()> {
    let mut failed = 0;
    for outcome in outcomes {
        match &outcome.result {
            Ok(report) => println!("{}", format_report(report)),
            Err(e) => {
                failed += 1;
                error!(identifier = %outcome.identifier, "{}", e);
                eprintln!("❌ {}: {}", outcome.identifier, e);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::Batch {
            failed,
            total: outcomes.len(),
        });
    }
    Ok(())
}

fn format_report(report: &InterfaceReport) -> String {
    let summary = &report.summary;
    format!(
        "✅ {}: {} atoms, {} residues, {:.2} Å² buried, propensity score {:.3}\n   -> {}\n   -> {}",
        report.identifier,
        summary.total_atoms,
        summary.total_residues,
        summary.total_area,
        summary.propensity_score,
        report.outputs.summary.display(),
        report.outputs.propensity.display(),
    )
}

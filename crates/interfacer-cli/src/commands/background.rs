use crate::cli::BackgroundArgs;
use crate::config;
use crate::error::{CliError, Result};
use interfacer::core::models::background::BackgroundFrequencyTable;
use interfacer::engine::cache::CsvBackgroundStore;
use interfacer::engine::progress::ProgressReporter;
use interfacer::workflows::background;
use std::fmt::Write as _;
use tracing::{error, info};

pub fn run(args: BackgroundArgs) -> Result<()> {
    let app = config::resolve(&args.input)?;
    let store = CsvBackgroundStore::new(&app.analysis.cache_dir);
    let reporter = ProgressReporter::new();

    let mut failed = 0;
    for identifier in &app.identifiers {
        match background::run(identifier, &app.analysis, &store, &reporter) {
            Ok(table) => {
                info!(identifier = %identifier, "Background table ready.");
                print!("{}", format_table(identifier, &app.analysis.scope.to_string(), &table));
            }
            Err(e) => {
                failed += 1;
                error!(identifier = %identifier, "{}", e);
                eprintln!("❌ {}: {}", identifier, e);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::Batch {
            failed,
            total: app.identifiers.len(),
        });
    }
    Ok(())
}

fn format_table(identifier: &str, scope: &str, table: &BackgroundFrequencyTable) -> String {
    let mut out = format!("{identifier} ({scope} background)\n");
    for (residue, frequency) in table.iter() {
        let _ = writeln!(out, "  {residue}  {frequency:.4}");
    }
    out
}

use crate::core::io::decoder::{self, ResidueLineDecoder};
use crate::core::io::discovery;
use crate::core::models::background::BackgroundFrequencyTable;
use crate::core::models::residue::AminoAcid;
use crate::engine::cache::{BackgroundStore, ScopeKey};
use crate::engine::config::{AnalysisConfig, BackgroundScope};
use crate::engine::error::EngineError;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Returns the background table for `identifier`, loading it from `store` when a cached
/// copy exists and building and storing it otherwise.
#[instrument(skip_all, name = "background_task", fields(identifier = %identifier, scope = %config.scope))]
pub fn resolve(
    config: &AnalysisConfig,
    identifier: &str,
    store: &dyn BackgroundStore,
) -> Result<BackgroundFrequencyTable, EngineError> {
    let key = ScopeKey::new(identifier, config.scope);

    if config.rebuild_background {
        info!("Rebuild requested, ignoring any cached background table.");
    } else if let Some(table) = store.load(&key)? {
        info!("Using cached background table.");
        return Ok(table);
    }

    let table = build(
        &config.source_dir,
        identifier,
        config.scope,
        &config.formats.residue_extension,
    )?;
    store.save(&key, &table)?;
    Ok(table)
}

/// Counts standard residues over the accessibility files selected by `scope`.
pub fn build(
    source_dir: &Path,
    identifier: &str,
    scope: BackgroundScope,
    extension: &str,
) -> Result<BackgroundFrequencyTable, EngineError> {
    let files = select_files(source_dir, identifier, scope, extension)?;

    let mut counts = [0usize; AminoAcid::COUNT];
    let mut discarded = 0usize;
    for path in &files {
        let file = File::open(path).map_err(|e| EngineError::io(path, e))?;
        let outcome = decoder::scan(BufReader::new(file), &ResidueLineDecoder)
            .map_err(|e| EngineError::io(path, e))?;
        for code in &outcome.records {
            match AminoAcid::from_code(code) {
                Some(residue) => counts[residue.index()] += 1,
                None => discarded += 1,
            }
        }
        debug!(
            file = %path.display(),
            residues = outcome.records.len(),
            malformed = outcome.malformed,
            "Scanned accessibility file."
        );
        if outcome.malformed > 0 {
            warn!(
                file = %path.display(),
                dropped = outcome.malformed,
                "Dropped malformed RES lines."
            );
        }
    }

    let observations: usize = counts.iter().sum();
    if observations == 0 {
        warn!(
            files = files.len(),
            "No standard residues observed, background frequencies are all zero."
        );
    }
    info!(
        files = files.len(),
        observations, discarded, "Built background table."
    );
    Ok(BackgroundFrequencyTable::from_counts(&counts))
}

fn select_files(
    source_dir: &Path,
    identifier: &str,
    scope: BackgroundScope,
    extension: &str,
) -> Result<Vec<PathBuf>, EngineError> {
    let not_found = || EngineError::NotFound {
        what: match scope {
            BackgroundScope::Structure => format!("accessibility file '{identifier}.{extension}'"),
            BackgroundScope::Corpus => format!("accessibility files '*.{extension}'"),
        },
        dir: source_dir.to_path_buf(),
    };
    let map_io = |e: io::Error| {
        if e.kind() == io::ErrorKind::NotFound {
            not_found()
        } else {
            EngineError::io(source_dir, e)
        }
    };

    let files = match scope {
        BackgroundScope::Structure => {
            discovery::find_complex_file(source_dir, identifier, extension)
                .map_err(map_io)?
                .into_iter()
                .collect()
        }
        BackgroundScope::Corpus => {
            discovery::find_accessibility_files(source_dir, extension).map_err(map_io)?
        }
    };

    if files.is_empty() {
        return Err(not_found());
    }
    Ok(files)
}

use crate::core::io::decoder::{self, DeltaLineDecoder};
use crate::core::io::discovery;
use crate::core::models::record::DeltaAtomRecord;
use crate::engine::error::EngineError;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Reads every per-chain delta file of `identifier` in `source_dir`.
///
/// Records come back in file-name order, one per parsed `ATOM` line, without
/// deduplication. Malformed lines are dropped.
#[instrument(skip_all, name = "delta_parsing_task", fields(identifier = %identifier))]
pub fn run(
    source_dir: &Path,
    identifier: &str,
    extension: &str,
) -> Result<Vec<DeltaAtomRecord>, EngineError> {
    let files = discovery::find_chain_files(source_dir, identifier, extension)
        .map_err(|e| missing_dir_or_io(source_dir, e, identifier, extension))?;
    if files.is_empty() {
        return Err(not_found(source_dir, identifier, extension));
    }

    let mut records = Vec::new();
    for path in &files {
        let file = File::open(path).map_err(|e| EngineError::io(path, e))?;
        let outcome = decoder::scan(BufReader::new(file), &DeltaLineDecoder)
            .map_err(|e| EngineError::io(path, e))?;
        debug!(
            file = %path.display(),
            records = outcome.records.len(),
            malformed = outcome.malformed,
            "Scanned delta file."
        );
        if outcome.malformed > 0 {
            warn!(
                file = %path.display(),
                dropped = outcome.malformed,
                "Dropped malformed ATOM lines."
            );
        }
        records.extend(outcome.records);
    }

    if records.is_empty() {
        return Err(EngineError::EmptyResult {
            identifier: identifier.to_string(),
            files: files.len(),
        });
    }

    info!(
        files = files.len(),
        records = records.len(),
        "Parsed delta records."
    );
    Ok(records)
}

fn not_found(source_dir: &Path, identifier: &str, extension: &str) -> EngineError {
    EngineError::NotFound {
        what: format!("delta files '{identifier}<chain>.{extension}'"),
        dir: source_dir.to_path_buf(),
    }
}

fn missing_dir_or_io(
    source_dir: &Path,
    error: io::Error,
    identifier: &str,
    extension: &str,
) -> EngineError {
    if error.kind() == io::ErrorKind::NotFound {
        not_found(source_dir, identifier, extension)
    } else {
        EngineError::io(source_dir, error)
    }
}

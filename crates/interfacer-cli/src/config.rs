mod defaults;
mod file;
mod models;

pub use models::AppConfig;

use defaults::DefaultsConfig;
use file::FileConfig;

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use interfacer::engine::config::{AnalysisConfigBuilder, BackgroundScope, ConfigError};
use interfacer::engine::error::EngineError;
use interfacer::workflows::analyze::normalize_identifier;
use tracing::{debug, warn};

/// Resolves the final configuration with precedence CLI flag > `--set` > file > default.
pub fn resolve(args: &InputArgs) -> Result<AppConfig> {
    let mut file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    file_config.apply_set_values(&args.set_values)?;
    merge(args, file_config, DefaultsConfig::default())
}

fn merge(args: &InputArgs, file: FileConfig, defaults: DefaultsConfig) -> Result<AppConfig> {
    let paths = file.paths.unwrap_or_default();
    let background = file.background.unwrap_or_default();
    let formats = file.formats.unwrap_or_default();

    let file_scope = background
        .scope
        .as_deref()
        .map(str::parse::<BackgroundScope>)
        .transpose()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let mut builder = AnalysisConfigBuilder::new()
        .source_dir(args.rsa_dir.clone().or(paths.rsa_dir).unwrap_or(defaults.rsa_dir))
        .output_dir(args.out_dir.clone().or(paths.out_dir).unwrap_or(defaults.out_dir))
        .scope(args.scope.or(file_scope).unwrap_or(defaults.scope))
        .rebuild_background(
            args.rebuild_background
                || background.rebuild.unwrap_or(defaults.rebuild_background),
        )
        .delta_extension(
            formats
                .delta_extension
                .unwrap_or(defaults.delta_extension),
        )
        .residue_extension(
            formats
                .residue_extension
                .unwrap_or(defaults.residue_extension),
        );
    if let Some(cache_dir) = args.cache_dir.clone().or(paths.cache_dir) {
        builder = builder.cache_dir(cache_dir);
    }
    let analysis = builder.build().map_err(EngineError::from)?;

    let identifiers = normalize_identifiers(&args.pdb_ids)?;
    debug!(?analysis, ?identifiers, "Resolved configuration.");
    Ok(AppConfig {
        identifiers,
        analysis,
    })
}

fn normalize_identifiers(raw: &[String]) -> Result<Vec<String>> {
    let mut identifiers: Vec<String> = Vec::with_capacity(raw.len());
    for id in raw {
        let normalized = normalize_identifier(id);
        if normalized.is_empty() {
            return Err(CliError::Argument(
                "Structure identifiers cannot be empty.".to_string(),
            ));
        }
        if identifiers.contains(&normalized) {
            warn!(identifier = %normalized, "Identifier given more than once, processing it once.");
            continue;
        }
        identifiers.push(normalized);
    }
    Ok(identifiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn input_args(extra: &[&str]) -> InputArgs {
        let mut argv = vec!["interfacer", "analyze", "--pdb-id", "1abc"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Analyze(args) => args.input,
            Commands::Background(_) => panic!("Expected 'analyze' subcommand"),
        }
    }

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("interfacer.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        let app = resolve(&input_args(&[])).unwrap();
        assert_eq!(app.identifiers, vec!["1ABC"]);
        assert_eq!(app.analysis.source_dir, PathBuf::from("rsa"));
        assert_eq!(app.analysis.output_dir, PathBuf::from("interface"));
        assert_eq!(app.analysis.cache_dir, PathBuf::from("interface"));
        assert_eq!(app.analysis.scope, BackgroundScope::Corpus);
        assert_eq!(app.analysis.formats.delta_extension, "int");
        assert_eq!(app.analysis.formats.residue_extension, "rsa");
        assert!(!app.analysis.rebuild_background);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let config_path = write_config(
            dir.path(),
            r#"
            [paths]
            rsa-dir = "naccess"
            cache-dir = "cache"

            [background]
            scope = "structure"

            [formats]
            residue-extension = ".acc"
            "#,
        );
        let args = input_args(&["--config", config_path.to_str().unwrap()]);
        let app = resolve(&args).unwrap();

        assert_eq!(app.analysis.source_dir, PathBuf::from("naccess"));
        assert_eq!(app.analysis.output_dir, PathBuf::from("interface"));
        assert_eq!(app.analysis.cache_dir, PathBuf::from("cache"));
        assert_eq!(app.analysis.scope, BackgroundScope::Structure);
        assert_eq!(app.analysis.formats.residue_extension, "acc");
    }

    #[test]
    fn cli_flags_override_set_values_which_override_the_file() {
        let dir = tempdir().unwrap();
        let config_path = write_config(
            dir.path(),
            "[paths]\nrsa-dir = \"from-file\"\nout-dir = \"from-file\"\n[background]\nscope = \"structure\"\n",
        );
        let args = input_args(&[
            "--config",
            config_path.to_str().unwrap(),
            "-S",
            "paths.rsa-dir=from-set",
            "-S",
            "paths.out-dir=from-set",
            "--out-dir",
            "from-cli",
            "--scope",
            "corpus",
        ]);
        let app = resolve(&args).unwrap();

        assert_eq!(app.analysis.source_dir, PathBuf::from("from-set"));
        assert_eq!(app.analysis.output_dir, PathBuf::from("from-cli"));
        assert_eq!(app.analysis.scope, BackgroundScope::Corpus);
    }

    #[test]
    fn rebuild_flag_or_file_setting_enables_rebuild() {
        assert!(resolve(&input_args(&["--rebuild-background"]))
            .unwrap()
            .analysis
            .rebuild_background);
        assert!(resolve(&input_args(&["-S", "background.rebuild=true"]))
            .unwrap()
            .analysis
            .rebuild_background);
    }

    #[test]
    fn invalid_scope_in_file_is_a_config_error() {
        let args = input_args(&["-S", "background.scope=galaxy"]);
        assert!(matches!(resolve(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn empty_extension_surfaces_as_an_engine_config_error() {
        let args = input_args(&["-S", "formats.delta-extension=."]);
        assert!(matches!(
            resolve(&args),
            Err(CliError::Engine(EngineError::Config(ConfigError::EmptyExtension(_))))
        ));
    }

    #[test]
    fn malformed_config_file_reports_its_path() {
        let dir = tempdir().unwrap();
        let config_path = write_config(dir.path(), "[paths\nrsa-dir = 1");
        let args = input_args(&["--config", config_path.to_str().unwrap()]);
        match resolve(&args) {
            Err(CliError::FileParsing { path, .. }) => assert_eq!(path, config_path),
            other => panic!("Expected FileParsing error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn identifiers_are_uppercased_and_deduplicated() {
        let ids = normalize_identifiers(&[
            "1abc".to_string(),
            " 2xyz ".to_string(),
            "1ABC".to_string(),
        ])
        .unwrap();
        assert_eq!(ids, vec!["1ABC", "2XYZ"]);
        assert!(matches!(
            normalize_identifiers(&["  ".to_string()]),
            Err(CliError::Argument(_))
        ));
    }
}

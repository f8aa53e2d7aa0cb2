use clap::{Args, Parser, Subcommand};
use interfacer::engine::config::BackgroundScope;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "interfacer",
    author,
    version,
    about = "Interfacer CLI - Compute protein-protein interface metrics and residue propensities from per-atom buried surface area.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to analyse identifiers in parallel.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute interface summary and residue propensity tables for one or more structures.
    Analyze(AnalyzeArgs),
    /// Build (or load from cache) the background residue frequencies and print them.
    Background(BackgroundArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for the `background` subcommand.
#[derive(Args, Debug)]
pub struct BackgroundArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Identifier, location and background options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Structure identifier to process. Repeat to process several in one run.
    #[arg(long = "pdb-id", value_name = "ID", required = true)]
    pub pdb_ids: Vec<String>,

    /// Directory holding the delta (.int) and accessibility (.rsa) files.
    #[arg(long, value_name = "DIR")]
    pub rsa_dir: Option<PathBuf>,

    /// Directory the summary and propensity tables are written to.
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Directory for cached background tables. Defaults to the output directory.
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Residue population used as the background: 'corpus' or 'structure'.
    #[arg(long, value_name = "SCOPE")]
    pub scope: Option<BackgroundScope>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore any cached background table and rebuild it.
    #[arg(long)]
    pub rebuild_background: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S background.scope=structure
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_accepts_repeated_identifiers_and_scope() {
        let cli = Cli::parse_from([
            "interfacer",
            "-vv",
            "analyze",
            "--pdb-id",
            "1abc",
            "--pdb-id",
            "2XYZ",
            "--scope",
            "structure",
            "-S",
            "paths.out-dir=results",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Analyze(args) = cli.command else {
            panic!("Expected 'analyze' subcommand");
        };
        assert_eq!(args.input.pdb_ids, vec!["1abc", "2XYZ"]);
        assert_eq!(args.input.scope, Some(BackgroundScope::Structure));
        assert_eq!(args.input.set_values, vec!["paths.out-dir=results"]);
        assert!(!args.input.rebuild_background);
    }

    #[test]
    fn pdb_id_is_required() {
        assert!(Cli::try_parse_from(["interfacer", "analyze"]).is_err());
        assert!(Cli::try_parse_from(["interfacer", "background"]).is_err());
    }

    #[test]
    fn unknown_scope_is_rejected() {
        let result = Cli::try_parse_from([
            "interfacer",
            "analyze",
            "--pdb-id",
            "1ABC",
            "--scope",
            "galaxy",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() {
        let cli = Cli::parse_from([
            "interfacer",
            "background",
            "--pdb-id",
            "1ABC",
            "-j",
            "4",
            "--quiet",
        ]);
        assert_eq!(cli.threads, Some(4));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Background(_)));
    }
}

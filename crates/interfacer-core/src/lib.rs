//! # Interfacer Core Library
//!
//! Interface metrics and residue propensity scoring for protein complexes, computed from
//! the solvent-accessibility output of an external calculator (NACCESS-style `.int` delta
//! files and `.rsa` per-residue files).
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless data models (`DeltaAtomRecord`,
//!   `BackgroundFrequencyTable`, `InterfaceSummary`), line decoders, file discovery and CSV
//!   tables.
//!
//! - **[`engine`]: The Logic Core.** Configuration, the background cache store, progress
//!   reporting and the individual computation tasks.
//!
//! - **[`workflows`]: The Public API.** Runs a complete analysis for one identifier or a
//!   batch, writing the summary and propensity tables.
//!
//! ## Example
//!
//! ```no_run
//! use interfacer::engine::cache::CsvBackgroundStore;
//! use interfacer::engine::config::{AnalysisConfigBuilder, BackgroundScope};
//! use interfacer::engine::progress::ProgressReporter;
//! use interfacer::workflows::analyze;
//! use std::path::PathBuf;
//!
//! let config = AnalysisConfigBuilder::new()
//!     .source_dir(PathBuf::from("rsa"))
//!     .output_dir(PathBuf::from("interface"))
//!     .scope(BackgroundScope::Corpus)
//!     .build()?;
//! let store = CsvBackgroundStore::new(&config.cache_dir);
//! let report = analyze::run("1abc", &config, &store, &ProgressReporter::new())?;
//! println!("{} interface atoms", report.summary.total_atoms);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod engine;
pub mod workflows;

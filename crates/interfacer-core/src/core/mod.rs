//! # Core Module
//!
//! Stateless building blocks of the interface engine: the amino acid vocabulary, the
//! record types produced from accessibility files, and the file-level I/O that reads
//! those files and writes result tables.
//!
//! - **Data Models** ([`models`]) - Residues, delta records, background tables, reports
//! - **File I/O** ([`io`]) - Line decoders, file discovery, CSV tables
//! - **Utilities** ([`utils`]) - Residue classification and numeric helpers
//!
//! Nothing in this module keeps state between calls. Caching and orchestration live in
//! [`crate::engine`] and [`crate::workflows`].

pub mod io;
pub mod models;
pub mod utils;

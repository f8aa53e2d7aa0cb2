//! Computational steps of an interface analysis.
//!
//! Each submodule is one stage: reading delta records, resolving the background table,
//! summarizing the interface, and scoring residue propensities. The summary and
//! propensity stages are pure functions over in-memory records.

pub mod background;
pub mod delta_parsing;
pub mod propensity;
pub mod summary;

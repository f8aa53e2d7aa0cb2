//! # Core Models Module
//!
//! Plain data types shared by the parser, the calculators and the writers.
//!
//! - [`residue`] - The twenty standard amino acids and their classification
//! - [`record`] - Per-atom delta-accessibility records and the residue key used to count them
//! - [`background`] - Background surface frequency of each amino acid
//! - [`report`] - Interface summary and per-residue propensity results

pub mod background;
pub mod record;
pub mod report;
pub mod residue;

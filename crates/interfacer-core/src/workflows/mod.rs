//! # Workflows Module
//!
//! High-level entry points that run the engine end to end.
//!
//! - **Interface Analysis** ([`analyze`]) - Parse, score and write the result tables for one
//!   identifier or a batch of identifiers, isolating failures per identifier.
//! - **Background Resolution** ([`background`]) - Load or build the background frequency
//!   table on its own, without analysing an interface.

pub mod analyze;
pub mod background;

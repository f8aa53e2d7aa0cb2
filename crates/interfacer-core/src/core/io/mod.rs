//! Reading accessibility outputs and writing result tables.
//!
//! [`decoder`] turns individual text lines into typed records, [`discovery`] locates the
//! files to read, and [`tables`] serializes every CSV artifact the engine produces.

pub mod decoder;
pub mod discovery;
pub mod tables;

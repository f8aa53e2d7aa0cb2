pub mod analyze;
pub mod background;

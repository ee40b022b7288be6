//! CLI command implementations.

pub mod batch;
pub mod common;
pub mod convert;
pub mod effects;
pub mod info;
pub mod presets;

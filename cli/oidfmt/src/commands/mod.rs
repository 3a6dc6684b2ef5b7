//! CLI command implementations.

pub mod format;
pub mod notations;
pub mod parse;

//! CLI command implementations.

pub mod edit;
pub mod grid;
pub mod plan;

//! ELD trip planner CLI library.
//!
//! This crate provides the terminal interface for trip planning and
//! duty-log editing.

mod cli;
pub mod commands;
mod config;
pub mod render;
pub mod script;

pub use cli::{Cli, Commands};
pub use config::Config;

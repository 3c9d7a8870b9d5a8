//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// ELD trip planner.
///
/// Plans routes under DOT hours-of-service limits and renders the daily
/// record-of-duty-status grids, with manual per-hour overrides.
#[derive(Debug, Parser)]
#[command(name = "eld", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Plan a trip and generate its daily duty logs.
    Plan {
        /// Pickup location, free text (e.g. "Chicago, IL").
        #[arg(long)]
        pickup: String,

        /// Dropoff location, free text.
        #[arg(long)]
        dropoff: String,

        /// On-duty hours already used in the current 70-hour cycle.
        #[arg(long, default_value_t = 0.0)]
        cycle_used: f64,

        /// Calendar date of the first day (YYYY-MM-DD).
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Emit the trip result as JSON instead of a report.
        #[arg(long)]
        json: bool,
    },

    /// Render the duty grid for one day's aggregate hours.
    Grid {
        /// Day number shown on the grid.
        #[arg(long, default_value_t = 1)]
        day: u32,

        /// Driving hours.
        #[arg(long)]
        drive: f64,

        /// Total on-duty hours, driving included.
        #[arg(long)]
        on_duty: f64,

        /// Sleeper-berth rest hours.
        #[arg(long)]
        rest: f64,
    },

    /// Apply manual paint edits to a day and recompute its aggregates.
    Edit {
        /// Day number shown on the grid.
        #[arg(long, default_value_t = 1)]
        day: u32,

        /// Driving hours before editing.
        #[arg(long)]
        drive: f64,

        /// Total on-duty hours before editing, driving included.
        #[arg(long)]
        on_duty: f64,

        /// Sleeper-berth rest hours before editing.
        #[arg(long)]
        rest: f64,

        /// Paint stroke, e.g. `5=sleeper` or `14-17=driving`; repeatable.
        #[arg(long = "paint", value_name = "SPEC")]
        paints: Vec<String>,

        /// Emit the edited day as JSON instead of a report.
        #[arg(long)]
        json: bool,
    },
}

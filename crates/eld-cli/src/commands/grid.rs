//! Render the duty grid for one day's aggregate hours.

use std::io::Write;

use anyhow::Result;

use eld_core::{DailyLogRecord, DayLog};

use crate::render::{render_grid, render_record};

/// Distributes the aggregates over a fresh day and renders its grid.
///
/// The summary line shows the *derived* aggregates, so out-of-range input
/// reads back as what actually landed on the grid.
pub fn run<W: Write>(writer: &mut W, day: u32, drive: f64, on_duty: f64, rest: f64) -> Result<()> {
    let log = DayLog::new(DailyLogRecord::new(day, drive, on_duty, rest));

    writeln!(writer, "{}", render_record(&log.record()))?;
    writeln!(writer, "{}", render_grid(log.timeline()))?;
    Ok(())
}

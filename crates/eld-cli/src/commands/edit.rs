//! Apply manual paint edits to a day and recompute its aggregates.
//!
//! The terminal stand-in for the grid's press-and-drag editing: each
//! `--paint` spec replays as one gesture through the day controller, and
//! the recomputed aggregates come back out, exactly as the trip-planning
//! flow would observe them.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use anyhow::Result;

use eld_core::{DailyLogRecord, DayLog};

use crate::render::{render_aggregates, render_grid};
use crate::script::PaintStroke;

pub fn run<W: Write>(
    writer: &mut W,
    day: u32,
    drive: f64,
    on_duty: f64,
    rest: f64,
    paints: &[String],
    json: bool,
) -> Result<()> {
    let strokes = paints
        .iter()
        .map(|spec| spec.parse::<PaintStroke>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut log = DayLog::new(DailyLogRecord::new(day, drive, on_duty, rest));
    let changes = Rc::new(RefCell::new(0_usize));
    let counter = Rc::clone(&changes);
    log.set_on_change(move |_| *counter.borrow_mut() += 1);

    let before = log.record();
    for stroke in &strokes {
        stroke.apply(&mut log);
    }
    let after = log.record();
    let changes = *changes.borrow();
    tracing::debug!(day, changes, "applied paint strokes");

    if json {
        let value = serde_json::json!({
            "day": day,
            "before": before,
            "after": after,
            "slots_changed": changes,
            "timeline": log.timeline(),
        });
        writeln!(writer, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        writeln!(writer, "Day {day}")?;
        writeln!(writer, "  before: {}", render_aggregates(&before))?;
        writeln!(writer, "  after:  {}", render_aggregates(&after))?;
        writeln!(writer, "  slots changed: {changes}")?;
        writeln!(writer)?;
        writeln!(writer, "{}", render_grid(log.timeline()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    fn output(paints: &[&str], json: bool) -> String {
        let paints: Vec<String> = paints.iter().map(ToString::to_string).collect();
        let mut buffer = Vec::new();
        run(&mut buffer, 1, 8.0, 10.0, 10.0, &paints, json).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn single_paint_moves_one_hour() {
        assert_snapshot!(output(&["5=sleeper"], false), @r"
        Day 1
          before: drive 8h, on duty 10h, rest 10h
          after:  drive 7h, on duty 9h, rest 11h
          slots changed: 1

        Status                  0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15 16 17 18 19 20 21 22 23  Total
        Off Duty                .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  #  #  #  #      4
        Sleeper Berth           .  .  .  .  .  #  .  .  .  .  #  #  #  #  #  #  #  #  #  #  .  .  .  .     11
        Driving                 #  #  #  #  #  .  #  #  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .      7
        On Duty (Not Driving)   .  .  .  .  .  .  .  .  #  #  .  .  .  .  .  .  .  .  .  .  .  .  .  .      2
        ");
    }

    #[test]
    fn repainting_the_same_status_changes_nothing() {
        let out = output(&["0-7=driving"], false);
        assert!(out.contains("slots changed: 0"));
        assert!(out.contains("after:  drive 8h, on duty 10h, rest 10h"));
    }

    #[test]
    fn json_output_carries_the_full_day() {
        let out = output(&["20-23=driving"], true);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["day"], 1);
        assert_eq!(value["before"]["drive"], 8.0);
        assert_eq!(value["after"]["drive"], 12.0);
        assert_eq!(value["slots_changed"], 4);
        assert_eq!(value["timeline"].as_array().unwrap().len(), 24);
        assert_eq!(value["timeline"][23]["status"], "driving");
    }

    #[test]
    fn invalid_spec_is_an_error() {
        let paints = vec!["notaspec".to_string()];
        let mut buffer = Vec::new();
        let err = run(&mut buffer, 1, 8.0, 10.0, 10.0, &paints, false).unwrap_err();
        assert!(err.to_string().contains("invalid paint spec"));
    }
}

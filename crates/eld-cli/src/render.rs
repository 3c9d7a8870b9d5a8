//! Terminal rendering of the record-of-duty-status grid.
//!
//! Presentation only: the status display table and grid layout live here,
//! outside the core, and carry no semantics.

use std::fmt::Write as _;

use eld_core::{DailyLogRecord, DutyStatus, Timeline};

/// Display metadata for each duty status, in grid row order.
pub const STATUS_ROWS: [(DutyStatus, &str); 4] = [
    (DutyStatus::OffDuty, "Off Duty"),
    (DutyStatus::SleeperBerth, "Sleeper Berth"),
    (DutyStatus::Driving, "Driving"),
    (DutyStatus::OnDutyNotDriving, "On Duty (Not Driving)"),
];

/// Renders the 24-hour grid: one row per status, `#` where that status
/// holds the hour, with per-row hour totals.
#[must_use]
pub fn render_grid(timeline: &Timeline) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:<22}", "Status");
    for hour in 0..timeline.slots().len() {
        let _ = write!(out, "{hour:>3}");
    }
    let _ = write!(out, "{:>7}", "Total");

    for (status, label) in STATUS_ROWS {
        out.push('\n');
        let _ = write!(out, "{label:<22}");
        for slot in timeline.slots() {
            let mark = if slot.status == status { '#' } else { '.' };
            let _ = write!(out, "{mark:>3}");
        }
        let _ = write!(out, "{:>7}", timeline.count(status));
    }
    out
}

/// One-line aggregate summary without day or cycle metadata.
#[must_use]
pub fn render_aggregates(record: &DailyLogRecord) -> String {
    format!(
        "drive {}h, on duty {}h, rest {}h",
        record.drive, record.on_duty, record.rest
    )
}

/// Full one-line summary of a day record.
#[must_use]
pub fn render_record(record: &DailyLogRecord) -> String {
    format!(
        "Day {}: {} (cycle {} -> {})",
        record.day,
        render_aggregates(record),
        record.start_cycle_hour,
        record.end_cycle_hour
    )
}

#[cfg(test)]
mod tests {
    use eld_core::distribute;
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn grid_marks_each_status_in_its_row() {
        let grid = render_grid(&distribute(&DailyLogRecord::new(1, 8.0, 10.0, 10.0)));

        assert_snapshot!(grid, @r"
        Status                  0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15 16 17 18 19 20 21 22 23  Total
        Off Duty                .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  #  #  #  #      4
        Sleeper Berth           .  .  .  .  .  .  .  .  .  .  #  #  #  #  #  #  #  #  #  #  .  .  .  .     10
        Driving                 #  #  #  #  #  #  #  #  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .  .      8
        On Duty (Not Driving)   .  .  .  .  .  .  .  .  #  #  .  .  .  .  .  .  .  .  .  .  .  .  .  .      2
        ");
    }

    #[test]
    fn grid_row_totals_always_sum_to_24() {
        let grid = render_grid(&distribute(&DailyLogRecord::new(1, 11.0, 14.0, 10.0)));
        let totals: usize = grid
            .lines()
            .skip(1)
            .map(|line| {
                line.rsplit(' ')
                    .next()
                    .and_then(|total| total.parse::<usize>().ok())
                    .unwrap_or(0)
            })
            .sum();
        assert_eq!(totals, 24);
    }

    #[test]
    fn aggregates_render_whole_and_fractional_hours() {
        let record = DailyLogRecord::new(1, 8.0, 10.5, 10.0);
        assert_eq!(
            render_aggregates(&record),
            "drive 8h, on duty 10.5h, rest 10h"
        );
    }

    #[test]
    fn record_line_includes_day_and_cycle_metadata() {
        let record = DailyLogRecord {
            day: 2,
            drive: 11.0,
            on_duty: 14.0,
            rest: 10.0,
            start_cycle_hour: 14.0,
            end_cycle_hour: 39.0,
        };
        assert_eq!(
            render_record(&record),
            "Day 2: drive 11h, on duty 14h, rest 10h (cycle 14 -> 39)"
        );
    }

    #[test]
    fn status_rows_cover_every_status_in_rank_order() {
        assert_eq!(STATUS_ROWS.len(), DutyStatus::ALL.len());
        for ((status, _), expected) in STATUS_ROWS.iter().zip(DutyStatus::ALL) {
            assert_eq!(*status, expected);
        }
    }
}

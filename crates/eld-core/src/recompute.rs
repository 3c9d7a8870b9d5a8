//! Folds an edited timeline back into aggregate hours.

use crate::record::DailyLogRecord;
use crate::status::DutyStatus;
use crate::timeline::Timeline;

/// Derives a fresh [`DailyLogRecord`] from the current timeline.
///
/// `drive`, `on_duty` (driving included) and `rest` are recounted from the
/// slots; `day` and the cycle-hour metadata are copied unchanged from
/// `original`. Pure and total.
#[must_use]
pub fn recompute(timeline: &Timeline, original: &DailyLogRecord) -> DailyLogRecord {
    let driving = hours(timeline.count(DutyStatus::Driving));
    let non_driving = hours(timeline.count(DutyStatus::OnDutyNotDriving));
    let sleeper = hours(timeline.count(DutyStatus::SleeperBerth));

    DailyLogRecord {
        day: original.day,
        drive: driving,
        on_duty: driving + non_driving,
        rest: sleeper,
        start_cycle_hour: original.start_cycle_hour,
        end_cycle_hour: original.end_cycle_hour,
    }
}

fn hours(count: usize) -> f64 {
    // a count is at most 24, well inside f64's exact integer range
    #[expect(clippy::cast_precision_loss, reason = "count is bounded by 24")]
    let hours = count as f64;
    hours
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribute::distribute;

    #[expect(clippy::float_cmp, reason = "whole-hour counts compare exactly")]
    fn assert_aggregates(record: &DailyLogRecord, drive: f64, on_duty: f64, rest: f64) {
        assert_eq!(record.drive, drive);
        assert_eq!(record.on_duty, on_duty);
        assert_eq!(record.rest, rest);
    }

    #[test]
    fn roundtrips_a_well_formed_record() {
        // within the cap (on_duty - drive <= 3) and within the day
        let original = DailyLogRecord::new(3, 8.0, 10.0, 10.0);
        let derived = recompute(&distribute(&original), &original);
        assert_aggregates(&derived, 8.0, 10.0, 10.0);
        assert_eq!(derived.day, 3);
    }

    #[test]
    fn reflects_clamping_rather_than_the_original() {
        // on_duty - drive = 6 is capped to 3 by distribution
        let original = DailyLogRecord::new(1, 5.0, 11.0, 4.0);
        let derived = recompute(&distribute(&original), &original);
        assert_aggregates(&derived, 5.0, 8.0, 4.0);
    }

    #[test]
    fn counts_an_edited_timeline() {
        let original = DailyLogRecord::new(1, 8.0, 10.0, 10.0);
        let mut timeline = distribute(&original);
        timeline.set(0, DutyStatus::SleeperBerth);

        let derived = recompute(&timeline, &original);
        assert_aggregates(&derived, 7.0, 9.0, 11.0);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "metadata is copied verbatim")]
    fn copies_cycle_metadata_verbatim() {
        let original = DailyLogRecord {
            day: 4,
            drive: 0.0,
            on_duty: 0.0,
            rest: 0.0,
            start_cycle_hour: 39.5,
            end_cycle_hour: 63.25,
        };
        let derived = recompute(&Timeline::new(), &original);
        assert_eq!(derived.day, 4);
        assert_eq!(derived.start_cycle_hour, 39.5);
        assert_eq!(derived.end_cycle_hour, 63.25);
    }

    #[test]
    fn empty_timeline_derives_zero_hours() {
        let original = DailyLogRecord::new(1, 8.0, 10.0, 10.0);
        let derived = recompute(&Timeline::new(), &original);
        assert_aggregates(&derived, 0.0, 0.0, 0.0);
    }
}

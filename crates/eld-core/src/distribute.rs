//! Auto-fill of a day's timeline from aggregate hours.
//!
//! Expands a [`DailyLogRecord`] into the 24-slot [`Timeline`] the grid
//! renders and the user paints over. Deterministic and total: any numeric
//! input, including negative or oversized hour counts, produces a valid
//! fully-assigned timeline.

use crate::record::DailyLogRecord;
use crate::status::DutyStatus;
use crate::timeline::{HOURS_PER_DAY, Timeline};

/// Ceiling on auto-filled on-duty-not-driving time, in hours.
///
/// Models the regulatory limit on non-driving on-duty time within the
/// fill heuristic; it does not constrain manual edits.
pub const NON_DRIVE_CAP_HOURS: f64 = 3.0;

/// Expands aggregate hours into an ordered 24-slot timeline.
///
/// Fill order matters, earlier categories take the earlier hours:
///
/// 1. `Driving` for `drive` hours from hour 0
/// 2. `OnDutyNotDriving` for `min(on_duty - drive, 3)` hours
/// 3. `SleeperBerth` for `rest` hours
/// 4. everything left stays `OffDuty`
///
/// Each category is truncated silently once the day is full. A negative
/// non-driving balance (`on_duty < drive`) fills zero hours. Fractional
/// hours occupy whole slots, rounded up, since the timeline is hour-granular.
#[must_use]
pub fn distribute(record: &DailyLogRecord) -> Timeline {
    let mut timeline = Timeline::new();
    let mut hour = 0;

    fill(&mut timeline, &mut hour, slot_count(record.drive), DutyStatus::Driving);

    let extra_on_duty = record.on_duty - record.drive;
    // f64::min maps NaN to the cap; treat NaN as zero non-driving time
    let non_drive = if extra_on_duty.is_nan() {
        0.0
    } else {
        extra_on_duty.min(NON_DRIVE_CAP_HOURS)
    };
    fill(
        &mut timeline,
        &mut hour,
        slot_count(non_drive),
        DutyStatus::OnDutyNotDriving,
    );

    fill(&mut timeline, &mut hour, slot_count(record.rest), DutyStatus::SleeperBerth);

    tracing::debug!(
        day = record.day,
        driving = timeline.count(DutyStatus::Driving),
        on_duty = timeline.count(DutyStatus::OnDutyNotDriving),
        sleeper = timeline.count(DutyStatus::SleeperBerth),
        "distributed aggregate hours"
    );
    timeline
}

/// Whole slots occupied by an hour count. Non-positive and NaN inputs
/// occupy none; everything is capped at the length of the day.
fn slot_count(hours: f64) -> usize {
    if hours.is_nan() || hours <= 0.0 {
        return 0;
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is non-negative and capped at 24 right after the cast"
    )]
    let count = hours.ceil() as usize;
    count.min(HOURS_PER_DAY)
}

fn fill(timeline: &mut Timeline, hour: &mut usize, count: usize, status: DutyStatus) {
    let mut assigned = 0;
    while assigned < count && *hour < HOURS_PER_DAY {
        timeline.set(*hour, status);
        *hour += 1;
        assigned += 1;
    }
}

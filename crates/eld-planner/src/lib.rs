//! Hours-of-service trip schedule generation.
//!
//! Simulates a planned trip day by day under DOT hours-of-service limits and
//! emits the aggregate [`DailyLogRecord`]s the duty-log grid consumes. The
//! scheduler only *generates* plans; it never validates or blocks manual
//! edits to a day's log.
//!
//! # Algorithm summary
//!
//! 1. Cap total driving demand at the cycle limit
//! 2. Open with a 34-hour reset day when the cycle is already exhausted
//! 3. Simulate each day hour by hour: pickup/dropoff time, driving up to the
//!    daily limit, the DOT break once enough driving accumulates, fueling
//!    and inspection time from the leftover non-drive budget
//! 4. Insert a reset day whenever the running cycle usage exhausts mid-trip

use serde::Serialize;

use eld_core::DailyLogRecord;

/// DOT limits used by the scheduler.
#[derive(Debug, Clone)]
pub struct HosLimits {
    /// Rolling on-duty ceiling for the work cycle. Default: 70 hours.
    pub cycle_limit_hours: f64,

    /// Maximum driving time per day. Default: 11 hours.
    pub max_daily_drive_hours: f64,

    /// Maximum on-duty time per day, driving included. Default: 14 hours.
    pub max_daily_on_duty_hours: f64,

    /// Off-duty rest required after each driving day. Default: 10 hours.
    pub required_rest_hours: f64,

    /// Accumulated driving after which the DOT break is due. Default: 8 hours.
    pub break_after_drive_hours: f64,

    /// On-duty time booked per DOT break. The break itself is 30 minutes;
    /// the schedule books a whole slot-hour. Default: 1 hour.
    pub break_duration_hours: f64,

    /// Off-duty time that restarts an exhausted cycle. Default: 34 hours.
    pub cycle_reset_hours: f64,

    /// Non-driving on-duty budget per day (pickup, dropoff, breaks,
    /// fueling, inspection). Default: 3 hours.
    pub max_non_drive_hours: f64,
}

impl Default for HosLimits {
    fn default() -> Self {
        Self {
            cycle_limit_hours: 70.0,
            max_daily_drive_hours: 11.0,
            max_daily_on_duty_hours: 14.0,
            required_rest_hours: 10.0,
            break_after_drive_hours: 8.0,
            break_duration_hours: 1.0,
            cycle_reset_hours: 34.0,
            max_non_drive_hours: 3.0,
        }
    }
}

/// One scheduled day of the trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    /// The aggregate record handed to the duty-log grid.
    #[serde(flatten)]
    pub record: DailyLogRecord,

    /// Number of DOT breaks taken while driving.
    pub breaks: u32,

    /// Whether this day is a 34-hour cycle reset rather than a driving day.
    pub cycle_reset: bool,
}

/// Generates the day-by-day schedule for a trip.
///
/// `duration_hours` is the route's total driving time; `cycle_hours_used`
/// is the on-duty time already spent in the current cycle. Returns one
/// [`DayPlan`] per day, reset days included, in trip order. Cycle-hour
/// bookkeeping is threaded through each record's `start_cycle_hour` /
/// `end_cycle_hour`.
#[must_use]
pub fn plan_schedule(
    duration_hours: f64,
    cycle_hours_used: f64,
    limits: &HosLimits,
) -> Vec<DayPlan> {
    let mut plans = Vec::new();
    // NaN demand schedules nothing rather than a full cycle
    let mut hours_remaining = if duration_hours.is_nan() {
        0.0
    } else {
        duration_hours.min(limits.cycle_limit_hours)
    };

    let mut day: u32 = 0;
    let mut cycle_hour = cycle_hours_used;
    let mut cycle_used = cycle_hours_used;
    let mut drive_since_break = 0.0;

    if cycle_used >= limits.cycle_limit_hours {
        day += 1;
        plans.push(reset_day(day, cycle_hour, limits));
        cycle_hour += limits.cycle_reset_hours;
        cycle_used = 0.0;
    }

    let first_driving_day = day + 1;

    while hours_remaining > 0.0 {
        day += 1;
        let start_cycle_hour = cycle_hour;
        let mut drive_today = 0.0;
        let mut non_drive = 0.0;
        let mut breaks: u32 = 0;

        if day == first_driving_day {
            non_drive += 1.0; // pickup
        }
        if hours_remaining <= limits.max_daily_drive_hours {
            non_drive += 1.0; // dropoff
        }

        // Drive hour by hour until the daily limit, the demand, or the
        // non-drive budget runs out.
        while drive_today < limits.max_daily_drive_hours && hours_remaining > 0.0 {
            if drive_since_break >= limits.break_after_drive_hours {
                breaks += 1;
                let break_time = limits
                    .break_duration_hours
                    .min(limits.max_non_drive_hours - non_drive);
                non_drive += break_time;
                cycle_hour += break_time;
                drive_since_break = 0.0;
            }
            if non_drive >= limits.max_non_drive_hours {
                break;
            }
            drive_today += 1.0;
            drive_since_break += 1.0;
            hours_remaining -= 1.0;
            cycle_hour += 1.0;
        }

        // Fueling and inspection consume whatever non-drive budget is left.
        let remaining_non_drive = limits.max_non_drive_hours - non_drive;
        if remaining_non_drive > 0.0 {
            non_drive += remaining_non_drive;
            cycle_hour += remaining_non_drive;
        }

        let on_duty = (drive_today + non_drive).min(limits.max_daily_on_duty_hours);

        plans.push(DayPlan {
            record: DailyLogRecord {
                day,
                drive: drive_today,
                on_duty,
                rest: limits.required_rest_hours,
                start_cycle_hour,
                end_cycle_hour: cycle_hour + limits.required_rest_hours,
            },
            breaks,
            cycle_reset: false,
        });

        cycle_hour += limits.required_rest_hours;
        cycle_used += on_duty;
        drive_since_break = 0.0;

        if cycle_used >= limits.cycle_limit_hours && hours_remaining > 0.0 {
            day += 1;
            plans.push(reset_day(day, cycle_hour, limits));
            cycle_hour += limits.cycle_reset_hours;
            cycle_used = 0.0;
        }
    }

    tracing::debug!(
        days = plans.len(),
        duration_hours,
        cycle_hours_used,
        "planned trip schedule"
    );
    plans
}

fn reset_day(day: u32, cycle_hour: f64, limits: &HosLimits) -> DayPlan {
    DayPlan {
        record: DailyLogRecord {
            day,
            drive: 0.0,
            on_duty: 0.0,
            rest: limits.cycle_reset_hours,
            start_cycle_hour: cycle_hour,
            end_cycle_hour: cycle_hour + limits.cycle_reset_hours,
        },
        breaks: 0,
        cycle_reset: true,
    }
}

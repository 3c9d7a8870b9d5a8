//! The aggregate day record exchanged with the trip-planning flow.

use serde::{Deserialize, Serialize};

/// One day's duty hours in aggregate form.
///
/// This is the shape the trip planner produces and consumes: `on_duty` is
/// total on-duty time *including* driving, so `drive <= on_duty` in any
/// well-formed record (malformed records are still accepted; see
/// [`crate::distribute`]). `start_cycle_hour` and `end_cycle_hour` are opaque
/// cycle bookkeeping carried through unchanged; the core never inspects
/// them except to re-attach them to a derived record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLogRecord {
    pub day: u32,
    pub drive: f64,
    pub on_duty: f64,
    pub rest: f64,
    pub start_cycle_hour: f64,
    pub end_cycle_hour: f64,
}

impl DailyLogRecord {
    /// Convenience constructor for a record with zeroed cycle metadata.
    #[must_use]
    pub const fn new(day: u32, drive: f64, on_duty: f64, rest: f64) -> Self {
        Self {
            day,
            drive,
            on_duty,
            rest,
            start_cycle_hour: 0.0,
            end_cycle_hour: 0.0,
        }
    }
}

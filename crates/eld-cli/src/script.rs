//! Paint-stroke specs: the CLI stand-in for pointer gestures.
//!
//! A spec like `5=sleeper` or `14-17=driving` replays as one gesture:
//! press on the first hour, hover across the rest, then a release.

use std::str::FromStr;

use thiserror::Error;

use eld_core::{DayLog, DutyStatus, UnknownDutyStatus};

/// Paint spec parse errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    /// The spec did not split into hours and a status.
    #[error("invalid paint spec `{spec}`: expected HOUR=STATUS or START-END=STATUS")]
    Malformed { spec: String },

    /// An hour was not a number in the grid range.
    #[error("invalid hour `{value}` in `{spec}`: hours run 0-23")]
    HourOutOfRange { spec: String, value: String },

    /// The range ran backwards.
    #[error("hours are reversed in `{spec}`: start must not be after end")]
    ReversedRange { spec: String },

    /// The status was not one of the four duty statuses.
    #[error("unknown duty status in `{spec}`: {source}")]
    Status {
        spec: String,
        #[source]
        source: UnknownDutyStatus,
    },
}

/// One parsed stroke: an inclusive hour range painted with a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintStroke {
    pub start: usize,
    pub end: usize,
    pub status: DutyStatus,
}

impl PaintStroke {
    /// Replays the stroke through the controller as one gesture.
    pub fn apply(&self, log: &mut DayLog) {
        log.press(self.start, self.status);
        for hour in (self.start + 1)..=self.end {
            log.hover(hour);
        }
        log.release();
    }
}

impl FromStr for PaintStroke {
    type Err = ScriptError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let (hours, status) = spec.split_once('=').ok_or_else(|| ScriptError::Malformed {
            spec: spec.to_string(),
        })?;

        let status: DutyStatus = status.parse().map_err(|source| ScriptError::Status {
            spec: spec.to_string(),
            source,
        })?;

        let (start, end) = match hours.split_once('-') {
            Some((start, end)) => (parse_hour(spec, start)?, parse_hour(spec, end)?),
            None => {
                let hour = parse_hour(spec, hours)?;
                (hour, hour)
            }
        };
        if start > end {
            return Err(ScriptError::ReversedRange {
                spec: spec.to_string(),
            });
        }

        Ok(Self { start, end, status })
    }
}

fn parse_hour(spec: &str, value: &str) -> Result<usize, ScriptError> {
    let out_of_range = || ScriptError::HourOutOfRange {
        spec: spec.to_string(),
        value: value.to_string(),
    };
    let hour: usize = value.trim().parse().map_err(|_| out_of_range())?;
    if hour > 23 {
        return Err(out_of_range());
    }
    Ok(hour)
}

#[cfg(test)]
mod tests {
    use eld_core::DailyLogRecord;

    use super::*;

    #[test]
    fn single_hour_spec_parses() {
        let stroke: PaintStroke = "5=sleeper".parse().unwrap();
        assert_eq!(
            stroke,
            PaintStroke {
                start: 5,
                end: 5,
                status: DutyStatus::SleeperBerth
            }
        );
    }

    #[test]
    fn range_spec_parses() {
        let stroke: PaintStroke = "14-17=driving".parse().unwrap();
        assert_eq!(stroke.start, 14);
        assert_eq!(stroke.end, 17);
        assert_eq!(stroke.status, DutyStatus::Driving);
    }

    #[test]
    fn missing_equals_is_malformed() {
        let err = "5sleeper".parse::<PaintStroke>().unwrap_err();
        assert!(matches!(err, ScriptError::Malformed { .. }));
    }

    #[test]
    fn hour_past_the_grid_is_rejected() {
        let err = "24=driving".parse::<PaintStroke>().unwrap_err();
        assert!(matches!(err, ScriptError::HourOutOfRange { .. }));

        let err = "x=driving".parse::<PaintStroke>().unwrap_err();
        assert!(matches!(err, ScriptError::HourOutOfRange { .. }));
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = "17-14=driving".parse::<PaintStroke>().unwrap_err();
        assert_eq!(
            err,
            ScriptError::ReversedRange {
                spec: "17-14=driving".to_string()
            }
        );
    }

    #[test]
    fn unknown_status_is_rejected_with_the_source() {
        let err = "5=parked".parse::<PaintStroke>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown duty status in `5=parked`: unknown duty status: parked"
        );
    }

    #[test]
    fn apply_paints_the_whole_range_as_one_gesture() {
        let mut log = DayLog::new(DailyLogRecord::new(1, 8.0, 10.0, 10.0));
        let stroke: PaintStroke = "20-23=sleeper".parse().unwrap();

        stroke.apply(&mut log);

        for hour in 20..=23 {
            assert_eq!(log.timeline().status_at(hour), Some(DutyStatus::SleeperBerth));
        }
        // the gesture released: a stray hover paints nothing
        log.hover(0);
        assert_eq!(log.timeline().status_at(0), Some(DutyStatus::Driving));
    }
}

//! The 24-slot hourly timeline, the authoritative representation of a day.

use serde::Serialize;

use crate::status::DutyStatus;

/// Number of slots in a day. Hour 0 is midnight.
pub const HOURS_PER_DAY: usize = 24;

/// One hour of the day and the duty status assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub hour: u8,
    pub status: DutyStatus,
}

/// Exactly 24 [`TimeSlot`]s, hour `i` at index `i`. No hour is ever
/// unassigned, so the per-status counts always sum to 24.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    slots: [TimeSlot; HOURS_PER_DAY],
}

impl Timeline {
    /// A fresh timeline with every hour off duty.
    #[must_use]
    pub fn new() -> Self {
        let mut slots = [TimeSlot {
            hour: 0,
            status: DutyStatus::OffDuty,
        }; HOURS_PER_DAY];
        let mut hour: u8 = 0;
        for slot in &mut slots {
            slot.hour = hour;
            hour += 1;
        }
        Self { slots }
    }

    #[must_use]
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Status of the given hour, or `None` outside the grid.
    #[must_use]
    pub fn status_at(&self, hour: usize) -> Option<DutyStatus> {
        self.slots.get(hour).map(|slot| slot.status)
    }

    /// Assigns `status` to `hour`, last write wins.
    ///
    /// Returns whether the slot actually changed. Writes outside the grid and
    /// writes of the status already present are discarded, never errors.
    pub fn set(&mut self, hour: usize, status: DutyStatus) -> bool {
        let Some(slot) = self.slots.get_mut(hour) else {
            tracing::warn!(hour, %status, "discarding write outside the 24-hour grid");
            return false;
        };
        if slot.status == status {
            return false;
        }
        slot.status = status;
        true
    }

    /// Number of hours currently assigned the given status.
    #[must_use]
    pub fn count(&self, status: DutyStatus) -> usize {
        self.slots.iter().filter(|slot| slot.status == status).count()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

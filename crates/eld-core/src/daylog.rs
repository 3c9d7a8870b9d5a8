//! Orchestration of one day's log: timeline ownership, gesture handling,
//! recomputation and change notification.

use crate::distribute::distribute;
use crate::gesture::{PaintGesture, SlotEdit};
use crate::record::DailyLogRecord;
use crate::recompute::recompute;
use crate::status::DutyStatus;
use crate::timeline::Timeline;

type ChangeListener = Box<dyn FnMut(&DailyLogRecord)>;

/// Controller for a single day's record of duty status.
///
/// Owns the authoritative [`Timeline`] for that day. The incoming
/// [`DailyLogRecord`] seeds the timeline once per distinct record; after the
/// first manual edit, every aggregate shown downstream is derived from the
/// timeline, never from the original input.
///
/// Mutations and notifications are serialized: the listener runs strictly
/// after a slot changes and strictly before the next event is processed.
/// The listener receives only the derived record, so it cannot reach back
/// into the controller mid-notification and reset the timeline under an
/// in-flight gesture.
pub struct DayLog {
    seed: DailyLogRecord,
    timeline: Timeline,
    gesture: PaintGesture,
    on_change: Option<ChangeListener>,
}

impl std::fmt::Debug for DayLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DayLog")
            .field("seed", &self.seed)
            .field("timeline", &self.timeline)
            .field("gesture", &self.gesture)
            .field("on_change", &self.on_change.as_ref().map(|_| ".."))
            .finish()
    }
}

impl DayLog {
    /// Seeds a controller from the trip planner's record for one day.
    #[must_use]
    pub fn new(record: DailyLogRecord) -> Self {
        let timeline = distribute(&record);
        Self {
            seed: record,
            timeline,
            gesture: PaintGesture::new(),
            on_change: None,
        }
    }

    /// Registers the change listener invoked once per applied slot mutation.
    ///
    /// Absence of a listener is a valid configuration; mutations then simply
    /// go unannounced.
    pub fn set_on_change(&mut self, listener: impl FnMut(&DailyLogRecord) + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    /// Replaces the day with a newly arrived external record.
    ///
    /// Any record that differs from the currently held seed (a different
    /// day, or new aggregates for the same day) rebuilds the timeline from
    /// scratch and discards prior manual edits. Redelivering the identical
    /// record is a no-op. An in-flight gesture ends with the timeline it was
    /// painting.
    pub fn set_record(&mut self, record: DailyLogRecord) {
        if record == self.seed {
            tracing::trace!(day = record.day, "ignoring redelivered record");
            return;
        }
        tracing::debug!(day = record.day, "rebuilding timeline from new record");
        self.timeline = distribute(&record);
        self.seed = record;
        self.gesture.release();
    }

    /// The current timeline, read-only for rendering.
    #[must_use]
    pub const fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Day number of the record currently held.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.seed.day
    }

    /// The aggregate record derived from the current timeline.
    #[must_use]
    pub fn record(&self) -> DailyLogRecord {
        recompute(&self.timeline, &self.seed)
    }

    /// Pointer press on an hour cell with the selected brush status.
    pub fn press(&mut self, hour: usize, status: DutyStatus) {
        let edit = self.gesture.press(hour, status);
        self.apply(edit);
    }

    /// Pointer entering an hour cell; paints only while a press is held.
    pub fn hover(&mut self, hour: usize) {
        if let Some(edit) = self.gesture.hover(hour) {
            self.apply(edit);
        }
    }

    /// Global pointer release, ending the gesture wherever the pointer is.
    pub fn release(&mut self) {
        self.gesture.release();
    }

    /// Applies one yielded edit: mutate, recompute, notify, in that order.
    ///
    /// Edits that leave the slot as it was (repeat hovers, out-of-grid
    /// hours) are dropped before recomputation, so the listener observes
    /// exactly one notification per actual slot change.
    fn apply(&mut self, edit: SlotEdit) {
        if !self.timeline.set(edit.hour, edit.status) {
            return;
        }
        tracing::debug!(hour = edit.hour, status = %edit.status, "slot painted");
        let derived = recompute(&self.timeline, &self.seed);
        if let Some(listener) = self.on_change.as_mut() {
            listener(&derived);
        }
    }
}

use crate::{day::DayCode, slot::TimeSlot};
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Availability flags for the slots of one day
pub type SlotFlags = BTreeMap<TimeSlot, bool>;

/// A tutor's weekly availability: day code → slot label → free flag. Keys are
/// typed, so a schedule can only ever mention known days and known slots, and
/// iteration runs in week/slot order. Stored as a JSON column on the teacher
/// row.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult,
)]
pub struct WeekSchedule(pub BTreeMap<DayCode, SlotFlags>);

impl WeekSchedule {
    /// Slots flagged free on the given day, in slot order
    pub fn free_slots(&self, day: DayCode) -> Vec<TimeSlot> {
        self.0
            .get(&day)
            .map(|flags| {
                flags
                    .iter()
                    .filter(|(_, free)| **free)
                    .map(|(slot, _)| *slot)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Days present in the schedule with their free slots, in week order
    pub fn days(&self) -> impl Iterator<Item = (DayCode, Vec<TimeSlot>)> + '_ {
        self.0.keys().map(|day| (*day, self.free_slots(*day)))
    }

    pub fn is_free(&self, day: DayCode, slot: TimeSlot) -> bool {
        self.0
            .get(&day)
            .and_then(|flags| flags.get(&slot))
            .copied()
            .unwrap_or(false)
    }
}

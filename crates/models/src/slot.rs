use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

/// A lesson start time within a day. Tutors declare availability and clients
/// book lessons only on this fixed grid of labels.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum TimeSlot {
    #[serde(rename = "8:00")]
    #[strum(serialize = "8:00")]
    Eight,
    #[serde(rename = "10:00")]
    #[strum(serialize = "10:00")]
    Ten,
    #[serde(rename = "12:00")]
    #[strum(serialize = "12:00")]
    Twelve,
    #[serde(rename = "14:00")]
    #[strum(serialize = "14:00")]
    Fourteen,
    #[serde(rename = "16:00")]
    #[strum(serialize = "16:00")]
    Sixteen,
    #[serde(rename = "18:00")]
    #[strum(serialize = "18:00")]
    Eighteen,
    #[serde(rename = "20:00")]
    #[strum(serialize = "20:00")]
    Twenty,
    #[serde(rename = "22:00")]
    #[strum(serialize = "22:00")]
    TwentyTwo,
}

impl TimeSlot {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn all() -> Vec<TimeSlot> {
        TimeSlot::iter().collect()
    }
}

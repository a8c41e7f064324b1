use serde::Serialize;
use strum::{AsRefStr, EnumIter, EnumProperty, EnumString, IntoEnumIterator};

/// How much time per week a client wants to spend on lessons. The short code
/// travels through the request form; the label is what gets persisted and
/// shown back to the user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, EnumIter, AsRefStr, EnumProperty,
)]
pub enum StudyTime {
    #[strum(serialize = "1-3", props(label = "1-3 часа в неделю"))]
    OneToThree,
    #[strum(serialize = "3-5", props(label = "3-5 часов в неделю"))]
    ThreeToFive,
    #[strum(serialize = "5-7", props(label = "5-7 часов в неделю"))]
    FiveToSeven,
    #[strum(serialize = "7-10", props(label = "7-10 часов в неделю"))]
    SevenToTen,
}

impl StudyTime {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn label(&self) -> &'static str {
        self.get_str("label").unwrap_or_default()
    }

    pub fn all() -> Vec<StudyTime> {
        StudyTime::iter().collect()
    }
}

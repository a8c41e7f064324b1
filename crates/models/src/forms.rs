use crate::{day::DayCode, slot::TimeSlot, study_time::StudyTime};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

lazy_static! {
    static ref PHONE: Regex = Regex::new(r"^\+?[\d\s\-()]{7,20}$").unwrap();
}

/// A phone number is an optional leading `+` followed by digits, spaces,
/// dashes or parentheses, carrying 7 to 15 digits in total.
pub fn is_valid_phone(raw: &str) -> bool {
    let raw = raw.trim();
    if !PHONE.is_match(raw) {
        return false;
    }
    let digits = raw.chars().filter(|c| c.is_ascii_digit()).count();
    (7..=15).contains(&digits)
}

/// Per-field validation messages for re-rendering a form. Empty means the
/// submission passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub goal: Option<String>,
    pub time: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.goal.is_none() && self.time.is_none()
    }
}

fn checked_name(raw: &str, errors: &mut FormErrors) -> Option<String> {
    let name = raw.trim();
    if name.is_empty() {
        errors.name = Some("Укажите ваше имя".to_string());
        None
    } else {
        Some(name.to_string())
    }
}

fn checked_phone(raw: &str, errors: &mut FormErrors) -> Option<String> {
    let phone = raw.trim();
    if is_valid_phone(phone) {
        Some(phone.to_string())
    } else {
        errors.phone = Some("Укажите телефон в формате +7 (900) 123-45-67".to_string());
        None
    }
}

/// Raw fields of the "find me a tutor" form. Every field defaults to an empty
/// string so a missing input turns into a field error instead of a rejected
/// request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub time: String,
}

/// A validated tutor-matching request, ready to persist
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSubmission {
    pub name: String,
    pub phone: String,
    pub goal_id: i32,
    pub study_time: StudyTime,
}

impl RequestFormData {
    /// Checks every field and either yields a submission or the full set of
    /// field errors. Whether `goal_id` points at a real goal is for the
    /// caller to decide against the database.
    pub fn validate(&self) -> Result<RequestSubmission, FormErrors> {
        let mut errors = FormErrors::default();

        let name = checked_name(&self.name, &mut errors);
        let phone = checked_phone(&self.phone, &mut errors);

        let goal_id = match self.goal.trim().parse::<i32>() {
            Ok(id) => Some(id),
            Err(_) => {
                errors.goal = Some("Выберите цель занятий".to_string());
                None
            }
        };

        let study_time = match StudyTime::from_str(self.time.trim()) {
            Ok(time) => Some(time),
            Err(_) => {
                errors.time = Some("Выберите, сколько времени вы готовы заниматься".to_string());
                None
            }
        };

        match (name, phone, goal_id, study_time) {
            (Some(name), Some(phone), Some(goal_id), Some(study_time)) => Ok(RequestSubmission {
                name,
                phone,
                goal_id,
                study_time,
            }),
            _ => Err(errors),
        }
    }
}

/// Raw fields of the lesson booking form. `teacher_id`, `weekday` and `time`
/// are hidden inputs filled in by the booking page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub teacher_id: String,
    #[serde(default)]
    pub weekday: String,
    #[serde(default)]
    pub time: String,
}

/// The hidden booking target, parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRefs {
    pub teacher_id: i32,
    pub day: DayCode,
    pub slot: TimeSlot,
}

/// A validated lesson booking, ready to persist
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSubmission {
    pub name: String,
    pub phone: String,
    pub teacher_id: i32,
    pub day: DayCode,
    pub slot: TimeSlot,
}

/// Why a booking form was not accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingFormIssue {
    /// Typed fields failed; the form can be re-rendered with messages
    Invalid(FormErrors),
    /// The hidden target fields do not parse; retyping cannot fix this
    BrokenReference,
}

impl BookingFormData {
    pub fn refs(&self) -> Option<BookingRefs> {
        let teacher_id = self.teacher_id.trim().parse::<i32>().ok()?;
        let day = DayCode::from_str(self.weekday.trim()).ok()?;
        let slot = TimeSlot::from_str(self.time.trim()).ok()?;
        Some(BookingRefs {
            teacher_id,
            day,
            slot,
        })
    }

    /// Hidden fields are re-validated on submission no matter what the
    /// booking page put into them.
    pub fn validate(&self) -> Result<BookingSubmission, BookingFormIssue> {
        let refs = match self.refs() {
            Some(refs) => refs,
            None => return Err(BookingFormIssue::BrokenReference),
        };

        let mut errors = FormErrors::default();
        let name = checked_name(&self.name, &mut errors);
        let phone = checked_phone(&self.phone, &mut errors);

        match (name, phone) {
            (Some(name), Some(phone)) => Ok(BookingSubmission {
                name,
                phone,
                teacher_id: refs.teacher_id,
                day: refs.day,
                slot: refs.slot,
            }),
            _ => Err(BookingFormIssue::Invalid(errors)),
        }
    }
}

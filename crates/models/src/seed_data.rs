use crate::{availability::WeekSchedule, day::DayCode};
use serde::Deserialize;
use std::collections::BTreeMap;

const FIXTURE: &str = include_str!("../data/fixture.json");

/// Everything the catalog starts out with: the week, the study goals and the
/// tutors with their availability grids.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedCatalog {
    pub weekdays: BTreeMap<DayCode, String>,
    pub goals: Vec<GoalSeed>,
    pub teachers: Vec<TeacherSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoalSeed {
    pub id: i32,
    pub name: String,
    pub ru_name: String,
    pub pictogram: String,
}

/// A tutor profile as shipped in the fixture. `goals` holds goal names which
/// are resolved to rows when the catalog is seeded.
#[derive(Debug, Clone, Deserialize)]
pub struct TeacherSeed {
    pub id: i32,
    pub name: String,
    pub about: String,
    pub rating: f64,
    pub picture: String,
    pub price: i32,
    pub goals: Vec<String>,
    pub free: WeekSchedule,
}

/// Parses the bundled fixture
pub fn catalog() -> Result<SeedCatalog, serde_json::Error> {
    serde_json::from_str(FIXTURE)
}

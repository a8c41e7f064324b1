use serde::Serialize;

/// One row of the profile schedule. Days without a single free slot are not
/// rendered at all.
#[derive(Debug, Serialize)]
pub struct FreeDay {
    pub code: String,
    pub ru_name: String,
    pub slots: Vec<String>,
}

/// An option of the catalog sort selector
#[derive(Debug, Serialize)]
pub struct SortOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// A goal radio button on the request form
#[derive(Debug, Serialize)]
pub struct GoalChoice {
    pub id: i32,
    pub label: String,
    pub checked: bool,
}

/// A study time radio button on the request form
#[derive(Debug, Serialize)]
pub struct TimeChoice {
    pub value: String,
    pub label: String,
    pub checked: bool,
}

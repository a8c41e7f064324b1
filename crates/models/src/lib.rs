pub mod availability;
pub mod day;
pub mod forms;
pub mod seed_data;
pub mod slot;
pub mod sort;
pub mod study_time;

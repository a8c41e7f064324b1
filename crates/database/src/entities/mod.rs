pub mod booking;
pub mod goal;
pub mod lesson_request;
pub mod teacher;
pub mod teacher_goal;
pub mod weekday;

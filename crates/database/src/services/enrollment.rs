use crate::entities::{booking, lesson_request};
use chrono::Utc;
use models::forms::{BookingSubmission, RequestSubmission};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr};

pub struct EnrollmentService;

impl EnrollmentService {
    /// Stores a tutor-matching request. The study time is kept as its
    /// human-readable label, the way operators read it back.
    pub async fn create_request(
        db: &DatabaseConnection,
        submission: &RequestSubmission,
    ) -> Result<lesson_request::Model, DbErr> {
        lesson_request::ActiveModel {
            name: Set(submission.name.clone()),
            phone: Set(submission.phone.clone()),
            goal_id: Set(submission.goal_id),
            time: Set(submission.study_time.label().to_owned()),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Stores a trial lesson booking
    pub async fn create_booking(
        db: &DatabaseConnection,
        submission: &BookingSubmission,
    ) -> Result<booking::Model, DbErr> {
        booking::ActiveModel {
            name: Set(submission.name.clone()),
            phone: Set(submission.phone.clone()),
            teacher_id: Set(submission.teacher_id),
            day_short_name: Set(submission.day.as_str().to_owned()),
            time: Set(submission.slot.as_str().to_owned()),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(db)
        .await
    }
}

use crate::{error::AppError, state::AppState, templates};
use axum::{
    Form,
    extract::{Path, State},
    response::Html,
};
use database::{
    entities::teacher,
    services::{catalog::CatalogService, enrollment::EnrollmentService},
};
use models::{
    day::DayCode,
    forms::{BookingFormData, BookingFormIssue, FormErrors},
    slot::TimeSlot,
};
use std::str::FromStr;
use tera::Context;

fn booking_page(
    teacher: &teacher::Model,
    day_name: &str,
    day: DayCode,
    slot: TimeSlot,
    form: &BookingFormData,
    errors: &FormErrors,
) -> Result<Html<String>, AppError> {
    let mut context = Context::new();
    context.insert("teacher", teacher);
    context.insert("day_code", day.as_str());
    context.insert("day_name", day_name);
    context.insert("slot", slot.as_str());
    context.insert("form", form);
    context.insert("errors", errors);
    templates::render("booking.html", &context)
}

async fn target_day_name(state: &AppState, day: DayCode) -> Result<String, AppError> {
    let weekday = CatalogService::get_weekday(&state.db, day.as_str())
        .await?
        .ok_or(AppError::NotFound("weekday"))?;
    Ok(weekday.ru_name)
}

/// Booking page for one teacher, day and hour. Only hours the teacher marked
/// free can be opened.
pub async fn booking_form(
    State(state): State<AppState>,
    Path((teacher_id, weekday, time)): Path<(i32, String, String)>,
) -> Result<Html<String>, AppError> {
    let day = DayCode::from_str(&weekday).map_err(|_| AppError::NotFound("weekday"))?;
    let slot = TimeSlot::from_str(&time).map_err(|_| AppError::NotFound("time slot"))?;

    let teacher = CatalogService::get_teacher(&state.db, teacher_id)
        .await?
        .ok_or(AppError::NotFound("teacher"))?;
    if !teacher.free.is_free(day, slot) {
        return Err(AppError::NotFound("free slot"));
    }

    let day_name = target_day_name(&state, day).await?;
    booking_page(
        &teacher,
        &day_name,
        day,
        slot,
        &BookingFormData::default(),
        &FormErrors::default(),
    )
}

/// Accepts the booking form. The hidden target fields are re-validated on
/// every submit; a broken target gets the 404 page since retyping cannot fix
/// it, while name and phone problems re-render the form.
pub async fn booking_done(
    State(state): State<AppState>,
    Form(form): Form<BookingFormData>,
) -> Result<Html<String>, AppError> {
    let submission = match form.validate() {
        Ok(submission) => submission,
        Err(BookingFormIssue::BrokenReference) => {
            return Err(AppError::NotFound("booking target"));
        }
        Err(BookingFormIssue::Invalid(errors)) => {
            let refs = form.refs().ok_or(AppError::NotFound("booking target"))?;
            let teacher = CatalogService::get_teacher(&state.db, refs.teacher_id)
                .await?
                .ok_or(AppError::NotFound("teacher"))?;
            let day_name = target_day_name(&state, refs.day).await?;
            return booking_page(&teacher, &day_name, refs.day, refs.slot, &form, &errors);
        }
    };

    let teacher = CatalogService::get_teacher(&state.db, submission.teacher_id)
        .await?
        .ok_or(AppError::NotFound("teacher"))?;
    let day_name = target_day_name(&state, submission.day).await?;

    EnrollmentService::create_booking(&state.db, &submission).await?;

    let mut context = Context::new();
    context.insert("teacher", &teacher);
    context.insert("day_name", &day_name);
    context.insert("slot", submission.slot.as_str());
    context.insert("name", &submission.name);
    context.insert("phone", &submission.phone);
    templates::render("booking_done.html", &context)
}

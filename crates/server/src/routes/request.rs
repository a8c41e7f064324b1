use crate::{
    dtos::view::{GoalChoice, TimeChoice},
    error::AppError,
    state::AppState,
    templates,
};
use axum::{Form, extract::State, response::Html};
use database::{
    entities::goal,
    services::{catalog::CatalogService, enrollment::EnrollmentService},
};
use models::{
    forms::{FormErrors, RequestFormData},
    study_time::StudyTime,
};
use tera::Context;

fn request_page(
    goals: &[goal::Model],
    form: &RequestFormData,
    errors: &FormErrors,
) -> Result<Html<String>, AppError> {
    let goal_choices: Vec<GoalChoice> = goals
        .iter()
        .map(|g| GoalChoice {
            id: g.id,
            label: g.ru_name.clone(),
            checked: form.goal.trim() == g.id.to_string(),
        })
        .collect();

    let time_choices: Vec<TimeChoice> = StudyTime::all()
        .into_iter()
        .map(|time| TimeChoice {
            value: time.as_str().to_owned(),
            label: time.label().to_owned(),
            checked: form.time.trim() == time.as_str(),
        })
        .collect();

    let mut context = Context::new();
    context.insert("goal_choices", &goal_choices);
    context.insert("time_choices", &time_choices);
    context.insert("form", form);
    context.insert("errors", errors);
    templates::render("request.html", &context)
}

/// The "find me a tutor" form
pub async fn request_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let goals = CatalogService::list_goals(&state.db).await?;
    request_page(&goals, &RequestFormData::default(), &FormErrors::default())
}

/// Accepts the request form. Bad input re-renders the form with messages and
/// keeps what the user typed; good input is stored and confirmed.
pub async fn request_done(
    State(state): State<AppState>,
    Form(form): Form<RequestFormData>,
) -> Result<Html<String>, AppError> {
    let goals = CatalogService::list_goals(&state.db).await?;

    let submission = match form.validate() {
        Ok(submission) => submission,
        Err(errors) => return request_page(&goals, &form, &errors),
    };

    // The selected goal must still exist; a tampered radio value becomes a
    // plain field error.
    let goal = match goals.iter().find(|g| g.id == submission.goal_id) {
        Some(goal) => goal,
        None => {
            let errors = FormErrors {
                goal: Some("Выберите цель занятий".to_owned()),
                ..Default::default()
            };
            return request_page(&goals, &form, &errors);
        }
    };

    EnrollmentService::create_request(&state.db, &submission).await?;

    let mut context = Context::new();
    context.insert("name", &submission.name);
    context.insert("phone", &submission.phone);
    context.insert("goal", goal);
    context.insert("time_label", submission.study_time.label());
    templates::render("request_done.html", &context)
}

use crate::{
    dtos::view::{FreeDay, SortOption},
    error::AppError,
    state::AppState,
    templates,
};
use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use database::services::catalog::CatalogService;
use futures::try_join;
use models::sort::SortOrder;
use serde::Deserialize;
use std::{collections::HashMap, str::FromStr};
use tera::Context;

/// How many teachers the home page shows
const HOME_PAGE_TEACHERS: usize = 6;

/// Home page: the goal tiles and a random sample of teachers
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let (goals, teachers) = try_join!(
        CatalogService::list_goals(&state.db),
        CatalogService::list_teachers(&state.db, SortOrder::Random)
    )?;

    let mut rng = rand::thread_rng();
    let picked = CatalogService::sample(teachers, HOME_PAGE_TEACHERS, &mut rng);

    let mut context = Context::new();
    context.insert("goals", &goals);
    context.insert("teachers", &picked);
    templates::render("index.html", &context)
}

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub sort_by: Option<String>,
}

/// Full catalog with a sort selector. An unknown sort code falls back to the
/// random order instead of erroring.
pub async fn all(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Html<String>, AppError> {
    let order = match query.sort_by.as_deref() {
        None => SortOrder::default(),
        Some(raw) => SortOrder::from_str(raw).unwrap_or_else(|_| {
            log::warn!("unknown sort code {raw:?}, falling back to random");
            SortOrder::default()
        }),
    };

    let mut teachers = CatalogService::list_teachers(&state.db, order).await?;
    if order == SortOrder::Random {
        let mut rng = rand::thread_rng();
        CatalogService::shuffle(&mut teachers, &mut rng);
    }

    let sort_options: Vec<SortOption> = SortOrder::all()
        .into_iter()
        .map(|candidate| SortOption {
            value: candidate.as_str().to_owned(),
            label: candidate.label().to_owned(),
            selected: candidate == order,
        })
        .collect();

    let mut context = Context::new();
    context.insert("teachers", &teachers);
    context.insert("sort_options", &sort_options);
    templates::render("all.html", &context)
}

/// One study goal with every teacher attached to it
pub async fn goal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let goal = CatalogService::get_goal(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("goal"))?;
    let teachers = CatalogService::teachers_for_goal(&state.db, &goal).await?;

    let mut context = Context::new();
    context.insert("goal", &goal);
    context.insert("teachers", &teachers);
    templates::render("goal.html", &context)
}

/// Teacher profile with the free-hours grid
pub async fn profile(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let teacher = CatalogService::get_teacher(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("teacher"))?;

    let (goals, weekdays) = try_join!(
        CatalogService::goals_of_teacher(&state.db, &teacher),
        CatalogService::list_weekdays(&state.db)
    )?;

    let day_names: HashMap<&str, &str> = weekdays
        .iter()
        .map(|day| (day.short_name.as_str(), day.ru_name.as_str()))
        .collect();

    let schedule: Vec<FreeDay> = teacher
        .free
        .days()
        .filter(|(_, slots)| !slots.is_empty())
        .map(|(code, slots)| FreeDay {
            code: code.as_str().to_owned(),
            ru_name: day_names
                .get(code.as_str())
                .copied()
                .unwrap_or(code.as_str())
                .to_owned(),
            slots: slots.iter().map(|slot| slot.as_str().to_owned()).collect(),
        })
        .collect();

    let mut context = Context::new();
    context.insert("teacher", &teacher);
    context.insert("goals", &goals);
    context.insert("schedule", &schedule);
    templates::render("profile.html", &context)
}

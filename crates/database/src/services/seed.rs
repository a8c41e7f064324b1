use crate::entities::{goal, teacher, teacher_goal, weekday};
use models::seed_data::SeedCatalog;
use sea_orm::{
    ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, SqlErr,
    TransactionTrait,
};
use std::collections::HashMap;

/// What applying the catalog fixture did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The fixture was written into an empty catalog
    Seeded,
    /// Teachers already exist, nothing was touched
    AlreadySeeded,
    /// Another writer got there first; our transaction was rolled back
    SkippedConflict,
}

pub struct SeedService;

impl SeedService {
    /// Loads the fixture into an empty catalog. Several instances may race
    /// here on startup: whoever hits a unique constraint drops its
    /// transaction and reports the conflict instead of failing.
    pub async fn run(db: &DatabaseConnection, catalog: &SeedCatalog) -> Result<SeedOutcome, DbErr> {
        if teacher::Entity::find().count(db).await? > 0 {
            return Ok(SeedOutcome::AlreadySeeded);
        }

        match Self::insert_catalog(db, catalog).await {
            Ok(()) => Ok(SeedOutcome::Seeded),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    log::warn!("catalog was seeded concurrently, keeping the existing rows");
                    Ok(SeedOutcome::SkippedConflict)
                }
                _ => Err(err),
            },
        }
    }

    async fn insert_catalog(db: &DatabaseConnection, catalog: &SeedCatalog) -> Result<(), DbErr> {
        let txn = db.begin().await?;

        let weekdays = catalog
            .weekdays
            .iter()
            .map(|(code, ru_name)| weekday::ActiveModel {
                short_name: Set(code.as_str().to_owned()),
                ru_name: Set(ru_name.clone()),
            });
        weekday::Entity::insert_many(weekdays).exec(&txn).await?;

        let goals = catalog.goals.iter().map(|g| goal::ActiveModel {
            id: Set(g.id),
            name: Set(g.name.clone()),
            ru_name: Set(g.ru_name.clone()),
            pictogram: Set(g.pictogram.clone()),
        });
        goal::Entity::insert_many(goals).exec(&txn).await?;

        let teachers = catalog.teachers.iter().map(|t| teacher::ActiveModel {
            id: Set(t.id),
            name: Set(t.name.clone()),
            about: Set(t.about.clone()),
            rating: Set(t.rating),
            picture: Set(t.picture.clone()),
            price: Set(t.price),
            free: Set(t.free.clone()),
        });
        teacher::Entity::insert_many(teachers).exec(&txn).await?;

        // Resolve goal names against the rows this transaction just wrote
        let goal_ids: HashMap<String, i32> = goal::Entity::find()
            .all(&txn)
            .await?
            .into_iter()
            .map(|g| (g.name, g.id))
            .collect();

        let mut links = Vec::new();
        for teacher_seed in &catalog.teachers {
            for goal_name in &teacher_seed.goals {
                let goal_id = goal_ids.get(goal_name).copied().ok_or_else(|| {
                    DbErr::Custom(format!("fixture references unknown goal {goal_name}"))
                })?;
                links.push(teacher_goal::ActiveModel {
                    teacher_id: Set(teacher_seed.id),
                    goal_id: Set(goal_id),
                    ..Default::default()
                });
            }
        }
        teacher_goal::Entity::insert_many(links).exec(&txn).await?;

        txn.commit().await
    }
}

use crate::entities::{goal, teacher, weekday};
use models::sort::SortOrder;
use rand::{Rng, seq::SliceRandom};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryOrder};

pub struct CatalogService;

impl CatalogService {
    /// All study goals in fixture order
    pub async fn list_goals(db: &DatabaseConnection) -> Result<Vec<goal::Model>, DbErr> {
        goal::Entity::find()
            .order_by_asc(goal::Column::Id)
            .all(db)
            .await
    }

    pub async fn get_goal(db: &DatabaseConnection, id: i32) -> Result<Option<goal::Model>, DbErr> {
        goal::Entity::find_by_id(id).one(db).await
    }

    /// Teachers in the requested catalog ordering. `Random` comes back in id
    /// order; shuffling happens in memory because it needs a random source.
    pub async fn list_teachers(
        db: &DatabaseConnection,
        order: SortOrder,
    ) -> Result<Vec<teacher::Model>, DbErr> {
        let query = teacher::Entity::find();
        let query = match order {
            SortOrder::Random => query.order_by_asc(teacher::Column::Id),
            SortOrder::RatingDesc => query.order_by_desc(teacher::Column::Rating),
            SortOrder::PriceDesc => query.order_by_desc(teacher::Column::Price),
            SortOrder::PriceAsc => query.order_by_asc(teacher::Column::Price),
        };
        query.all(db).await
    }

    pub async fn get_teacher(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<teacher::Model>, DbErr> {
        teacher::Entity::find_by_id(id).one(db).await
    }

    /// Teachers attached to one goal, in id order
    pub async fn teachers_for_goal(
        db: &DatabaseConnection,
        goal: &goal::Model,
    ) -> Result<Vec<teacher::Model>, DbErr> {
        goal.find_related(teacher::Entity)
            .order_by_asc(teacher::Column::Id)
            .all(db)
            .await
    }

    /// Goals one teacher covers, in id order
    pub async fn goals_of_teacher(
        db: &DatabaseConnection,
        teacher: &teacher::Model,
    ) -> Result<Vec<goal::Model>, DbErr> {
        teacher
            .find_related(goal::Entity)
            .order_by_asc(goal::Column::Id)
            .all(db)
            .await
    }

    pub async fn list_weekdays(db: &DatabaseConnection) -> Result<Vec<weekday::Model>, DbErr> {
        weekday::Entity::find().all(db).await
    }

    pub async fn get_weekday(
        db: &DatabaseConnection,
        short_name: &str,
    ) -> Result<Option<weekday::Model>, DbErr> {
        weekday::Entity::find_by_id(short_name.to_owned()).one(db).await
    }

    /// Reorders teachers randomly in place
    pub fn shuffle(teachers: &mut [teacher::Model], rng: &mut impl Rng) {
        teachers.shuffle(rng);
    }

    /// Picks up to `count` distinct teachers in random order
    pub fn sample(
        mut teachers: Vec<teacher::Model>,
        count: usize,
        rng: &mut impl Rng,
    ) -> Vec<teacher::Model> {
        teachers.shuffle(rng);
        teachers.truncate(count);
        teachers
    }
}

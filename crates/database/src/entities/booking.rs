use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A booked trial lesson slot
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub teacher_id: i32,
    pub day_short_name: String,
    pub time: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::TeacherId",
        to = "super::teacher::Column::Id"
    )]
    Teacher,
    #[sea_orm(
        belongs_to = "super::weekday::Entity",
        from = "Column::DayShortName",
        to = "super::weekday::Column::ShortName"
    )]
    Weekday,
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::weekday::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Weekday.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use models::availability::WeekSchedule;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub about: String,
    pub rating: f64,
    pub picture: String,
    pub price: i32,
    pub free: WeekSchedule,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::teacher_goal::Entity")]
    TeacherGoals,
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
}

impl Related<super::teacher_goal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeacherGoals.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

// Many-to-many relationship with goals
impl Related<super::goal::Entity> for Entity {
    fn to() -> RelationDef {
        super::teacher_goal::Relation::Goal.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::teacher_goal::Relation::Teacher.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

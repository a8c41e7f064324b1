use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "goals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub ru_name: String,
    pub pictogram: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::teacher_goal::Entity")]
    TeacherGoals,
    #[sea_orm(has_many = "super::lesson_request::Entity")]
    LessonRequests,
}

impl Related<super::teacher_goal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeacherGoals.def()
    }
}

impl Related<super::lesson_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LessonRequests.def()
    }
}

// Many-to-many relationship with teachers
impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        super::teacher_goal::Relation::Teacher.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::teacher_goal::Relation::Goal.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

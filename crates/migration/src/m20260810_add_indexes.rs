use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // A teacher is linked to a goal at most once
        manager
            .create_index(
                Index::create()
                    .name("idx_teacher_goals_teacher_id_goal_id")
                    .table(TeacherGoals::Table)
                    .col(TeacherGoals::TeacherId)
                    .col(TeacherGoals::GoalId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index on teacher_goals.goal_id for goal page lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_teacher_goals_goal_id")
                    .table(TeacherGoals::Table)
                    .col(TeacherGoals::GoalId)
                    .to_owned(),
            )
            .await?;

        // Index on bookings.teacher_id for faster joins
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_teacher_id")
                    .table(Bookings::Table)
                    .col(Bookings::TeacherId)
                    .to_owned(),
            )
            .await?;

        // Index on lesson_requests.goal_id for faster joins
        manager
            .create_index(
                Index::create()
                    .name("idx_lesson_requests_goal_id")
                    .table(LessonRequests::Table)
                    .col(LessonRequests::GoalId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        manager
            .drop_index(
                Index::drop()
                    .name("idx_lesson_requests_goal_id")
                    .table(LessonRequests::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_bookings_teacher_id")
                    .table(Bookings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_teacher_goals_goal_id")
                    .table(TeacherGoals::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_teacher_goals_teacher_id_goal_id")
                    .table(TeacherGoals::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum TeacherGoals {
    Table,
    TeacherId,
    GoalId,
}

#[derive(Iden)]
enum Bookings {
    Table,
    TeacherId,
}

#[derive(Iden)]
enum LessonRequests {
    Table,
    GoalId,
}

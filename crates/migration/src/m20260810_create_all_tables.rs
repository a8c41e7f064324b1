use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create weekdays table
        manager
            .create_table(
                Table::create()
                    .table(Weekdays::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Weekdays::ShortName)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Weekdays::RuName).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create goals table
        manager
            .create_table(
                Table::create()
                    .table(Goals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Goals::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Goals::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Goals::RuName).string().not_null())
                    .col(ColumnDef::new(Goals::Pictogram).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create teachers table
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teachers::Name).string().not_null())
                    .col(ColumnDef::new(Teachers::About).text().not_null())
                    .col(ColumnDef::new(Teachers::Rating).double().not_null())
                    .col(ColumnDef::new(Teachers::Picture).string().not_null())
                    .col(ColumnDef::new(Teachers::Price).integer().not_null())
                    .col(ColumnDef::new(Teachers::Free).json().not_null())
                    .to_owned(),
            )
            .await?;

        // Create teacher_goals junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(TeacherGoals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeacherGoals::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TeacherGoals::TeacherId).integer().not_null())
                    .col(ColumnDef::new(TeacherGoals::GoalId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-teacher_goals-teacher_id")
                            .from(TeacherGoals::Table, TeacherGoals::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-teacher_goals-goal_id")
                            .from(TeacherGoals::Table, TeacherGoals::GoalId)
                            .to(Goals::Table, Goals::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create lesson_requests table
        manager
            .create_table(
                Table::create()
                    .table(LessonRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LessonRequests::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LessonRequests::Name).string().not_null())
                    .col(ColumnDef::new(LessonRequests::Phone).string().not_null())
                    .col(ColumnDef::new(LessonRequests::GoalId).integer().not_null())
                    .col(ColumnDef::new(LessonRequests::Time).string().not_null())
                    .col(
                        ColumnDef::new(LessonRequests::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-lesson_requests-goal_id")
                            .from(LessonRequests::Table, LessonRequests::GoalId)
                            .to(Goals::Table, Goals::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create bookings table
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bookings::Name).string().not_null())
                    .col(ColumnDef::new(Bookings::Phone).string().not_null())
                    .col(ColumnDef::new(Bookings::TeacherId).integer().not_null())
                    .col(
                        ColumnDef::new(Bookings::DayShortName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Bookings::Time).string().not_null())
                    .col(ColumnDef::new(Bookings::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-bookings-teacher_id")
                            .from(Bookings::Table, Bookings::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-bookings-day_short_name")
                            .from(Bookings::Table, Bookings::DayShortName)
                            .to(Weekdays::Table, Weekdays::ShortName)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(LessonRequests::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TeacherGoals::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Goals::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Weekdays::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Weekdays {
    Table,
    ShortName,
    RuName,
}

#[derive(Iden)]
enum Goals {
    Table,
    Id,
    Name,
    RuName,
    Pictogram,
}

#[derive(Iden)]
enum Teachers {
    Table,
    Id,
    Name,
    About,
    Rating,
    Picture,
    Price,
    Free,
}

#[derive(Iden)]
enum TeacherGoals {
    Table,
    Id,
    TeacherId,
    GoalId,
}

#[derive(Iden)]
enum LessonRequests {
    Table,
    Id,
    Name,
    Phone,
    GoalId,
    Time,
    CreatedAt,
}

#[derive(Iden)]
enum Bookings {
    Table,
    Id,
    Name,
    Phone,
    TeacherId,
    DayShortName,
    Time,
    CreatedAt,
}

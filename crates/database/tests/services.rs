use database::{
    db,
    entities::{booking, lesson_request, teacher, teacher_goal, weekday},
    services::{
        catalog::CatalogService,
        enrollment::EnrollmentService,
        seed::{SeedOutcome, SeedService},
    },
};
use migration::{Migrator, MigratorTrait};
use models::{
    day::DayCode,
    forms::{BookingSubmission, RequestSubmission},
    seed_data,
    slot::TimeSlot,
    sort::SortOrder,
    study_time::StudyTime,
};
use rand::{SeedableRng, rngs::StdRng};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use std::collections::BTreeSet;

async fn fresh_db() -> DatabaseConnection {
    let db = db::connect_in_memory().await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

async fn seeded_db() -> DatabaseConnection {
    let db = fresh_db().await;
    let catalog = seed_data::catalog().unwrap();
    assert_eq!(
        SeedService::run(&db, &catalog).await.unwrap(),
        SeedOutcome::Seeded
    );
    db
}

#[tokio::test]
async fn test_seed_fills_empty_catalog() {
    let db = seeded_db().await;
    let catalog = seed_data::catalog().unwrap();

    assert_eq!(weekday::Entity::find().count(&db).await.unwrap(), 7);
    assert_eq!(
        CatalogService::list_goals(&db).await.unwrap().len(),
        catalog.goals.len()
    );
    assert_eq!(
        teacher::Entity::find().count(&db).await.unwrap() as usize,
        catalog.teachers.len()
    );

    let links: usize = catalog.teachers.iter().map(|t| t.goals.len()).sum();
    assert_eq!(
        teacher_goal::Entity::find().count(&db).await.unwrap() as usize,
        links
    );
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let db = seeded_db().await;
    let catalog = seed_data::catalog().unwrap();

    assert_eq!(
        SeedService::run(&db, &catalog).await.unwrap(),
        SeedOutcome::AlreadySeeded
    );
    assert_eq!(teacher::Entity::find().count(&db).await.unwrap(), 10);
}

#[tokio::test]
async fn test_seed_conflict_rolls_back() {
    let db = seeded_db().await;
    let catalog = seed_data::catalog().unwrap();

    // Empty the teachers so the guard lets the seed proceed, but leave the
    // weekdays in place so the insert runs into them.
    teacher_goal::Entity::delete_many().exec(&db).await.unwrap();
    teacher::Entity::delete_many().exec(&db).await.unwrap();

    assert_eq!(
        SeedService::run(&db, &catalog).await.unwrap(),
        SeedOutcome::SkippedConflict
    );
    assert_eq!(teacher::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(teacher_goal::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(weekday::Entity::find().count(&db).await.unwrap(), 7);
}

#[tokio::test]
async fn test_schedule_survives_the_json_column() {
    let db = seeded_db().await;

    let teacher = CatalogService::get_teacher(&db, 1).await.unwrap().unwrap();
    assert!(teacher.free.is_free(DayCode::Mon, TimeSlot::Eight));
    assert!(!teacher.free.is_free(DayCode::Mon, TimeSlot::Eighteen));
    assert_eq!(
        teacher.free.free_slots(DayCode::Mon),
        vec![TimeSlot::Eight, TimeSlot::Ten, TimeSlot::Twelve]
    );
}

#[tokio::test]
async fn test_list_teachers_orderings() {
    let db = seeded_db().await;

    let by_price: Vec<i32> = CatalogService::list_teachers(&db, SortOrder::PriceAsc)
        .await
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(by_price, vec![8, 4, 7, 2, 9, 3, 5, 1, 10, 6]);

    let by_price_desc: Vec<i32> = CatalogService::list_teachers(&db, SortOrder::PriceDesc)
        .await
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    let reversed: Vec<i32> = by_price.into_iter().rev().collect();
    assert_eq!(by_price_desc, reversed);

    let ratings: Vec<f64> = CatalogService::list_teachers(&db, SortOrder::RatingDesc)
        .await
        .unwrap()
        .iter()
        .map(|t| t.rating)
        .collect();
    assert!(ratings.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[tokio::test]
async fn test_teachers_for_goal() {
    let db = seeded_db().await;

    let goals = CatalogService::list_goals(&db).await.unwrap();
    let study = goals.iter().find(|g| g.name == "study").unwrap();

    let ids: Vec<i32> = CatalogService::teachers_for_goal(&db, study)
        .await
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![1, 3, 5, 8, 10]);
}

#[tokio::test]
async fn test_goals_of_teacher() {
    let db = seeded_db().await;

    let teacher = CatalogService::get_teacher(&db, 10).await.unwrap().unwrap();
    let names: Vec<String> = CatalogService::goals_of_teacher(&db, &teacher)
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["study", "work", "relocate"]);
}

#[tokio::test]
async fn test_weekday_lookup() {
    let db = seeded_db().await;

    let monday = CatalogService::get_weekday(&db, "mon").await.unwrap();
    assert_eq!(monday.unwrap().ru_name, "Понедельник");
    assert!(
        CatalogService::get_weekday(&db, "someday")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_create_request_keeps_the_label() {
    let db = seeded_db().await;

    let submission = RequestSubmission {
        name: "Аня".to_owned(),
        phone: "+7 900 123-45-67".to_owned(),
        goal_id: 2,
        study_time: StudyTime::ThreeToFive,
    };
    let created = EnrollmentService::create_request(&db, &submission)
        .await
        .unwrap();

    let stored = lesson_request::Entity::find_by_id(created.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.name, "Аня");
    assert_eq!(stored.goal_id, 2);
    assert_eq!(stored.time, "3-5 часов в неделю");
}

#[tokio::test]
async fn test_create_booking_stores_day_and_slot_codes() {
    let db = seeded_db().await;

    let submission = BookingSubmission {
        name: "Ann".to_owned(),
        phone: "+1234567890".to_owned(),
        teacher_id: 1,
        day: DayCode::Mon,
        slot: TimeSlot::Ten,
    };
    let created = EnrollmentService::create_booking(&db, &submission)
        .await
        .unwrap();

    let stored = booking::Entity::find_by_id(created.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.teacher_id, 1);
    assert_eq!(stored.day_short_name, "mon");
    assert_eq!(stored.time, "10:00");
}

#[tokio::test]
async fn test_sample_is_seed_deterministic() {
    let db = seeded_db().await;
    let teachers = CatalogService::list_teachers(&db, SortOrder::Random)
        .await
        .unwrap();

    let mut rng = StdRng::seed_from_u64(7);
    let first = CatalogService::sample(teachers.clone(), 6, &mut rng);
    assert_eq!(first.len(), 6);

    let distinct: BTreeSet<i32> = first.iter().map(|t| t.id).collect();
    assert_eq!(distinct.len(), 6);

    let mut rng = StdRng::seed_from_u64(7);
    let second = CatalogService::sample(teachers, 6, &mut rng);
    let first_ids: Vec<i32> = first.iter().map(|t| t.id).collect();
    let second_ids: Vec<i32> = second.iter().map(|t| t.id).collect();
    assert_eq!(first_ids, second_ids);
}

#[tokio::test]
async fn test_shuffle_keeps_every_teacher() {
    let db = seeded_db().await;
    let mut teachers = CatalogService::list_teachers(&db, SortOrder::Random)
        .await
        .unwrap();
    let before: BTreeSet<i32> = teachers.iter().map(|t| t.id).collect();

    let mut rng = StdRng::seed_from_u64(7);
    CatalogService::shuffle(&mut teachers, &mut rng);

    let after: BTreeSet<i32> = teachers.iter().map(|t| t.id).collect();
    assert_eq!(before, after);
}

mod common;

use axum::http::StatusCode;
use common::{TestApp, occurrences};

#[tokio::test]
async fn test_home_page_shows_goals_and_six_teachers() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(occurrences(&body, "class=\"teacher-card\""), 6);
    assert!(body.contains("Для путешествий"));
    assert!(body.contains("Для переезда"));
}

#[tokio::test]
async fn test_all_page_lists_every_teacher() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/all/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(occurrences(&body, "class=\"teacher-card\""), 10);
    assert!(body.contains("name=\"sort_by\""));
}

#[tokio::test]
async fn test_all_page_sorts_by_price() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/all/?sort_by=price_asc").await;

    assert_eq!(status, StatusCode::OK);
    let cheapest = body.find("Иван Черепанов").unwrap();
    let priciest = body.find("Георгий Мартиросян").unwrap();
    assert!(cheapest < priciest);

    let (_, body) = app.get("/all/?sort_by=price_desc").await;
    let cheapest = body.find("Иван Черепанов").unwrap();
    let priciest = body.find("Георгий Мартиросян").unwrap();
    assert!(priciest < cheapest);
}

#[tokio::test]
async fn test_all_page_sorts_by_rating() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/all/?sort_by=rating_desc").await;

    assert_eq!(status, StatusCode::OK);
    let best = body.find("Елена Груздева").unwrap();
    let worst = body.find("Иван Черепанов").unwrap();
    assert!(best < worst);
    assert!(body.contains("selected>сначала лучшие по рейтингу"));
}

#[tokio::test]
async fn test_all_page_tolerates_unknown_sort_code() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/all/?sort_by=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(occurrences(&body, "class=\"teacher-card\""), 10);
}

#[tokio::test]
async fn test_goal_page_lists_only_matching_teachers() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/goals/2/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("для школы"));
    assert_eq!(occurrences(&body, "class=\"teacher-card\""), 5);
    assert!(body.contains("Марина Ахметова"));
    assert!(!body.contains("Ольга Ветрова"));
}

#[tokio::test]
async fn test_goal_page_unknown_id_is_404() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/goals/999/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("404"));
}

#[tokio::test]
async fn test_profile_page_shows_only_free_slots() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/profiles/1/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Елена Груздева"));
    assert!(body.contains("Понедельник"));
    assert!(body.contains("/booking/1/mon/8:00/"));
    assert!(!body.contains("/booking/1/mon/18:00/"));
    assert!(body.contains("/booking/1/sat/18:00/"));
}

#[tokio::test]
async fn test_profile_page_omits_fully_busy_days() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/profiles/2/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Суббота"));
    assert!(!body.contains("Воскресенье"));
}

#[tokio::test]
async fn test_profile_page_unknown_id_is_404() {
    let app = TestApp::new().await;
    let (status, _) = app.get("/profiles/999/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_request_page_renders_choices() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/request/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(occurrences(&body, "name=\"goal\""), 4);
    assert_eq!(occurrences(&body, "name=\"time\""), 4);
    assert!(body.contains("1-3 часа в неделю"));
}

#[tokio::test]
async fn test_booking_page_carries_the_target() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/booking/1/mon/8:00/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Елена Груздева"));
    assert!(body.contains("Понедельник"));
    assert!(body.contains("name=\"teacher_id\" value=\"1\""));
    assert!(body.contains("name=\"weekday\" value=\"mon\""));
    assert!(body.contains("name=\"time\" value=\"8:00\""));
}

#[tokio::test]
async fn test_booking_page_rejects_busy_slot() {
    let app = TestApp::new().await;
    let (status, _) = app.get("/booking/1/mon/18:00/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_booking_page_rejects_unknown_pieces() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/booking/999/mon/8:00/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/booking/1/someday/8:00/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/booking/1/mon/23:00/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_unknown_path_gets_the_error_page() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/there-is-no-such-page/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("404"));
    assert!(body.contains("Такой страницы у нас нет"));
}

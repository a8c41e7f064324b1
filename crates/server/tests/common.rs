use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use database::{
    db,
    services::seed::{SeedOutcome, SeedService},
};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use server::{app, state::AppState};
use tower::ServiceExt;

/// A fully seeded application over an in-memory database
pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = db::connect_in_memory().await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let catalog = models::seed_data::catalog().unwrap();
        let outcome = SeedService::run(&db, &catalog).await.unwrap();
        assert_eq!(outcome, SeedOutcome::Seeded);

        let router = app(AppState::new(db.clone()));
        Self { router, db }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(
                        header::CONTENT_TYPE,
                        "application/x-www-form-urlencoded",
                    )
                    .body(Body::from(form.to_owned()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }
}

pub fn occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

use database::{db, services::seed::SeedService};
use log::info;
use migration::{Migrator, MigratorTrait};
use server::{app, state::AppState, utils::shutdown::shutdown_signal};
use std::env;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db = db::connect(&database_url)
        .await
        .expect("Failed to connect to the database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let catalog = models::seed_data::catalog().expect("Failed to parse the catalog fixture");
    let outcome = SeedService::run(&db, &catalog)
        .await
        .expect("Failed to seed the catalog");
    info!("catalog seed: {outcome:?}");

    let app = app(AppState::new(db));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("Running axum on http://localhost:3000");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

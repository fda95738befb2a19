use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;
use tera::Tera;

use crate::config::Config;
use crate::domain::models::event::Event;
use crate::domain::ports::EventRepository;
use crate::error::AppError;
use crate::state::AppState;
use crate::infra::repositories::{
    sqlite_event_repo::SqliteEventRepo, sqlite_request_repo::SqliteRequestRepo,
    sqlite_session_repo::SqliteSessionRepo, sqlite_user_repo::SqliteUserRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing SQLite connection with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_migrations(&pool).await;

    let event_repo: Arc<dyn EventRepository> = Arc::new(SqliteEventRepo::new(pool.clone()));

    seed_events(event_repo.as_ref())
        .await
        .expect("Failed to seed events");

    AppState {
        config: config.clone(),
        user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
        event_repo,
        request_repo: Arc::new(SqliteRequestRepo::new(pool.clone())),
        session_repo: Arc::new(SqliteSessionRepo::new(pool.clone())),
        templates: Arc::new(load_templates()),
    }
}

async fn run_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");
}

// One-time catalog seed; events have no create route.
pub async fn seed_events(repo: &dyn EventRepository) -> Result<(), AppError> {
    if repo.count().await? > 0 {
        return Ok(());
    }

    let catalog = [
        ("Wedding Celebration", "Hyderabad", "2025-11-01", 1000, "Full-day wedding services"),
        ("Cultural Concert", "Warangal", "2025-10-15", 800, "Evening concert featuring local artists"),
        ("Food Festival", "Karimnagar", "2025-12-05", 400, "Street food & local specialities"),
        ("Corporate Meet", "Nizamabad", "2025-09-28", 700, "Conference halls and arrangements"),
    ];

    for (title, district, date_text, base_price, description) in catalog {
        let event = Event::new(
            title.to_string(),
            district.to_string(),
            date_text.to_string(),
            base_price,
            description.to_string(),
        );
        repo.create(&event).await?;
    }

    info!("Seeded {} catalog events", catalog.len());
    Ok(())
}

pub fn load_templates() -> Tera {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("index.html", include_str!("../templates/index.html")),
        ("signup.html", include_str!("../templates/signup.html")),
        ("signin.html", include_str!("../templates/signin.html")),
        ("events.html", include_str!("../templates/events.html")),
        ("event_detail.html", include_str!("../templates/event_detail.html")),
        ("quote_form.html", include_str!("../templates/quote_form.html")),
        ("request_view.html", include_str!("../templates/request_view.html")),
        ("my_requests.html", include_str!("../templates/my_requests.html")),
    ])
    .expect("Failed to load templates");
    tera
}

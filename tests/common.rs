use quote_portal::{
    api::router::create_router,
    config::Config,
    infra::factory::{load_templates, seed_events},
    infra::repositories::{
        sqlite_event_repo::SqliteEventRepo, sqlite_request_repo::SqliteRequestRepo,
        sqlite_session_repo::SqliteSessionRepo, sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url,
            port: 0,
        };

        let state = Arc::new(AppState {
            config,
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
            request_repo: Arc::new(SqliteRequestRepo::new(pool.clone())),
            session_repo: Arc::new(SqliteSessionRepo::new(pool.clone())),
            templates: Arc::new(load_templates()),
        });

        seed_events(state.event_repo.as_ref())
            .await
            .expect("Failed to seed test events");

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn get_with_session(&self, uri: &str, session: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header(header::COOKIE, format!("session_token={}", session))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header(header::COOKIE, cookie.to_string())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn post_form_with_session(&self, uri: &str, body: &str, session: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .header(header::COOKIE, format!("session_token={}", session))
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn signup(&self, username: &str, password: &str) {
        let response = self
            .post_form(
                "/signup",
                &format!("username={}&email=&password={}", username, password),
            )
            .await;

        if !response.status().is_redirection() {
            panic!("Signup failed in test helper: status {}", response.status());
        }
    }

    pub async fn signin(&self, username: &str, password: &str) -> String {
        let response = self
            .post_form(
                "/signin",
                &format!("username={}&password={}", username, password),
            )
            .await;

        if !response.status().is_redirection() {
            panic!("Signin failed in test helper: status {}", response.status());
        }

        extract_cookie(&response, "session_token").expect("No session_token cookie returned")
    }

    pub async fn event_id_by_title(&self, title: &str) -> String {
        self.state
            .event_repo
            .list(None)
            .await
            .unwrap()
            .into_iter()
            .find(|e| e.title == title)
            .map(|e| e.id)
            .expect("seeded event missing")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

#[allow(dead_code)]
pub fn extract_cookie(response: &Response, name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .find(|cookie| cookie.starts_with(&prefix))
        .map(|cookie| {
            let value = &cookie[prefix.len()..];
            value.split(';').next().unwrap_or(value).to_string()
        })
}

#[allow(dead_code)]
pub fn location(response: &Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("No Location header")
        .to_str()
        .unwrap()
        .to_string()
}

#[allow(dead_code)]
pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

use crate::domain::{models::event::Event, ports::EventRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteEventRepo {
    pool: SqlitePool,
}

impl SqliteEventRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepo {
    async fn create(&self, event: &Event) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            r#"INSERT INTO events (id, title, district, date_text, base_price, description, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING *"#,
        )
            .bind(&event.id)
            .bind(&event.title)
            .bind(&event.district)
            .bind(&event.date_text)
            .bind(event.base_price)
            .bind(&event.description)
            .bind(event.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, district_filter: Option<&str>) -> Result<Vec<Event>, AppError> {
        match district_filter {
            Some(filter) if !filter.is_empty() => {
                sqlx::query_as::<_, Event>("SELECT * FROM events WHERE district LIKE ?")
                    .bind(format!("%{}%", filter))
                    .fetch_all(&self.pool)
                    .await
                    .map_err(AppError::Database)
            }
            _ => {
                sqlx::query_as::<_, Event>("SELECT * FROM events")
                    .fetch_all(&self.pool)
                    .await
                    .map_err(AppError::Database)
            }
        }
    }

    async fn list_districts(&self) -> Result<Vec<String>, AppError> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT district FROM events ORDER BY district")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}

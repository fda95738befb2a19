use crate::domain::{models::session::Session, ports::SessionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteSessionRepo { pool: SqlitePool }
impl SqliteSessionRepo { pub fn new(pool: SqlitePool) -> Self { Self { pool } } }

#[async_trait]
impl SessionRepository for SqliteSessionRepo {
    async fn create(&self, session: &Session) -> Result<(), AppError> {
        sqlx::query("INSERT INTO sessions (token, user_id, created_at) VALUES (?, ?, ?)")
            .bind(&session.token)
            .bind(&session.user_id)
            .bind(session.created_at)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, AppError> {
        sqlx::query_as::<_, Session>(
            "SELECT token, user_id, created_at FROM sessions WHERE token = ?"
        )
            .bind(token)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete_by_token(&self, token: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }
}

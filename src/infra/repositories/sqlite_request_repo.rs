use crate::domain::{
    models::request::{QuoteRequest, QuoteRequestDetail},
    ports::RequestRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

// The event title rides along for display, so detail queries join events.
const DETAIL_SELECT: &str = r#"
    SELECT r.id, r.request_number, r.user_id, r.event_id, r.guests, r.services,
           r.total_price, r.created_at, r.status, r.contact_name, r.contact_phone,
           r.additional_info, COALESCE(e.title, '') AS event_title
    FROM requests r LEFT JOIN events e ON r.event_id = e.id
"#;

pub struct SqliteRequestRepo {
    pool: SqlitePool,
}

impl SqliteRequestRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RequestRepository for SqliteRequestRepo {
    async fn create(&self, request: &QuoteRequest) -> Result<QuoteRequest, AppError> {
        sqlx::query_as::<_, QuoteRequest>(
            r#"INSERT INTO requests (
                id, request_number, user_id, event_id, guests, services,
                total_price, created_at, status, contact_name, contact_phone, additional_info
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#,
        )
            .bind(&request.id)
            .bind(&request.request_number)
            .bind(&request.user_id)
            .bind(&request.event_id)
            .bind(request.guests)
            .bind(&request.services)
            .bind(request.total_price)
            .bind(request.created_at)
            .bind(&request.status)
            .bind(&request.contact_name)
            .bind(&request.contact_phone)
            .bind(&request.additional_info)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_detail_by_number(
        &self,
        request_number: &str,
    ) -> Result<Option<QuoteRequestDetail>, AppError> {
        let query = format!("{} WHERE r.request_number = ?", DETAIL_SELECT);
        sqlx::query_as::<_, QuoteRequestDetail>(&query)
            .bind(request_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_details_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<QuoteRequestDetail>, AppError> {
        let query = format!("{} WHERE r.user_id = ? ORDER BY r.created_at DESC", DETAIL_SELECT);
        sqlx::query_as::<_, QuoteRequestDetail>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}

use crate::domain::models::{
    event::Event,
    request::{QuoteRequest, QuoteRequestDetail},
    session::Session,
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &Event) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError>;
    async fn list(&self, district_filter: Option<&str>) -> Result<Vec<Event>, AppError>;
    async fn list_districts(&self) -> Result<Vec<String>, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait RequestRepository: Send + Sync {
    async fn create(&self, request: &QuoteRequest) -> Result<QuoteRequest, AppError>;
    async fn find_detail_by_number(
        &self,
        request_number: &str,
    ) -> Result<Option<QuoteRequestDetail>, AppError>;
    async fn list_details_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<QuoteRequestDetail>, AppError>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: &Session) -> Result<(), AppError>;
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, AppError>;
    async fn delete_by_token(&self, token: &str) -> Result<(), AppError>;
}

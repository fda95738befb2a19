use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::{
    EventRepository, RequestRepository, SessionRepository, UserRepository,
};
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub event_repo: Arc<dyn EventRepository>,
    pub request_repo: Arc<dyn RequestRepository>,
    pub session_repo: Arc<dyn SessionRepository>,
    pub templates: Arc<Tera>,
}

pub mod sqlite_event_repo;
pub mod sqlite_request_repo;
pub mod sqlite_session_repo;
pub mod sqlite_user_repo;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
};
use crate::state::AppState;
use crate::domain::models::user::User;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::debug;

pub const SESSION_COOKIE: &str = "session_token";

// Resolves the session cookie to a user once per request; everything
// downstream (handlers, templates) sees the same Option<User>.
pub struct MaybeAuthUser(pub Option<User>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let Some(cookies) = parts.extensions.get::<Cookies>() else {
            return Ok(MaybeAuthUser(None));
        };

        let token = match cookies.get(SESSION_COOKIE) {
            Some(cookie) => cookie.value().to_string(),
            None => return Ok(MaybeAuthUser(None)),
        };

        let session = match app_state.session_repo.find_by_token(&token).await {
            Ok(Some(session)) => session,
            Ok(None) => return Ok(MaybeAuthUser(None)),
            Err(e) => {
                // Stale or broken session state -> treat as guest
                debug!("Session lookup failed: {:?}", e);
                return Ok(MaybeAuthUser(None));
            }
        };

        match app_state.user_repo.find_by_id(&session.user_id).await {
            Ok(user) => Ok(MaybeAuthUser(user)),
            Err(e) => {
                debug!("User lookup failed: {:?}", e);
                Ok(MaybeAuthUser(None))
            }
        }
    }
}

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use crate::api::extractors::maybe_auth::SESSION_COOKIE;
use crate::api::flash;
use crate::domain::models::user::User;
use crate::state::AppState;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::Span;

// Protected pages reject to a sign-in redirect instead of a status page.
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts
            .extensions
            .get::<Cookies>()
            .cloned()
            .ok_or_else(|| StatusCode::INTERNAL_SERVER_ERROR.into_response())?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let user = match cookies.get(SESSION_COOKIE) {
            Some(cookie) => {
                let token = cookie.value().to_string();
                match app_state.session_repo.find_by_token(&token).await {
                    Ok(Some(session)) => app_state
                        .user_repo
                        .find_by_id(&session.user_id)
                        .await
                        .ok()
                        .flatten(),
                    _ => None,
                }
            }
            None => None,
        };

        let Some(user) = user else {
            flash::set_notice(&cookies, "Please sign in to see your requests");
            return Err(Redirect::to("/signin").into_response());
        };

        Span::current().record("user_id", &user.id);

        Ok(AuthUser(user))
    }
}

use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;
use tower_cookies::Cookies;

use crate::api::extractors::maybe_auth::MaybeAuthUser;
use crate::api::flash;
use crate::error::AppError;
use crate::state::AppState;

use super::{page_context, render};

pub async fn index(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    let ctx = page_context(&user, flash::take_notice(&cookies));
    render(&state.templates, "index.html", &ctx)
}

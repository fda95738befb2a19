use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tower_cookies::Cookies;

use crate::api::extractors::{auth::AuthUser, maybe_auth::MaybeAuthUser};
use crate::api::flash;
use crate::error::AppError;
use crate::state::AppState;

use super::{page_context, render};

pub async fn request_view(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    cookies: Cookies,
    Path(request_number): Path<String>,
) -> Result<Response, AppError> {
    let Some(detail) = state.request_repo.find_detail_by_number(&request_number).await? else {
        flash::set_notice(&cookies, "Request not found");
        return Ok(Redirect::to("/events").into_response());
    };

    let mut ctx = page_context(&user, flash::take_notice(&cookies));
    ctx.insert("req", &detail);
    Ok(render(&state.templates, "request_view.html", &ctx)?.into_response())
}

pub async fn my_requests(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    let requests = state.request_repo.list_details_by_user(&user.id).await?;

    let current = Some(user);
    let mut ctx = page_context(&current, flash::take_notice(&cookies));
    ctx.insert("requests", &requests);
    render(&state.templates, "my_requests.html", &ctx)
}

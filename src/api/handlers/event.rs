use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tower_cookies::Cookies;

use crate::api::dtos::requests::EventsQuery;
use crate::api::extractors::maybe_auth::MaybeAuthUser;
use crate::api::flash;
use crate::error::AppError;
use crate::state::AppState;

use super::{page_context, render};

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    cookies: Cookies,
    Query(params): Query<EventsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_repo.list(params.district.as_deref()).await?;
    // The filter UI always offers every district, regardless of the filter.
    let districts = state.event_repo.list_districts().await?;

    let mut ctx = page_context(&user, flash::take_notice(&cookies));
    ctx.insert("events", &events);
    ctx.insert("districts", &districts);
    ctx.insert("district_filter", params.district.as_deref().unwrap_or_default());
    render(&state.templates, "events.html", &ctx)
}

pub async fn event_detail(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    cookies: Cookies,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Some(event) = state.event_repo.find_by_id(&id).await? else {
        flash::set_notice(&cookies, "Event not found");
        return Ok(Redirect::to("/events").into_response());
    };

    let mut ctx = page_context(&user, flash::take_notice(&cookies));
    ctx.insert("event", &event);
    Ok(render(&state.templates, "event_detail.html", &ctx)?.into_response())
}

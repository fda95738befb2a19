use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::info;

use crate::api::dtos::requests::QuoteForm;
use crate::api::extractors::maybe_auth::MaybeAuthUser;
use crate::api::flash;
use crate::domain::models::request::{NewRequestParams, QuoteRequest};
use crate::domain::services::pricing;
use crate::error::AppError;
use crate::state::AppState;

use super::{page_context, render};

pub async fn quote_form(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    cookies: Cookies,
    Path(event_id): Path<String>,
) -> Result<Response, AppError> {
    let Some(event) = state.event_repo.find_by_id(&event_id).await? else {
        flash::set_notice(&cookies, "Event not found");
        return Ok(Redirect::to("/events").into_response());
    };

    let mut ctx = page_context(&user, flash::take_notice(&cookies));
    ctx.insert("event", &event);
    Ok(render(&state.templates, "quote_form.html", &ctx)?.into_response())
}

pub async fn create_quote(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    cookies: Cookies,
    Path(event_id): Path<String>,
    Form(payload): Form<QuoteForm>,
) -> Result<Response, AppError> {
    let Some(event) = state.event_repo.find_by_id(&event_id).await? else {
        flash::set_notice(&cookies, "Event not found");
        return Ok(Redirect::to("/events").into_response());
    };

    let guests = payload.guest_count();
    let total = pricing::quote_total(event.base_price, guests, &payload.services);

    // Anonymous quotes are allowed; attribution follows the session if any.
    let request = QuoteRequest::new(NewRequestParams {
        user_id: user.map(|u| u.id),
        event_id: event.id.clone(),
        guests,
        services: payload.services.clone(),
        total_price: total,
        contact_name: payload.contact_name.clone(),
        contact_phone: payload.contact_phone.clone(),
        additional_info: payload.additional_info.clone(),
    });

    let created = state.request_repo.create(&request).await?;

    info!(
        "Quote request created: {} (event {}, total {})",
        created.request_number, event.id, created.total_price
    );

    Ok(Redirect::to(&format!("/request/{}", created.request_number)).into_response())
}

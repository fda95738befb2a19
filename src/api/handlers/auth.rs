use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use std::sync::Arc;
use tower_cookies::{Cookie, Cookies};
use tower_cookies::cookie::SameSite;
use time::Duration;
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};
use rand::rngs::OsRng;
use tracing::info;

use crate::api::dtos::requests::{SigninForm, SignupForm};
use crate::api::extractors::maybe_auth::{MaybeAuthUser, SESSION_COOKIE};
use crate::api::flash;
use crate::domain::models::{session::Session, user::User};
use crate::error::AppError;
use crate::state::AppState;

use super::{page_context, render};

pub async fn signup_form(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    let ctx = page_context(&user, flash::take_notice(&cookies));
    render(&state.templates, "signup.html", &ctx)
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(current): MaybeAuthUser,
    cookies: Cookies,
    Form(payload): Form<SignupForm>,
) -> Result<Response, AppError> {
    let error = if payload.username.is_empty() || payload.password.is_empty() {
        Some("Username and password are required.")
    } else if state.user_repo.find_by_username(&payload.username).await?.is_some() {
        Some("Username already taken.")
    } else {
        None
    };

    if let Some(error) = error {
        let ctx = page_context(&current, Some(error.to_string()));
        return Ok(render(&state.templates, "signup.html", &ctx)?.into_response());
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(payload.password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string();

    let user = User::new(payload.username.clone(), payload.email_opt(), password_hash);
    let created = state.user_repo.create(&user).await?;

    info!("User signed up: {}", created.id);

    flash::set_notice(&cookies, "Account created. Please sign in.");
    Ok(Redirect::to("/signin").into_response())
}

pub async fn signin_form(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    let ctx = page_context(&user, flash::take_notice(&cookies));
    render(&state.templates, "signin.html", &ctx)
}

pub async fn signin(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Form(payload): Form<SigninForm>,
) -> Result<Response, AppError> {
    let user = match state.user_repo.find_by_username(&payload.username).await? {
        Some(user) if verify_password(&user.password_hash, &payload.password) => user,
        // Same notice whether the user is unknown or the password is wrong.
        _ => {
            let ctx = page_context(&None, Some("Incorrect username or password".to_string()));
            return Ok(render(&state.templates, "signin.html", &ctx)?.into_response());
        }
    };

    // Invalidate whatever session this browser was holding before.
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        state.session_repo.delete_by_token(cookie.value()).await?;
    }

    let session = Session::new(user.id.clone());
    state.session_repo.create(&session).await?;
    set_session_cookie(&cookies, &session.token);

    info!("User signed in: {}", user.id);

    flash::set_notice(&cookies, "Signed in successfully");
    Ok(Redirect::to("/events").into_response())
}

pub async fn signout(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        let _ = state.session_repo.delete_by_token(cookie.value()).await;
    }
    cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").into());

    info!("User signed out");

    flash::set_notice(&cookies, "Signed out");
    Ok(Redirect::to("/"))
}

fn verify_password(stored_hash: &str, password: &str) -> bool {
    PasswordHash::new(stored_hash)
        .map(|hash| Argon2::default().verify_password(password.as_bytes(), &hash).is_ok())
        .unwrap_or(false)
}

fn set_session_cookie(cookies: &Cookies, token: &str) {
    let mut cookie = Cookie::new(SESSION_COOKIE, token.to_string());
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_path("/");
    cookie.set_max_age(Duration::days(7));
    cookies.add(cookie);
}

pub mod auth;
pub mod event;
pub mod health;
pub mod pages;
pub mod quote;
pub mod request;

use crate::domain::models::user::User;
use crate::error::AppError;
use axum::response::Html;
use tera::{Context, Tera};

// Base context for every page: the resolved user and a pending notice.
pub fn page_context(current_user: &Option<User>, notice: Option<String>) -> Context {
    let mut ctx = Context::new();
    if let Some(user) = current_user {
        ctx.insert("current_user", user);
    }
    if let Some(notice) = notice {
        ctx.insert("notice", &notice);
    }
    ctx
}

pub fn render(templates: &Tera, name: &str, ctx: &Context) -> Result<Html<String>, AppError> {
    Ok(Html(templates.render(name, ctx)?))
}

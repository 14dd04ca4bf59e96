use std::sync::Arc;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::AppError;
use crate::mailer::Mailer;

mod assets;
mod chat;
mod contact;
mod gallery;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub mailer: Arc<dyn Mailer>,
}

#[derive(Template)]
#[template(path = "pages/404.html")]
struct NotFoundTemplate;

async fn fallback() -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::NOT_FOUND, Html(NotFoundTemplate.render()?)))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/api/contact", post(contact::action))
        .route("/chat/step", get(chat::start).post(chat::step))
        .route("/projects/{project}/gallery", get(gallery::fragment))
        .route("/static/{*path}", get(assets::serve))
        .fallback(fallback)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

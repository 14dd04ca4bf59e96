use askama::Template;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use crate::carousel::Carousel;
use crate::content::PROJECTS;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Nav {
    #[default]
    None,
    Next,
    Prev,
}

#[derive(Deserialize)]
pub struct GalleryQuery {
    #[serde(default)]
    pub image: usize,
    #[serde(default)]
    pub nav: Nav,
}

#[derive(Template)]
#[template(path = "partials/gallery.html")]
pub struct GalleryTemplate {
    pub slug: &'static str,
    pub title: &'static str,
    pub src: &'static str,
    pub index: usize,
    pub total: usize,
}

/// GET /projects/{project}/gallery - one carousel frame of a project gallery.
///
/// The index wraps modulo the image count in both directions.
pub async fn fragment(
    Path(project): Path<String>,
    Query(query): Query<GalleryQuery>,
) -> Result<Response, AppError> {
    let Some(project) = PROJECTS.iter().find(|p| p.slug == project) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let carousel = Carousel::new(project.images.len());
    let index = match query.nav {
        Nav::Next => carousel.next(query.image),
        Nav::Prev => carousel.prev(query.image),
        Nav::None => carousel.clamp(query.image),
    };

    let Some(src) = project.images.get(index) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let template = GalleryTemplate {
        slug: project.slug,
        title: project.title,
        src,
        index,
        total: carousel.len(),
    };

    Ok(Html(template.render()?).into_response())
}

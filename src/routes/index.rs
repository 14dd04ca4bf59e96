use askama::Template;
use axum::response::{Html, IntoResponse};

use crate::content::{
    Competency, Contribution, Highlight, LeetCodeStats, NavLink, Profile, Project, COMPETENCIES,
    CONTRIBUTIONS, HIGHLIGHTS, LEETCODE, NAV_LINKS, PROFILE, PROJECTS, RESUME_URL,
};
use crate::error::AppError;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub profile: &'static Profile,
    pub nav_links: &'static [NavLink],
    pub projects: &'static [Project],
    pub competencies: &'static [Competency],
    pub leetcode: &'static LeetCodeStats,
    pub contributions: &'static [Contribution],
    pub highlights: &'static [Highlight],
    pub resume_url: &'static str,
}

pub async fn page() -> Result<impl IntoResponse, AppError> {
    let template = IndexTemplate {
        profile: &PROFILE,
        nav_links: NAV_LINKS,
        projects: PROJECTS,
        competencies: COMPETENCIES,
        leetcode: &LEETCODE,
        contributions: CONTRIBUTIONS,
        highlights: HIGHLIGHTS,
        resume_url: RESUME_URL,
    };

    Ok(Html(template.render()?))
}

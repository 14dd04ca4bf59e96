use askama::Template;
use axum::extract::Form;
use axum::response::{Html, IntoResponse};
use serde::Deserialize;

use crate::chat::ChatNode;
use crate::content::CHAT_SCRIPT;
use crate::error::AppError;

#[derive(Template)]
#[template(path = "partials/chat_message.html")]
pub struct ChatMessageTemplate {
    pub node: &'static ChatNode,
}

/// GET /chat/step - the opening message of the script.
pub async fn start() -> Result<impl IntoResponse, AppError> {
    let template = ChatMessageTemplate {
        node: CHAT_SCRIPT.start(),
    };
    Ok(Html(template.render()?))
}

#[derive(Deserialize)]
pub struct StepInput {
    pub node: String,
    #[serde(default)]
    pub option: usize,
}

/// POST /chat/step - follow the option the visitor selected.
///
/// The next message is only ever revealed through here; an unknown node
/// or option yields the generic fallback reply.
pub async fn step(Form(input): Form<StepInput>) -> Result<impl IntoResponse, AppError> {
    let template = ChatMessageTemplate {
        node: CHAT_SCRIPT.advance(&input.node, input.option),
    };
    Ok(Html(template.render()?))
}

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use validator::Validate;

use crate::contact::ContactSubmission;
use crate::routes::AppState;

/// POST /api/contact - relay a contact-form submission to the site owner.
///
/// Delivery failures of any kind collapse into one generic 500; the
/// provider error is logged, never surfaced. No retry, no queueing: a
/// failed attempt is simply lost and the visitor may resubmit.
pub async fn action(
    State(app): State<AppState>,
    Json(input): Json<ContactSubmission>,
) -> impl IntoResponse {
    if input.validate().is_err() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "All fields are required." })),
        );
    }

    let email = input.into_email(&app.config.email);

    match app.mailer.send(email).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Message sent successfully!" })),
        ),
        Err(err) => {
            tracing::error!(err = %err, "failed to relay contact message");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to send message." })),
            )
        }
    }
}

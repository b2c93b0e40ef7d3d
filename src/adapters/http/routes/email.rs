use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
};
use serde::Deserialize;
use serde_json::json;

use crate::{adapters::http::app_state::AppState, app_error::AppError};

#[derive(Deserialize)]
struct RelayPayload {
    email: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/email", any(relay_email))
}

/// ANY /api/email
/// Sends the welcome email to `{email}`. Only POST does work; OPTIONS is an
/// empty 200 for clients that preflight without CORS headers.
async fn relay_email(
    State(app_state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    if method != Method::POST {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(json!({ "error": "Method not allowed" })),
        )
            .into_response();
    }

    let email = serde_json::from_slice::<RelayPayload>(&body)
        .ok()
        .and_then(|p| p.email)
        .filter(|e| !e.is_empty());
    let Some(email) = email else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Email is required" })),
        )
            .into_response();
    };

    match app_state.mail_relay_use_cases.send_welcome(&email).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Email sent successfully" })),
        )
            .into_response(),
        Err(AppError::InvalidInput(_)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Email is required" })),
        )
            .into_response(),
        Err(err) => {
            let details = match err {
                AppError::Mail(details) => details,
                other => other.to_string(),
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to send email", "details": details })),
            )
                .into_response()
        }
    }
}

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState,
    domain::entities::submission_status::SubmissionStatus,
    use_cases::waitlist::{SubmissionFailure, SubmissionOutcome, WaitlistUseCases},
};

#[derive(Deserialize)]
struct SubmitPayload {
    #[serde(default)]
    email: Option<serde_json::Value>,
}

#[derive(Serialize)]
struct SubmitResponse {
    status: SubmissionStatus,
    message: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(submit))
}

/// POST /api/waitlist
async fn submit(
    State(waitlist): State<Arc<WaitlistUseCases>>,
    payload: Result<Json<SubmitPayload>, JsonRejection>,
) -> impl IntoResponse {
    // Anything that is not a JSON string counts as an empty field.
    let email = payload
        .ok()
        .and_then(|Json(p)| p.email)
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_default();

    let outcome = waitlist.submit(&email).await;
    (
        status_code(&outcome),
        Json(SubmitResponse {
            status: outcome.status,
            message: outcome.message,
        }),
    )
}

fn status_code(outcome: &SubmissionOutcome) -> StatusCode {
    match (outcome.status, outcome.failure) {
        (SubmissionStatus::Success, _) => StatusCode::CREATED,
        (SubmissionStatus::Duplicate, _) => StatusCode::OK,
        (_, Some(SubmissionFailure::Input)) => StatusCode::BAD_REQUEST,
        (_, Some(SubmissionFailure::Network)) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
};

const SESSION_COOKIE: &str = "admin_token";

#[derive(Deserialize)]
struct LoginPayload {
    pin: String,
}

#[derive(Serialize)]
struct EntriesResponse {
    items: Vec<WaitlistEntry>,
    total: usize,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/entries", get(list_entries))
        .route("/entries/export", get(export_entries))
}

/// POST /api/admin/login
async fn login(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginPayload>,
) -> AppResult<impl IntoResponse> {
    let admin = &app_state.admin_use_cases;
    let token = admin.login(&payload.pin)?;

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(admin.session_ttl())
        .build();

    Ok((StatusCode::NO_CONTENT, jar.add(cookie)))
}

/// POST /api/admin/logout
async fn logout(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (StatusCode::NO_CONTENT, jar)
}

/// GET /api/admin/entries
async fn list_entries(
    State(app_state): State<AppState>,
    cookies: CookieJar,
) -> AppResult<impl IntoResponse> {
    require_admin(&cookies, &app_state)?;
    let items = app_state.admin_use_cases.list_entries().await?;
    Ok(Json(EntriesResponse {
        total: items.len(),
        items,
    }))
}

/// GET /api/admin/entries/export
async fn export_entries(
    State(app_state): State<AppState>,
    cookies: CookieJar,
) -> AppResult<impl IntoResponse> {
    require_admin(&cookies, &app_state)?;
    let export = app_state.admin_use_cases.export_csv(Utc::now()).await?;
    let disposition = format!("attachment; filename=\"{}\"", export.filename);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv;charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.body,
    ))
}

fn require_admin(cookies: &CookieJar, app_state: &AppState) -> AppResult<()> {
    let token = cookies
        .get(SESSION_COOKIE)
        .ok_or(AppError::InvalidCredentials)?;
    app_state.admin_use_cases.authorize(token.value())
}

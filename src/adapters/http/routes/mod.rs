pub mod admin;
pub mod email;
pub mod waitlist;

use axum::Router;

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(waitlist::router())
        .merge(email::router())
        .nest("/admin", admin::router())
}

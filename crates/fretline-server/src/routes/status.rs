//! Root status route.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use fretline_chat::StatusResponse;

use crate::state::AppState;

pub const STATUS_MESSAGE: &str = "Guitar tutor relay is running";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(get_status))
}

/// GET / — liveness banner, independent of the provider.
async fn get_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: STATUS_MESSAGE.into(),
    })
}

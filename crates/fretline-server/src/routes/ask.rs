//! Question relay route.
//!
//! Every outcome answers 200 with `{"answer": ...}`; callers tell failures
//! apart only by the text.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use fretline_chat::{AskRequest, AskResponse};
use fretline_core::{Error, Result};
use tracing::{debug, warn};

use crate::state::AppState;

pub const EMPTY_QUESTION_ANSWER: &str = "Please enter a valid question.";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/ask", post(ask_question))
}

/// POST /ask — forward a question to the completion provider.
///
/// The body is read raw, and body-read rejections (e.g. the size limit) are
/// kept, so that every failure becomes an answer string rather than an
/// extractor rejection.
async fn ask_question(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Json<AskResponse> {
    let result = match body {
        Ok(body) => answer_question(&state, &body).await,
        Err(rejection) => Err(Error::Parse(rejection.body_text())),
    };

    let answer = match result {
        Ok(answer) => answer,
        Err(e) => {
            warn!("Ask failed: {:?}", e);
            format!("An error occurred: {}", e)
        }
    };

    Json(AskResponse { answer })
}

async fn answer_question(state: &AppState, body: &[u8]) -> Result<String> {
    let req = AskRequest::from_slice(body)?;

    let question = req.question.trim();
    if question.is_empty() {
        return Ok(EMPTY_QUESTION_ANSWER.into());
    }

    debug!("Relaying question ({} chars)", question.chars().count());
    fretline_chat::ask(state.provider.as_ref(), question).await
}

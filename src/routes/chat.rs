use axum::{Json, body::Bytes, extract::State};

use crate::{
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

/// The body is taken raw so that a missing content type or broken JSON still
/// gets the fallback reply instead of an extractor rejection.
pub async fn chat_handler(State(state): State<SharedState>, body: Bytes) -> Json<ChatResponse> {
    let payload = ChatRequest::from_body(&body);

    let intent = state.responder.classify(payload.text());
    tracing::debug!(%intent, len = payload.text().len(), "reply selected");

    Json(ChatResponse {
        reply: intent.reply().to_string(),
    })
}

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;

use crate::handlers::common::ErrorResponse;
use crate::state::AppState;
use terrascope_types::{ChatError, ChatReply, ChatRequest};

/// POST /api/v1/chat - Run one chat turn
pub async fn post_chat(
	State(state): State<AppState>,
	Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, (StatusCode, Json<ErrorResponse>)> {
	let reply = state
		.chat_service
		.chat(request)
		.await
		.map_err(|error| match error {
			// Clients match on the `error` field itself for chat validation
			// failures, so it carries the human-readable text.
			ChatError::Validation(e) => (
				StatusCode::BAD_REQUEST,
				Json(ErrorResponse::new(e.to_string(), "chat request failed validation")),
			),
			ChatError::Storage(e) => (
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(ErrorResponse::new("STORAGE_ERROR", e)),
			),
			ChatError::Internal { reason } => (
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(ErrorResponse::new("CHAT_ERROR", reason)),
			),
		})?;

	info!(
		conversation_id = %reply.conversation_id,
		messages = reply.context.message_count,
		"returning chat reply"
	);
	Ok(Json(reply))
}

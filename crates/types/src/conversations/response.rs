//! Chat reply model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of the conversation state after a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContextSummary {
	pub message_count: usize,
	pub has_location: bool,
	pub has_analysis_data: bool,
}

/// Outgoing chat turn
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
	pub success: bool,
	pub response: String,
	pub conversation_id: String,
	pub timestamp: DateTime<Utc>,
	pub context: ChatContextSummary,
}

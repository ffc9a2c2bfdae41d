//! Conversation models for the chat overlay

pub mod errors;
pub mod request;
pub mod response;

pub use errors::{ChatError, ChatValidationError};
pub use request::{ChatContext, ChatRequest};
pub use response::{ChatContextSummary, ChatReply};

use crate::analysis::AnalysisResult;
use crate::Coordinates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
	User,
	Assistant,
}

/// One turn of an exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
	pub role: MessageRole,
	pub text: String,
	pub timestamp: DateTime<Utc>,
}

impl Message {
	pub fn now(role: MessageRole, text: impl Into<String>) -> Self {
		Self {
			role,
			text: text.into(),
			timestamp: Utc::now(),
		}
	}
}

/// One ongoing exchange, bounded to the most recent messages
///
/// Held in memory only; records are gone on process restart by design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRecord {
	pub conversation_id: String,
	pub messages: Vec<Message>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_location: Option<Coordinates>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_analysis: Option<AnalysisResult>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl ConversationRecord {
	pub fn new(conversation_id: impl Into<String>) -> Self {
		let now = Utc::now();
		Self {
			conversation_id: conversation_id.into(),
			messages: Vec::new(),
			last_location: None,
			last_analysis: None,
			created_at: now,
			updated_at: now,
		}
	}

	/// Append preserving insertion order, dropping the oldest entries once
	/// the sliding window exceeds `max_messages`.
	pub fn push_bounded(&mut self, message: Message, max_messages: usize) {
		self.messages.push(message);
		if self.messages.len() > max_messages {
			let excess = self.messages.len() - max_messages;
			self.messages.drain(..excess);
		}
		self.updated_at = Utc::now();
	}

	pub fn message_count(&self) -> usize {
		self.messages.len()
	}
}

/// Shallow patch applied to a record's derived context, last writer wins
#[derive(Debug, Clone, Default)]
pub struct ContextPatch {
	pub last_location: Option<Coordinates>,
	pub last_analysis: Option<AnalysisResult>,
}

/// Read view used to assemble the prompt for the chat collaborator
#[derive(Debug, Clone, Default)]
pub struct ConversationContext {
	pub history: Vec<Message>,
	pub last_location: Option<Coordinates>,
	pub last_analysis: Option<AnalysisResult>,
	pub message_count: usize,
}

//! Conversation lifecycle on top of the storage backend
//!
//! Assigns stable conversation ids, appends bounded history and assembles
//! the read view the chat collaborator prompts from.

use std::sync::Arc;
use terrascope_config::Settings;
use terrascope_storage::{ConversationStore, Storage};
use terrascope_types::{
	ChatError, ContextPatch, ConversationContext, ConversationRecord, Coordinates, Message,
};
use uuid::Uuid;

pub struct ConversationService {
	storage: Arc<dyn Storage>,
	max_messages: usize,
}

impl ConversationService {
	pub fn new(storage: Arc<dyn Storage>, settings: &Settings) -> Self {
		Self {
			storage,
			max_messages: settings.conversation.max_messages,
		}
	}

	/// Pick the conversation id for a turn. An explicit id always wins;
	/// otherwise a user id keys the thread, then a coordinate bucket, and a
	/// fully anonymous turn gets a fresh id of its own.
	pub fn ensure_id(
		conversation_id: Option<&str>,
		user_id: Option<&str>,
		coordinates: Option<Coordinates>,
	) -> String {
		if let Some(id) = conversation_id {
			if !id.trim().is_empty() {
				return id.to_string();
			}
		}
		if let Some(user) = user_id {
			if !user.trim().is_empty() {
				return format!("user-{}", user.trim());
			}
		}
		if let Some(coords) = coordinates {
			return format!("geo-{}", coords.rounded_key(3));
		}
		Uuid::new_v4().to_string()
	}

	pub async fn append_message(
		&self,
		id: &str,
		message: Message,
	) -> Result<ConversationRecord, ChatError> {
		self.storage
			.append_message(id, message, self.max_messages)
			.await
			.map_err(|e| ChatError::Storage(e.to_string()))
	}

	pub async fn merge_context(&self, id: &str, patch: ContextPatch) -> Result<(), ChatError> {
		self.storage
			.merge_context(id, patch)
			.await
			.map_err(|e| ChatError::Storage(e.to_string()))
	}

	/// Assemble the read view for a conversation; an unknown id yields the
	/// neutral empty context rather than an error.
	pub async fn build_context(&self, id: &str) -> Result<ConversationContext, ChatError> {
		let record = self
			.storage
			.get_conversation(id)
			.await
			.map_err(|e| ChatError::Storage(e.to_string()))?;

		Ok(match record {
			Some(record) => ConversationContext {
				message_count: record.message_count(),
				history: record.messages,
				last_location: record.last_location,
				last_analysis: record.last_analysis,
			},
			None => ConversationContext::default(),
		})
	}
}

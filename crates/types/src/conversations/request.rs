//! Chat request model

use super::errors::ChatValidationError;
use crate::analysis::AnalysisResult;
use crate::Coordinates;
use serde::{Deserialize, Serialize};

/// Spatial context supplied with a chat turn
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub coordinates: Option<Coordinates>,
}

/// One incoming chat turn
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
	pub message: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub context: Option<ChatContext>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub analysis_data: Option<AnalysisResult>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user_id: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub conversation_id: Option<String>,
}

impl ChatRequest {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			context: None,
			analysis_data: None,
			user_id: None,
			conversation_id: None,
		}
	}

	pub fn validate(&self) -> Result<(), ChatValidationError> {
		if self.message.trim().is_empty() {
			return Err(ChatValidationError::MessageRequired);
		}
		Ok(())
	}

	pub fn coordinates(&self) -> Option<Coordinates> {
		self.context.as_ref().and_then(|c| c.coordinates)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_blank_message_rejected() {
		assert!(ChatRequest::new("").validate().is_err());
		assert!(ChatRequest::new("  \t ").validate().is_err());
		assert!(ChatRequest::new("is it raining?").validate().is_ok());
	}

	#[test]
	fn test_deserializes_minimal_body() {
		let request: ChatRequest = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
		assert!(request.user_id.is_none());
		assert!(request.coordinates().is_none());
	}

	#[test]
	fn test_coordinates_come_from_context() {
		let request: ChatRequest = serde_json::from_str(
			r#"{"message": "hi", "context": {"coordinates": {"lat": 13.0, "lng": 80.2}}}"#,
		)
		.unwrap();
		assert_eq!(request.coordinates().unwrap().lat, 13.0);
	}
}

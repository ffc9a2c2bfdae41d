//! Conversational overlay on top of analysis results
//!
//! A chat turn appends to the bounded history, merges any supplied context,
//! asks the responder for a reply and records it. The responder sits behind
//! a trait so a remote model can replace the built-in template renderer; a
//! responder failure degrades to the template rather than failing the turn.

use crate::conversation::ConversationService;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use terrascope_config::Settings;
use terrascope_storage::Storage;
use terrascope_types::{
	ChatContextSummary, ChatError, ChatReply, ChatRequest, ContextPatch, ConversationContext,
	Message, MessageRole, RiskLevel,
};
use thiserror::Error;
use tracing::warn;

/// Everything a responder may draw on for one turn
#[derive(Debug, Clone)]
pub struct ChatPrompt {
	pub message: String,
	pub context: ConversationContext,
}

#[derive(Debug, Error)]
pub enum ResponderError {
	#[error("responder unavailable: {reason}")]
	Unavailable { reason: String },
}

/// Produces the assistant side of a chat turn
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Responder: Send + Sync {
	async fn respond(&self, prompt: &ChatPrompt) -> Result<String, ResponderError>;
}

/// Deterministic reply renderer keyed on the stored analysis context
///
/// Serves as the default responder and as the degradation path when a
/// configured remote responder fails.
#[derive(Debug, Default)]
pub struct TemplateResponder;

impl TemplateResponder {
	pub fn render(prompt: &ChatPrompt) -> String {
		let message = prompt.message.to_lowercase();

		if let Some(analysis) = &prompt.context.last_analysis {
			let place = analysis
				.location_name
				.as_deref()
				.unwrap_or("the selected point");

			let mut reply = match analysis.risk_level {
				RiskLevel::High => format!(
					"Conditions around {} look rough right now; I would hold off on water activities.",
					place
				),
				RiskLevel::Medium => format!(
					"Conditions around {} are moderate; stay cautious and keep an eye on the sea state.",
					place
				),
				RiskLevel::Low => {
					format!("Conditions around {} look calm at the moment.", place)
				},
			};

			if let Some(weather) = &analysis.weather {
				reply.push_str(&format!(
					" It is about {:.0}°C with winds near {:.0} km/h.",
					weather.temperature_c, weather.wind_speed_kmh
				));
			}
			if let Some(marine) = &analysis.marine {
				reply.push_str(&format!(
					" Waves are running around {:.1} m.",
					marine.wave_height_m
				));
			}
			if message.contains("fish") || message.contains("boat") {
				reply.push_str(match analysis.risk_level {
					RiskLevel::Low => " That should be fine for a small boat.",
					_ => " Small craft should stay close to shore.",
				});
			}
			return reply;
		}

		if prompt.context.last_location.is_some() {
			return "I have your location on the map. Run an analysis and I can talk you through the conditions.".to_string();
		}

		"Tell me a place, for example a beach or a town, and I will look at the conditions there."
			.to_string()
	}
}

#[async_trait]
impl Responder for TemplateResponder {
	async fn respond(&self, prompt: &ChatPrompt) -> Result<String, ResponderError> {
		Ok(Self::render(prompt))
	}
}

/// Runs one chat turn end to end
pub struct ChatService {
	conversations: ConversationService,
	responder: Arc<dyn Responder>,
}

impl ChatService {
	pub fn new(storage: Arc<dyn Storage>, responder: Arc<dyn Responder>, settings: &Settings) -> Self {
		Self {
			conversations: ConversationService::new(storage, settings),
			responder,
		}
	}

	pub async fn chat(&self, request: ChatRequest) -> Result<ChatReply, ChatError> {
		request.validate()?;

		let id = ConversationService::ensure_id(
			request.conversation_id.as_deref(),
			request.user_id.as_deref(),
			request.coordinates(),
		);

		self.conversations
			.append_message(&id, Message::now(MessageRole::User, request.message.clone()))
			.await?;

		let patch = ContextPatch {
			last_location: request.coordinates(),
			last_analysis: request.analysis_data.clone(),
		};
		if patch.last_location.is_some() || patch.last_analysis.is_some() {
			self.conversations.merge_context(&id, patch).await?;
		}

		let prompt = ChatPrompt {
			message: request.message,
			context: self.conversations.build_context(&id).await?,
		};

		let response = match self.responder.respond(&prompt).await {
			Ok(text) => text,
			Err(error) => {
				warn!(error = %error, "responder failed, falling back to template reply");
				TemplateResponder::render(&prompt)
			},
		};

		let record = self
			.conversations
			.append_message(&id, Message::now(MessageRole::Assistant, response.clone()))
			.await?;

		Ok(ChatReply {
			success: true,
			response,
			conversation_id: id,
			timestamp: Utc::now(),
			context: ChatContextSummary {
				message_count: record.message_count(),
				has_location: record.last_location.is_some(),
				has_analysis_data: record.last_analysis.is_some(),
			},
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use terrascope_storage::MemoryStore;
	use terrascope_types::{AnalysisResult, ChatContext, Coordinates};

	fn service(responder: Arc<dyn Responder>) -> ChatService {
		ChatService::new(Arc::new(MemoryStore::new()), responder, &Settings::default())
	}

	fn analysis_with_risk(risk: RiskLevel) -> AnalysisResult {
		let mut result = AnalysisResult::location_not_found("x");
		result.location_name = Some("marina beach".to_string());
		result.risk_level = risk;
		result
	}

	#[tokio::test]
	async fn test_turn_appends_both_sides_of_the_exchange() {
		let service = service(Arc::new(TemplateResponder));
		let mut request = ChatRequest::new("is it safe to swim?");
		request.user_id = Some("alice".to_string());

		let reply = service.chat(request).await.unwrap();

		assert!(reply.success);
		assert_eq!(reply.conversation_id, "user-alice");
		assert_eq!(reply.context.message_count, 2);
		assert!(!reply.response.is_empty());
	}

	#[tokio::test]
	async fn test_blank_message_is_rejected() {
		let service = service(Arc::new(TemplateResponder));
		let result = service.chat(ChatRequest::new("   ")).await;
		assert!(matches!(result, Err(ChatError::Validation(_))));
	}

	#[tokio::test]
	async fn test_supplied_context_is_reflected_in_the_summary() {
		let service = service(Arc::new(TemplateResponder));
		let mut request = ChatRequest::new("what about fishing?");
		request.user_id = Some("bob".to_string());
		request.context = Some(ChatContext {
			coordinates: Some(Coordinates::new(13.0418, 80.2841)),
		});
		request.analysis_data = Some(analysis_with_risk(RiskLevel::Medium));

		let reply = service.chat(request).await.unwrap();

		assert!(reply.context.has_location);
		assert!(reply.context.has_analysis_data);
		assert!(reply.response.contains("marina beach"));
	}

	#[tokio::test]
	async fn test_responder_failure_degrades_to_template() {
		let mut mock = MockResponder::new();
		mock.expect_respond().returning(|_| {
			Err(ResponderError::Unavailable {
				reason: "upstream offline".to_string(),
			})
		});

		let service = service(Arc::new(mock));
		let reply = service.chat(ChatRequest::new("hello there")).await.unwrap();

		assert!(reply.success);
		assert!(reply.response.contains("Tell me a place"));
	}

	#[test]
	fn test_template_mentions_risk_for_high_conditions() {
		let prompt = ChatPrompt {
			message: "can we take the boat out?".to_string(),
			context: ConversationContext {
				last_analysis: Some(analysis_with_risk(RiskLevel::High)),
				..Default::default()
			},
		};
		let reply = TemplateResponder::render(&prompt);
		assert!(reply.contains("rough"));
		assert!(reply.contains("close to shore"));
	}
}

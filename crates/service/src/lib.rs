//! Terrascope Service
//!
//! The aggregator's core logic: the analysis orchestrator (cache check,
//! location resolution, concurrent provider fan-out, fallback substitution,
//! risk scoring, composition) and the conversation/chat services.

pub mod analysis;
pub mod chat;
pub mod conversation;
pub mod fallback;
pub mod fingerprint;
pub mod risk;

pub use analysis::AnalysisService;
pub use chat::{ChatPrompt, ChatService, Responder, ResponderError, TemplateResponder};
pub use conversation::ConversationService;
pub use fingerprint::fingerprint;
pub use risk::{classify, RiskSignals};

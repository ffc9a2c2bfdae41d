//! Terrascope Types
//!
//! Core domain types shared across the Terrascope aggregator: geographic
//! primitives, the embedded gazetteer and location resolver, provider
//! contracts, and the analysis / conversation models.

pub mod analysis;
pub mod conversations;
pub mod coords;
pub mod locations;
pub mod providers;

// Re-export external dependencies used in public signatures
pub use chrono;
pub use serde_json;

pub use coords::Coordinates;

pub use locations::{resolve, GazetteerEntry, PlaceKind, Prominence, ResolvedLocation};

pub use providers::{
	ElevationInfo, ImageryProvider, MarineObservation, MarineProvider, ProviderError,
	ProviderKind, ProviderResult, RadarProvider, RadarSnapshot, WeatherObservation,
	WeatherProvider,
};

pub use analysis::{
	AnalysisError, AnalysisRequest, AnalysisResult, AnalysisValidationError, DataPoint,
	LayerKind, MapLayer, RiskLevel, SourceReport,
};

pub use conversations::{
	ChatContext, ChatContextSummary, ChatError, ChatReply, ChatRequest, ChatValidationError,
	ContextPatch, ConversationContext, ConversationRecord, Message, MessageRole,
};

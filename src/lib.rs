//! Terrascope Aggregator Library
//!
//! An environmental-analysis aggregator that resolves free-text place
//! queries against an embedded gazetteer, fans out to weather, marine,
//! radar and elevation providers, and composes a risk-scored result with
//! documented fallbacks for failed sources. A conversational overlay keeps
//! bounded per-conversation context.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

// Core domain types
pub use terrascope_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	AnalysisError,
	AnalysisRequest,
	AnalysisResult,
	ChatError,
	ChatReply,
	ChatRequest,
	Coordinates,
	DataPoint,
	ElevationInfo,
	GazetteerEntry,
	ImageryProvider,
	MapLayer,
	MarineObservation,
	MarineProvider,
	Message,
	MessageRole,
	ProviderError,
	ProviderKind,
	ProviderResult,
	RadarProvider,
	RadarSnapshot,
	ResolvedLocation,
	RiskLevel,
	SourceReport,
	WeatherObservation,
	WeatherProvider,
};

// Service layer
pub use terrascope_service::{
	AnalysisService, ChatService, ConversationService, Responder, ResponderError,
	TemplateResponder,
};

// Storage layer
pub use terrascope_storage::{MemoryStore, Storage, StorageError, StorageResult};

// Storage traits module for advanced usage
pub mod traits {
	pub use terrascope_storage::traits::*;
}

// API layer
pub use terrascope_api::{create_router, AppState};

// Providers
pub use terrascope_providers::{build_http_client, ProviderRegistry};

// Config
pub use terrascope_config::{load_config, log_startup_summary, Settings};

// Re-export external dependencies for integrations and tests
pub use async_trait;
pub use reqwest;

/// Builder pattern for configuring the aggregator
///
/// Every collaborator can be swapped before start: storage for a different
/// backend, the provider registry for mocks, the responder for a remote
/// model. Missing pieces get the production defaults.
pub struct TerrascopeBuilder {
	settings: Option<Settings>,
	storage: Option<Arc<dyn Storage>>,
	providers: Option<ProviderRegistry>,
	responder: Option<Arc<dyn Responder>>,
}

impl Default for TerrascopeBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl TerrascopeBuilder {
	pub fn new() -> Self {
		Self {
			settings: None,
			storage: None,
			providers: None,
			responder: None,
		}
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Swap in a different storage backend
	pub fn with_storage(mut self, storage: Arc<dyn Storage>) -> Self {
		self.storage = Some(storage);
		self
	}

	/// Swap in a different provider registry
	pub fn with_providers(mut self, providers: ProviderRegistry) -> Self {
		self.providers = Some(providers);
		self
	}

	/// Swap in a different chat responder
	pub fn with_responder(mut self, responder: Arc<dyn Responder>) -> Self {
		self.responder = Some(responder);
		self
	}

	/// Wire everything up and return the configured router with state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();

		let storage = self
			.storage
			.unwrap_or_else(|| Arc::new(MemoryStore::new()));
		storage
			.start_background_tasks()
			.await
			.map_err(|e| format!("Failed to start storage maintenance: {}", e))?;

		let providers = match self.providers {
			Some(providers) => providers,
			None => ProviderRegistry::from_settings(&settings)
				.map_err(|e| format!("Failed to build provider clients: {}", e))?,
		};

		let responder = self
			.responder
			.unwrap_or_else(|| Arc::new(TemplateResponder));

		let app_state = AppState {
			analysis_service: Arc::new(AnalysisService::new(
				providers,
				Arc::clone(&storage),
				&settings,
			)),
			chat_service: Arc::new(ChatService::new(
				Arc::clone(&storage),
				responder,
				&settings,
			)),
			storage,
		};

		let router = create_router().with_state(app_state.clone());
		Ok((router, app_state))
	}

	/// Start the complete server: load configuration, initialize tracing,
	/// bind and serve.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		dotenvy::dotenv().ok();

		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config().unwrap_or_default(),
		};

		init_tracing(&settings);
		log_startup_summary(&settings);

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let (app, _) = self.start().await?;

		let listener = tokio::net::TcpListener::bind(addr).await?;
		info!("API endpoints available:");
		info!("  GET  /health");
		info!("  GET  /ready");
		info!("  GET  /capabilities");
		info!("  POST /api/v1/analyze");
		info!("  POST /api/v1/chat");
		info!(address = %bind_addr, "listening");

		axum::serve(listener, app).await?;
		Ok(())
	}
}

fn init_tracing(settings: &Settings) {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.logging.level));
	tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

//! End-to-end test server harness

#![allow(dead_code)]

use terrascope_aggregator::{ProviderRegistry, Settings, TerrascopeBuilder};
use tokio::task::JoinHandle;

/// A server bound to an ephemeral port with mock providers behind it
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

/// Defaults with deterministic cache fingerprints: a zero-width time bucket
/// keeps repeated requests on one cache key for the life of the test.
pub fn test_settings() -> Settings {
	let mut settings = Settings::default();
	settings.cache.time_bucket_secs = 0;
	settings
}

impl TestServer {
	pub async fn spawn(providers: ProviderRegistry) -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with_settings(providers, test_settings()).await
	}

	pub async fn spawn_with_settings(
		providers: ProviderRegistry,
		settings: Settings,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let (router, _state) = TerrascopeBuilder::new()
			.with_settings(settings)
			.with_providers(providers)
			.start()
			.await?;

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let base_url = format!("http://{}", addr);

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, router).await;
		});

		Ok(Self { base_url, handle })
	}

	pub fn abort(&self) {
		self.handle.abort();
	}
}

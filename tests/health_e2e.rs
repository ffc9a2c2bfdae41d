//! End-to-end tests for the health, readiness and capabilities probes

mod mocks;

use mocks::{MockProviderSet, TestServer};
use reqwest::Client;
use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint() {
	let server = TestServer::spawn(MockProviderSet::calm().registry())
		.await
		.unwrap();
	let client = Client::new();

	let resp = client
		.get(format!("{}/health", server.base_url))
		.send()
		.await
		.unwrap();

	assert_eq!(resp.status(), reqwest::StatusCode::OK);
	assert_eq!(resp.text().await.unwrap(), "OK");

	server.abort();
}

#[tokio::test]
async fn test_ready_reports_storage_state() {
	let server = TestServer::spawn(MockProviderSet::calm().registry())
		.await
		.unwrap();
	let client = Client::new();

	let resp = client
		.get(format!("{}/ready", server.base_url))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::OK);

	let body: Value = resp.json().await.unwrap();
	assert_eq!(body["status"], "ready");
	assert_eq!(body["storage_healthy"], true);
	assert!(body.get("cached_analyses").is_some());
	assert!(body.get("conversations").is_some());

	server.abort();
}

#[tokio::test]
async fn test_capabilities_advertises_providers_and_features() {
	let server = TestServer::spawn(MockProviderSet::calm().registry())
		.await
		.unwrap();
	let client = Client::new();

	let body: Value = client
		.get(format!("{}/capabilities", server.base_url))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();

	assert_eq!(body["service"], "terrascope-aggregator");
	assert_eq!(body["version"].as_str().unwrap(), env!("CARGO_PKG_VERSION"));

	let providers = body["providers"].as_array().unwrap();
	assert!(providers.iter().any(|p| p == "marine"));
	assert_eq!(providers.len(), 4);

	assert!(body["knownPlaces"].as_u64().unwrap() > 20);

	server.abort();
}

#[tokio::test]
async fn test_unknown_endpoint_404() {
	let server = TestServer::spawn(MockProviderSet::calm().registry())
		.await
		.unwrap();
	let client = Client::new();

	let resp = client
		.get(format!("{}/unknown-endpoint", server.base_url))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

	server.abort();
}

#[tokio::test]
async fn test_trailing_slash_routes_work() {
	let server = TestServer::spawn(MockProviderSet::calm().registry())
		.await
		.unwrap();
	let client = Client::new();

	let resp = client
		.get(format!("{}/health/", server.base_url))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::OK);

	server.abort();
}

//! End-to-end tests for the analyze endpoint

mod mocks;

use mocks::test_server::test_settings;
use mocks::{MockProviderSet, TestServer};
use reqwest::Client;
use serde_json::{json, Value};

async fn post_analyze(client: &Client, base_url: &str, body: Value) -> reqwest::Response {
	client
		.post(format!("{}/api/v1/analyze", base_url))
		.json(&body)
		.send()
		.await
		.unwrap()
}

#[tokio::test]
async fn test_marine_query_composes_full_result() {
	let providers = MockProviderSet::choppy();
	let server = TestServer::spawn(providers.registry()).await.unwrap();
	let client = Client::new();

	let resp = post_analyze(
		&client,
		&server.base_url,
		json!({"query": "Is it safe to fish at Marina Beach today?"}),
	)
	.await;
	assert_eq!(resp.status(), reqwest::StatusCode::OK);

	let body: Value = resp.json().await.unwrap();
	assert_eq!(body["locationName"], "marina beach");
	assert_eq!(body["riskLevel"], "medium");
	assert_eq!(body["coordinates"]["lat"], 13.0418);
	assert_eq!(body["marine"]["waveHeightM"], 1.2);

	// All four slots live, radar overlay present on top of the two bases.
	let sources = body["sources"].as_array().unwrap();
	assert_eq!(sources.len(), 4);
	assert!(sources.iter().all(|s| s["fallback"] == false));
	let layers = body["layers"].as_array().unwrap();
	assert_eq!(layers.len(), 3);
	assert!(layers.iter().any(|l| l["id"] == "radar"));

	server.abort();
}

#[tokio::test]
async fn test_repeat_request_hits_cache_without_provider_calls() {
	let providers = MockProviderSet::calm();
	let server = TestServer::spawn(providers.registry()).await.unwrap();
	let client = Client::new();

	let body = json!({"query": "surfing at marina beach"});
	let first: Value = post_analyze(&client, &server.base_url, body.clone())
		.await
		.json()
		.await
		.unwrap();
	let second: Value = post_analyze(&client, &server.base_url, body)
		.await
		.json()
		.await
		.unwrap();

	assert_eq!(first["generatedAt"], second["generatedAt"]);
	assert_eq!(providers.weather.call_count(), 1);
	assert_eq!(providers.marine.call_count(), 1);
	assert_eq!(providers.radar.call_count(), 1);
	assert_eq!(providers.elevation.call_count(), 1);

	server.abort();
}

#[tokio::test]
async fn test_expired_cache_entry_triggers_fresh_provider_calls() {
	let providers = MockProviderSet::calm();

	// A zero TTL expires every cached result immediately, so the repeat
	// request has to go back to the providers.
	let mut settings = test_settings();
	settings.cache.ttl_secs = 0;

	let server = TestServer::spawn_with_settings(providers.registry(), settings)
		.await
		.unwrap();
	let client = Client::new();

	let body = json!({"query": "surfing at marina beach"});
	post_analyze(&client, &server.base_url, body.clone()).await;
	post_analyze(&client, &server.base_url, body).await;

	assert_eq!(providers.weather.call_count(), 2);
	assert_eq!(providers.marine.call_count(), 2);
	assert_eq!(providers.radar.call_count(), 2);
	assert_eq!(providers.elevation.call_count(), 2);

	server.abort();
}

#[tokio::test]
async fn test_all_providers_down_still_returns_a_result() {
	let providers = MockProviderSet::failing();
	let server = TestServer::spawn(providers.registry()).await.unwrap();
	let client = Client::new();

	let resp = post_analyze(
		&client,
		&server.base_url,
		json!({"query": "boating near besant nagar beach"}),
	)
	.await;
	assert_eq!(resp.status(), reqwest::StatusCode::OK);

	let body: Value = resp.json().await.unwrap();
	let sources = body["sources"].as_array().unwrap();
	assert!(!sources.is_empty());
	assert!(sources.iter().all(|s| s["fallback"] == true));
	// Fallback values alone never raise the classification.
	assert_eq!(body["riskLevel"], "low");
	assert!(!body["notes"].as_array().unwrap().is_empty());
	assert!(!body["layers"]
		.as_array()
		.unwrap()
		.iter()
		.any(|l| l["id"] == "radar"));

	server.abort();
}

#[tokio::test]
async fn test_slow_provider_times_out_into_fallback() {
	let mut providers = MockProviderSet::calm();
	providers.weather = mocks::providers::MockWeather::slow(mocks::providers::calm_weather(), 2_000);

	let mut settings = test_settings();
	settings.timeouts.per_provider_ms = 200;

	let server = TestServer::spawn_with_settings(providers.registry(), settings)
		.await
		.unwrap();
	let client = Client::new();

	let body: Value = post_analyze(
		&client,
		&server.base_url,
		json!({"query": "weather in chennai"}),
	)
	.await
	.json()
	.await
	.unwrap();

	let sources = body["sources"].as_array().unwrap();
	let weather = sources
		.iter()
		.find(|s| s["provider"] == "weather")
		.unwrap();
	assert_eq!(weather["fallback"], true);
	// Other slots were unaffected by the stuck one.
	let elevation = sources
		.iter()
		.find(|s| s["provider"] == "elevation")
		.unwrap();
	assert_eq!(elevation["fallback"], false);

	server.abort();
}

#[tokio::test]
async fn test_non_marine_query_never_calls_the_marine_provider() {
	let providers = MockProviderSet::calm();
	let server = TestServer::spawn(providers.registry()).await.unwrap();
	let client = Client::new();

	let body: Value = post_analyze(
		&client,
		&server.base_url,
		json!({"query": "weather in udhagamandalam"}),
	)
	.await
	.json()
	.await
	.unwrap();

	assert!(body.get("marine").is_none());
	assert_eq!(providers.marine.call_count(), 0);

	server.abort();
}

#[tokio::test]
async fn test_unknown_place_returns_not_found_result() {
	let providers = MockProviderSet::calm();
	let server = TestServer::spawn(providers.registry()).await.unwrap();
	let client = Client::new();

	let resp = post_analyze(
		&client,
		&server.base_url,
		json!({"query": "conditions at zzkx qwpv"}),
	)
	.await;
	assert_eq!(resp.status(), reqwest::StatusCode::OK);

	let body: Value = resp.json().await.unwrap();
	assert!(body.get("coordinates").is_none());
	assert!(body["sources"].as_array().unwrap().is_empty());
	assert_eq!(providers.weather.call_count(), 0);

	server.abort();
}

#[tokio::test]
async fn test_explicit_coordinates_skip_resolution() {
	let providers = MockProviderSet::calm();
	let server = TestServer::spawn(providers.registry()).await.unwrap();
	let client = Client::new();

	let body: Value = post_analyze(
		&client,
		&server.base_url,
		json!({
			"query": "swimming here",
			"coordinates": {"lat": 12.6208, "lng": 80.1945}
		}),
	)
	.await
	.json()
	.await
	.unwrap();

	assert_eq!(body["coordinates"]["lat"], 12.6208);
	assert!(body.get("locationName").is_none());
	assert!(body.get("marine").is_some());

	server.abort();
}

#[tokio::test]
async fn test_blank_query_is_rejected() {
	let providers = MockProviderSet::calm();
	let server = TestServer::spawn(providers.registry()).await.unwrap();
	let client = Client::new();

	let resp = post_analyze(&client, &server.base_url, json!({"query": "   "})).await;
	assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

	let body: Value = resp.json().await.unwrap();
	assert_eq!(body["error"], "VALIDATION_ERROR");
	assert!(body.get("timestamp").is_some());

	server.abort();
}

#[tokio::test]
async fn test_out_of_range_coordinates_are_rejected() {
	let providers = MockProviderSet::calm();
	let server = TestServer::spawn(providers.registry()).await.unwrap();
	let client = Client::new();

	let resp = post_analyze(
		&client,
		&server.base_url,
		json!({"query": "anything", "coordinates": {"lat": 95.0, "lng": 80.0}}),
	)
	.await;
	assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

	server.abort();
}

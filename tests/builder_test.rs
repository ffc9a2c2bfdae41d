//! Tests for the aggregator builder wiring

mod mocks;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use mocks::MockProviderSet;
use std::sync::Arc;
use terrascope_aggregator::{MemoryStore, Storage, TerrascopeBuilder};
use tower::ServiceExt;

#[tokio::test]
async fn test_builder_wires_defaults() {
	let (router, state) = TerrascopeBuilder::new()
		.with_providers(MockProviderSet::calm().registry())
		.start()
		.await
		.unwrap();

	assert!(state.storage.health_check().await.unwrap());

	let response = router
		.oneshot(
			Request::builder()
				.uri("/health")
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_builder_accepts_custom_storage() {
	let storage = Arc::new(MemoryStore::new());
	let (_router, state) = TerrascopeBuilder::new()
		.with_storage(storage.clone())
		.with_providers(MockProviderSet::calm().registry())
		.start()
		.await
		.unwrap();

	// The state holds the storage we provided, not a fresh one.
	let stats_before = state.storage.stats().await.unwrap();
	assert_eq!(stats_before.total_conversations, 0);
}

#[tokio::test]
async fn test_router_rejects_wrong_method() {
	let (router, _state) = TerrascopeBuilder::new()
		.with_providers(MockProviderSet::calm().registry())
		.start()
		.await
		.unwrap();

	let response = router
		.oneshot(
			Request::builder()
				.method("GET")
				.uri("/api/v1/analyze")
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

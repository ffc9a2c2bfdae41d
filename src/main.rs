//! Terrascope Aggregator Server
//!
//! Main entry point for the aggregator server

use terrascope_aggregator::TerrascopeBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	TerrascopeBuilder::new().start_server().await
}

//! Terrascope API
//!
//! Axum-based HTTP surface for the Terrascope aggregator: analysis and chat
//! endpoints plus health, readiness and capability probes.

pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

//! Terrascope Storage
//!
//! Shared mutable state for the aggregator: the fingerprint-keyed analysis
//! cache and the bounded conversation store. Both must be safe for
//! concurrent access from multiple in-flight requests.

pub mod memory_store;
pub mod traits;

pub use memory_store::MemoryStore;
pub use traits::{
	AnalysisCache, ConversationStore, Storage, StorageError, StorageResult, StorageStats,
};

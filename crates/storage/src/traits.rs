//! Storage traits for pluggable backends

use async_trait::async_trait;
use std::time::Duration;
use terrascope_types::{AnalysisResult, ContextPatch, ConversationRecord, Message};
use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

/// Errors from storage operations
#[derive(Debug, Error)]
pub enum StorageError {
	#[error("entry not found: {key}")]
	NotFound { key: String },

	#[error("storage backend error: {reason}")]
	Backend { reason: String },
}

/// Aggregate statistics across both stores
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StorageStats {
	pub total_cached: usize,
	pub active_cached: usize,
	pub total_conversations: usize,
}

/// Fingerprint-keyed cache of composed analysis results
#[async_trait]
pub trait AnalysisCache: Send + Sync {
	/// Fetch a non-expired entry; an entry past its TTL is never returned
	async fn get_analysis(&self, fingerprint: &str) -> StorageResult<Option<AnalysisResult>>;

	/// Store a composed result with a fresh TTL
	async fn put_analysis(
		&self,
		fingerprint: String,
		result: AnalysisResult,
		ttl: Duration,
	) -> StorageResult<()>;

	/// Drop expired entries, returning how many were removed
	async fn cleanup_expired(&self) -> StorageResult<usize>;

	/// (total, non-expired) entry counts
	async fn cache_stats(&self) -> StorageResult<(usize, usize)>;
}

/// Keyed, bounded, in-memory conversation history
///
/// Assumes one writer per conversation id at a time; concurrent turns for
/// the same id race and the last merge wins.
#[async_trait]
pub trait ConversationStore: Send + Sync {
	async fn get_conversation(&self, id: &str) -> StorageResult<Option<ConversationRecord>>;

	/// Append to the bounded history, creating the record on first use.
	/// Returns the record state after the append.
	async fn append_message(
		&self,
		id: &str,
		message: Message,
		max_messages: usize,
	) -> StorageResult<ConversationRecord>;

	/// Shallow-merge derived context into the record, creating it if
	/// missing; fields absent from the patch are left untouched.
	async fn merge_context(&self, id: &str, patch: ContextPatch) -> StorageResult<()>;

	async fn remove_conversation(&self, id: &str) -> StorageResult<bool>;

	async fn conversation_count(&self) -> StorageResult<usize>;
}

/// Umbrella trait for a complete storage backend
#[async_trait]
pub trait Storage: AnalysisCache + ConversationStore {
	async fn health_check(&self) -> StorageResult<bool>;

	async fn stats(&self) -> StorageResult<StorageStats>;

	/// Spawn periodic maintenance (TTL sweeps)
	async fn start_background_tasks(&self) -> StorageResult<()>;
}

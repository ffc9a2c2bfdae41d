//! In-memory storage implementation using DashMap with TTL support

use crate::traits::{
	AnalysisCache, ConversationStore, Storage, StorageResult, StorageStats,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use terrascope_types::{AnalysisResult, ContextPatch, ConversationRecord, Message};
use tokio::time::interval;
use tracing::{debug, info};

/// A cached composed result with its expiry instant
#[derive(Debug, Clone)]
struct CachedAnalysis {
	result: AnalysisResult,
	expires_at: DateTime<Utc>,
}

impl CachedAnalysis {
	fn is_expired(&self) -> bool {
		self.expires_at <= Utc::now()
	}
}

/// In-memory analysis cache and conversation store
///
/// DashMap gives per-entry locking, so concurrent requests for the same
/// location/time bucket are safe without a global lock.
#[derive(Clone, Default)]
pub struct MemoryStore {
	analyses: Arc<DashMap<String, CachedAnalysis>>,
	conversations: Arc<DashMap<String, ConversationRecord>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self {
			analyses: Arc::new(DashMap::new()),
			conversations: Arc::new(DashMap::new()),
		}
	}

	/// Start the periodic sweep that evicts expired cache entries
	pub fn start_ttl_cleanup(&self) -> tokio::task::JoinHandle<()> {
		let analyses = Arc::clone(&self.analyses);
		tokio::spawn(async move {
			let mut cleanup_interval = interval(Duration::from_secs(60));

			loop {
				cleanup_interval.tick().await;

				let now = Utc::now();
				let mut removed = 0usize;
				analyses.retain(|_key, entry| {
					let keep = entry.expires_at > now;
					if !keep {
						removed += 1;
					}
					keep
				});
				if removed > 0 {
					debug!("Cleaned up {} expired analysis entries", removed);
				}
			}
		})
	}
}

#[async_trait]
impl AnalysisCache for MemoryStore {
	async fn get_analysis(&self, fingerprint: &str) -> StorageResult<Option<AnalysisResult>> {
		if let Some(entry) = self.analyses.get(fingerprint) {
			if entry.is_expired() {
				drop(entry);
				self.analyses.remove(fingerprint);
				return Ok(None);
			}
			return Ok(Some(entry.result.clone()));
		}
		Ok(None)
	}

	async fn put_analysis(
		&self,
		fingerprint: String,
		result: AnalysisResult,
		ttl: Duration,
	) -> StorageResult<()> {
		let expires_at = Utc::now()
			+ chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::seconds(300));
		self.analyses
			.insert(fingerprint, CachedAnalysis { result, expires_at });
		Ok(())
	}

	async fn cleanup_expired(&self) -> StorageResult<usize> {
		let now = Utc::now();
		let mut removed = 0usize;
		self.analyses.retain(|_key, entry| {
			let keep = entry.expires_at > now;
			if !keep {
				removed += 1;
			}
			keep
		});
		if removed > 0 {
			info!("Cleaned up {} expired analysis entries", removed);
		}
		Ok(removed)
	}

	async fn cache_stats(&self) -> StorageResult<(usize, usize)> {
		let total = self.analyses.len();
		let active = self
			.analyses
			.iter()
			.filter(|entry| !entry.is_expired())
			.count();
		Ok((total, active))
	}
}

#[async_trait]
impl ConversationStore for MemoryStore {
	async fn get_conversation(&self, id: &str) -> StorageResult<Option<ConversationRecord>> {
		Ok(self.conversations.get(id).map(|record| record.clone()))
	}

	async fn append_message(
		&self,
		id: &str,
		message: Message,
		max_messages: usize,
	) -> StorageResult<ConversationRecord> {
		// entry() holds the shard lock, so the append-and-truncate is atomic
		// per conversation id.
		let mut record = self
			.conversations
			.entry(id.to_string())
			.or_insert_with(|| ConversationRecord::new(id));
		record.push_bounded(message, max_messages);
		Ok(record.clone())
	}

	async fn merge_context(&self, id: &str, patch: ContextPatch) -> StorageResult<()> {
		let mut record = self
			.conversations
			.entry(id.to_string())
			.or_insert_with(|| ConversationRecord::new(id));
		if let Some(location) = patch.last_location {
			record.last_location = Some(location);
		}
		if let Some(analysis) = patch.last_analysis {
			record.last_analysis = Some(analysis);
		}
		record.updated_at = Utc::now();
		Ok(())
	}

	async fn remove_conversation(&self, id: &str) -> StorageResult<bool> {
		Ok(self.conversations.remove(id).is_some())
	}

	async fn conversation_count(&self) -> StorageResult<usize> {
		Ok(self.conversations.len())
	}
}

#[async_trait]
impl Storage for MemoryStore {
	async fn health_check(&self) -> StorageResult<bool> {
		Ok(true)
	}

	async fn stats(&self) -> StorageResult<StorageStats> {
		let (total_cached, active_cached) = self.cache_stats().await?;
		let total_conversations = self.conversation_count().await?;
		Ok(StorageStats {
			total_cached,
			active_cached,
			total_conversations,
		})
	}

	async fn start_background_tasks(&self) -> StorageResult<()> {
		self.start_ttl_cleanup();
		Ok(())
	}
}

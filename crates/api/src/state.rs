use std::sync::Arc;

use terrascope_service::{AnalysisService, ChatService};
use terrascope_storage::Storage;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub analysis_service: Arc<AnalysisService>,
	pub chat_service: Arc<ChatService>,
	pub storage: Arc<dyn Storage>,
}

//! Error types for provider operations

use thiserror::Error;

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Typed failure signalled by a provider client
///
/// A failed call is terminal within a request; the orchestrator substitutes
/// a fallback value and records the provider as degraded. Retries, if any,
/// happen only via a later cache-miss request.
#[derive(Debug, Error)]
pub enum ProviderError {
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("HTTP {status_code}: {reason}")]
	Status { status_code: u16, reason: String },

	#[error("Invalid response format: {reason}")]
	InvalidResponse { reason: String },

	#[error("Timeout occurred after {timeout_ms}ms")]
	Timeout { timeout_ms: u64 },
}

impl ProviderError {
	pub fn invalid(reason: impl Into<String>) -> Self {
		Self::InvalidResponse {
			reason: reason.into(),
		}
	}

	/// Create a status error with a default reason for the code
	pub fn from_status(status_code: u16) -> Self {
		let reason = match status_code {
			400 => "Bad Request".to_string(),
			404 => "Not Found".to_string(),
			408 => "Request Timeout".to_string(),
			429 => "Too Many Requests".to_string(),
			500 => "Internal Server Error".to_string(),
			502 => "Bad Gateway".to_string(),
			503 => "Service Unavailable".to_string(),
			504 => "Gateway Timeout".to_string(),
			_ => format!("HTTP Error {}", status_code),
		};
		Self::Status {
			status_code,
			reason,
		}
	}

	/// Extract the HTTP status code from the error if available
	pub fn status_code(&self) -> Option<u16> {
		match self {
			ProviderError::Status { status_code, .. } => Some(*status_code),
			ProviderError::Http(e) => e.status().map(|s| s.as_u16()),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_code_extraction() {
		assert_eq!(ProviderError::from_status(503).status_code(), Some(503));
		assert_eq!(ProviderError::invalid("bad shape").status_code(), None);
		assert_eq!(
			ProviderError::Timeout { timeout_ms: 4000 }.status_code(),
			None
		);
	}

	#[test]
	fn test_from_status_message_mapping() {
		let error = ProviderError::from_status(429);
		assert!(error.to_string().contains("429"));
		assert!(error.to_string().contains("Too Many Requests"));
	}
}

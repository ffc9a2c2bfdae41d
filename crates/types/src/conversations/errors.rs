//! Error types for chat operations

use thiserror::Error;

/// Validation errors for chat requests
#[derive(Error, Debug)]
pub enum ChatValidationError {
	#[error("Message is required")]
	MessageRequired,
}

/// Errors surfaced by the chat service
#[derive(Error, Debug)]
pub enum ChatError {
	#[error("Chat validation failed: {0}")]
	Validation(#[from] ChatValidationError),

	#[error("Storage error: {0}")]
	Storage(String),

	#[error("Internal chat failure: {reason}")]
	Internal { reason: String },
}

//! Shared fixtures for end-to-end tests

pub mod providers;
pub mod test_server;

pub use providers::MockProviderSet;
pub use test_server::TestServer;

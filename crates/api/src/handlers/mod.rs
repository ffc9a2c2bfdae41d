pub mod analyze;
pub mod chat;
pub mod common;
pub mod health;

pub use analyze::post_analyze;
pub use chat::post_chat;
pub use health::{capabilities, health, ready};

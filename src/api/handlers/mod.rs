//! HTTP request handlers for bridge endpoints.

pub mod health;
pub mod message;

pub use health::health_handler;
pub use message::{dispatch, message_handler};

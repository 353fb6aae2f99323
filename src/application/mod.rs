//! Application layer services implementing business logic.
//!
//! Services consume the domain ports and turn them into the four operations
//! the bridge and CLI expose.
//!
//! # Available Services
//!
//! - [`services::short_link_service::ShortLinkService`] - check connection,
//!   shorten, stats and delete
//!
//! Invalid or missing settings never panic; they surface as
//! `OperationResult::Failure("not configured")`.

pub mod services;

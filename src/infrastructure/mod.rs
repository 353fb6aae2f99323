//! Infrastructure layer for external integrations.
//!
//! This layer implements the ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - reqwest transport to `yourls-api.php`
//! - [`permissions`] - Origin allow list

pub mod http;
pub mod permissions;

//! Domain layer of the short link client.
//!
//! Defines the request/response model, the uniform result contract, the
//! collaborator traits and the response normalizer. Nothing in this layer
//! performs I/O.
//!
//! # Architecture
//!
//! - [`entities`] - Settings, API requests/responses and operation outcomes
//! - [`errors`] - Transport errors and classified failures
//! - [`ports`] - Transport, settings and permission traits
//! - [`normalizer`] - Ordered shape matchers per operation
//!
//! # Request Flow
//!
//! 1. A service reads [`entities::Settings`] from a [`ports::SettingsProvider`]
//! 2. Origin permission is checked via [`ports::PermissionOracle`]
//! 3. A [`ports::Transport`] returns a [`entities::RawApiResponse`]
//! 4. [`normalizer`] classifies it into an [`entities::OperationResult`]

pub mod entities;
pub mod errors;
pub mod normalizer;
pub mod ports;

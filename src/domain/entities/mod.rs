//! Core domain entities of the short link client.
//!
//! All entities are transient and request-scoped; nothing here is persisted.
//!
//! # Entity Types
//!
//! - [`Settings`] - Service URL, API signature and auto-copy flag
//! - [`ApiRequest`] - Parameters of one API call
//! - [`RawApiResponse`] - Unclassified status/body/JSON triple
//! - [`OperationResult`] - Uniform outcome of every operation
//! - [`StatsSummary`] - Display fields of a stats payload
//! - [`ComposeTarget`] - Compose window a request originates from

pub mod api_request;
pub mod compose_target;
pub mod outcome;
pub mod raw_response;
pub mod settings;
pub mod stats_summary;

pub use api_request::ApiRequest;
pub use compose_target::ComposeTarget;
pub use outcome::OperationResult;
pub use raw_response::RawApiResponse;
pub use settings::Settings;
pub use stats_summary::StatsSummary;

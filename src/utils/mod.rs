//! Utility functions for URL processing.
//!
//! - [`url_normalizer`] - Service URL sanitation and origin extraction
//! - [`keyword`] - Short URL to keyword reduction
//! - [`selection`] - Compose selection classification

pub mod keyword;
pub mod selection;
pub mod url_normalizer;

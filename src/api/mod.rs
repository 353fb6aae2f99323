//! Local HTTP bridge for UI layers.
//!
//! Translates JSON messages into core operations and formats their replies.
//! The bridge is meant to listen on loopback only.
//!
//! # Modules
//!
//! - [`dto`] - Message and health DTOs
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

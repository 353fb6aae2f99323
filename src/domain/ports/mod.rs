//! Trait definitions for the collaborators of the client core.
//!
//! The core owns none of its collaborators: configuration, host permissions and
//! the HTTP client are all injected through these traits. Concrete
//! implementations live in [`crate::infrastructure`] and [`crate::config`].
//!
//! # Available Ports
//!
//! - [`Transport`] - Calls the short link service API
//! - [`SettingsProvider`] - Supplies service URL and signature
//! - [`PermissionOracle`] - Grants or denies access to an origin
//!
//! Mock implementations are auto-generated via `mockall` for testing.

pub mod permission_oracle;
pub mod settings_provider;
pub mod transport;

pub use permission_oracle::PermissionOracle;
pub use settings_provider::SettingsProvider;
pub use transport::Transport;

#[cfg(test)]
pub use permission_oracle::MockPermissionOracle;
#[cfg(test)]
pub use settings_provider::MockSettingsProvider;
#[cfg(test)]
pub use transport::MockTransport;

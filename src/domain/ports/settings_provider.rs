//! Source of connection settings.

use crate::domain::entities::Settings;

/// Read-only access to the settings store.
///
/// Read at the start of every operation so that changes made by the options
/// surface apply to the next call.
///
/// # Implementations
///
/// - [`crate::config::Config`] - settings loaded from the environment
#[cfg_attr(test, mockall::automock)]
pub trait SettingsProvider: Send + Sync {
    fn settings(&self) -> Settings;
}

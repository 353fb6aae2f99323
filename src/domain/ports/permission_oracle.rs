//! Host permission checks.

/// Answers whether the core may contact a given origin.
///
/// Consulted before every network call. `origin` is serialized as
/// `scheme://host[:port]` without a trailing slash.
///
/// # Implementations
///
/// - [`crate::infrastructure::permissions::OriginAllowList`] - static allow list
#[cfg_attr(test, mockall::automock)]
pub trait PermissionOracle: Send + Sync {
    fn has_origin_permission(&self, origin: &str) -> bool;
}

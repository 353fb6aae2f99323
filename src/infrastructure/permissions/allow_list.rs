//! Static origin allow list.

use std::collections::HashSet;
use tracing::warn;

use crate::domain::ports::PermissionOracle;
use crate::utils::url_normalizer::origin_of;

/// Grants access to a fixed set of origins.
///
/// Entries may be written as origins (`https://sho.rt`), full URLs
/// (`https://sho.rt/yourls`) or host patterns (`https://sho.rt/*`); all are
/// reduced to their origin. Invalid entries are skipped with a warning.
#[derive(Debug, Clone, Default)]
pub struct OriginAllowList {
    origins: HashSet<String>,
}

impl OriginAllowList {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for entry in entries {
            if !list.grant(entry.as_ref()) {
                warn!("Ignoring invalid allowed origin: {}", entry.as_ref());
            }
        }
        list
    }

    /// Adds an origin. Returns false if `entry` is not an HTTP(S) URL.
    pub fn grant(&mut self, entry: &str) -> bool {
        let entry = entry.trim().trim_end_matches('*');
        match origin_of(entry) {
            Some(origin) => {
                self.origins.insert(origin);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }
}

impl PermissionOracle for OriginAllowList {
    fn has_origin_permission(&self, origin: &str) -> bool {
        origin_of(origin).is_some_and(|o| self.origins.contains(&o))
    }
}

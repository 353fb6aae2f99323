//! Compose window a shortened URL is destined for.

use serde::{Deserialize, Serialize};

/// Identifies the compose window that requested an operation.
///
/// The core never remembers the "last active" window; callers pass the target
/// along with the request and receive it back with the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComposeTarget {
    pub tab_id: u64,
}

impl ComposeTarget {
    pub fn new(tab_id: u64) -> Self {
        Self { tab_id }
    }
}

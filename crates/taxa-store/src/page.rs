//! Paginated read results and continuation tokens.

use serde::{Deserialize, Serialize};

use taxa_types::{CategoryNode, NodeKey};

/// An opaque continuation token returned by a partial read.
///
/// A token is only meaningful to the backend that produced it and only for
/// the same read it came from (same partition for a query, any position for
/// a scan). Callers thread it back unchanged to fetch the next page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageToken(NodeKey);

impl PageToken {
    /// A token resuming immediately after the given key.
    pub fn after(key: NodeKey) -> Self {
        Self(key)
    }

    /// The last key evaluated before the page boundary.
    pub fn last_evaluated(&self) -> &NodeKey {
        &self.0
    }
}

/// One page of a partitioned or full-table read.
#[derive(Clone, Debug, Default)]
pub struct Page {
    /// Records in this page, in storage order.
    pub items: Vec<CategoryNode>,
    /// Continuation for the next page; `None` when the read is exhausted.
    pub next: Option<PageToken>,
}

impl Page {
    /// A page with no items and no continuation.
    pub fn empty() -> Self {
        Self::default()
    }
}

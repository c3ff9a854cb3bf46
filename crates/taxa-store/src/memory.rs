//! In-memory table store for testing and ephemeral use.
//!
//! [`InMemoryTableStore`] keeps all records in a `BTreeMap` protected by a
//! `RwLock`. It implements the full [`TableStore`] trait, including bounded
//! pages, so pagination-following code paths are exercised the same way they
//! would be against a remote backend.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::RwLock;

use taxa_types::{CategoryNode, NodeKey};

use crate::error::{StoreError, StoreResult};
use crate::page::{Page, PageToken};
use crate::traits::TableStore;

/// Default maximum number of records returned per page.
const DEFAULT_PAGE_SIZE: usize = 100;

/// An in-memory implementation of [`TableStore`].
///
/// Records are ordered by `(category, subcategory)`, so a partition is a
/// contiguous key range. Data is lost when the store is dropped.
pub struct InMemoryTableStore {
    items: RwLock<BTreeMap<(String, String), CategoryNode>>,
    page_size: usize,
}

impl InMemoryTableStore {
    /// Create a new empty store with the default page size.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Create a store that returns at most `page_size` records per page.
    ///
    /// Small page sizes are useful in tests to force continuation handling.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
            page_size: page_size.max(1),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.items.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.read().expect("lock poisoned").is_empty()
    }

    /// Remove all records.
    pub fn clear(&self) {
        self.items.write().expect("lock poisoned").clear();
    }

    fn lower_bound(start: Option<PageToken>) -> Bound<(String, String)> {
        match start {
            Some(token) => {
                let key = token.last_evaluated();
                Bound::Excluded((key.category.clone(), key.subcategory.clone()))
            }
            None => Bound::Unbounded,
        }
    }
}

impl Default for InMemoryTableStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TableStore for InMemoryTableStore {
    fn get(&self, key: &NodeKey) -> StoreResult<Option<CategoryNode>> {
        let map = self.items.read().expect("lock poisoned");
        Ok(map
            .get(&(key.category.clone(), key.subcategory.clone()))
            .cloned())
    }

    fn put(&self, node: &CategoryNode) -> StoreResult<()> {
        let mut map = self.items.write().expect("lock poisoned");
        map.insert(
            (node.category.clone(), node.subcategory.clone()),
            node.clone(),
        );
        Ok(())
    }

    fn delete(&self, key: &NodeKey) -> StoreResult<()> {
        let mut map = self.items.write().expect("lock poisoned");
        map.remove(&(key.category.clone(), key.subcategory.clone()));
        Ok(())
    }

    fn query_partition(&self, category: &str, start: Option<PageToken>) -> StoreResult<Page> {
        if let Some(ref token) = start {
            if token.last_evaluated().category != category {
                return Err(StoreError::InvalidToken(format!(
                    "token for partition '{}' used to query '{}'",
                    token.last_evaluated().category,
                    category
                )));
            }
        }

        let lower = match start {
            Some(token) => {
                let key = token.last_evaluated();
                Bound::Excluded((key.category.clone(), key.subcategory.clone()))
            }
            None => Bound::Included((category.to_string(), String::new())),
        };

        let map = self.items.read().expect("lock poisoned");
        let mut items = Vec::new();
        let mut next = None;
        for ((cat, _), node) in map.range((lower, Bound::Unbounded)) {
            if cat != category {
                break;
            }
            if items.len() == self.page_size {
                next = Some(PageToken::after(node_key_before(&items)));
                break;
            }
            items.push(node.clone());
        }
        Ok(Page { items, next })
    }

    fn scan(&self, start: Option<PageToken>) -> StoreResult<Page> {
        let lower = Self::lower_bound(start);
        let map = self.items.read().expect("lock poisoned");
        let mut items = Vec::new();
        let mut next = None;
        for (_, node) in map.range((lower, Bound::Unbounded)) {
            if items.len() == self.page_size {
                next = Some(PageToken::after(node_key_before(&items)));
                break;
            }
            items.push(node.clone());
        }
        Ok(Page { items, next })
    }
}

/// Key of the last record already accepted into the page.
fn node_key_before(items: &[CategoryNode]) -> NodeKey {
    let last = items.last().expect("page boundary implies a full page");
    last.key()
}

impl std::fmt::Debug for InMemoryTableStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTableStore")
            .field("record_count", &self.len())
            .field("page_size", &self.page_size)
            .finish()
    }
}

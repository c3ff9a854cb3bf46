//! The [`TableStore`] trait defining the storage interface.
//!
//! Any backend (in-memory, remote key-value service) implements this trait
//! to hold taxonomy records under a two-part primary key.

use taxa_types::{CategoryNode, NodeKey};

use crate::error::StoreResult;
use crate::page::{Page, PageToken};

/// Storage backend for taxonomy records.
///
/// Implementations must be thread-safe (`Send + Sync`) and provide per-item
/// atomicity for `put` and `delete`. Nothing beyond per-item atomicity is
/// assumed: multi-call sequences composed by callers are not transactional.
pub trait TableStore: Send + Sync {
    /// Read the record at `key`.
    ///
    /// Returns `Ok(None)` if no record exists.
    fn get(&self, key: &NodeKey) -> StoreResult<Option<CategoryNode>>;

    /// Write (create or replace) a record at its own key.
    fn put(&self, node: &CategoryNode) -> StoreResult<()>;

    /// Delete the record at `key`.
    ///
    /// Deleting an absent key is not an error; callers that care about
    /// existence check with [`TableStore::get`] first.
    fn delete(&self, key: &NodeKey) -> StoreResult<()>;

    /// Read one page of records whose partition key equals `category`
    /// (case-sensitive exact match), resuming after `start` if given.
    fn query_partition(&self, category: &str, start: Option<PageToken>) -> StoreResult<Page>;

    /// Read one page of the full table, resuming after `start` if given.
    fn scan(&self, start: Option<PageToken>) -> StoreResult<Page>;

    /// Read an entire partition, following continuations until exhausted.
    ///
    /// Default implementation loops over [`TableStore::query_partition`].
    fn query_partition_all(&self, category: &str) -> StoreResult<Vec<CategoryNode>> {
        let mut items = Vec::new();
        let mut start = None;
        loop {
            let page = self.query_partition(category, start)?;
            items.extend(page.items);
            match page.next {
                Some(token) => start = Some(token),
                None => return Ok(items),
            }
        }
    }

    /// Read the entire table, following continuations until exhausted.
    ///
    /// Default implementation loops over [`TableStore::scan`].
    fn scan_all(&self) -> StoreResult<Vec<CategoryNode>> {
        let mut items = Vec::new();
        let mut start = None;
        loop {
            let page = self.scan(start)?;
            items.extend(page.items);
            match page.next {
                Some(token) => start = Some(token),
                None => return Ok(items),
            }
        }
    }
}

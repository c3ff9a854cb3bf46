//! The taxonomy store: every read, write, and delete against the category
//! hierarchy, with its invariants enforced.
//!
//! # Concurrency
//!
//! The store is stateless between invocations and performs no locking of
//! its own; it relies on the backend's per-item atomicity for the final
//! write or delete. Check-then-write sequences ("parent exists, then write
//! child"; "partition is empty, then delete main") are two separate storage
//! calls, so concurrent callers can race through the window between them
//! (e.g. a main category deleted while a subcategory add is in flight).
//! This window is a property of the storage contract, not something the
//! store papers over with a transaction.

use tracing::debug;

use taxa_store::TableStore;
use taxa_types::{infer_level, normalize, require_non_empty, CategoryNode, NodeKey};

use crate::error::{TaxonomyError, TaxonomyResult};
use crate::requests::{AddRequest, DeleteRequest};

/// Stateless request handlers over an injected [`TableStore`] backend.
///
/// Every operation is synchronous, single-attempt, and bounded: one to
/// three storage round-trips, at most one write or delete, and no
/// read-after-write confirmation.
pub struct TaxonomyStore<S> {
    store: S,
}

impl<S: TableStore> TaxonomyStore<S> {
    /// Create a taxonomy store over the given backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying backend.
    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Add a main category or subcategory.
    ///
    /// Identifiers are normalized to lowercase before any lookup or write;
    /// the description is stored verbatim. On success the written record is
    /// echoed back without a confirming re-read. Every failure path leaves
    /// the table untouched.
    pub fn add(&self, req: &AddRequest) -> TaxonomyResult<CategoryNode> {
        let category = require_non_empty("category", &req.category)?;
        if req.description.is_empty() {
            return Err(TaxonomyError::Validation {
                field: "description",
            });
        }

        // An absent or empty subcategory means a main-category add.
        let subcategory = req
            .subcategory
            .as_deref()
            .map(normalize)
            .filter(|s| !s.is_empty());

        let node = match subcategory {
            None => {
                if self.store.get(&NodeKey::main(category.as_str()))?.is_some() {
                    return Err(TaxonomyError::CategoryExists { category });
                }
                CategoryNode::main(category, req.description.clone())
            }
            Some(subcategory) => {
                if self.store.get(&NodeKey::main(category.as_str()))?.is_none() {
                    return Err(TaxonomyError::ParentMissing { category });
                }
                if self
                    .store
                    .get(&NodeKey::new(category.as_str(), subcategory.as_str()))?
                    .is_some()
                {
                    return Err(TaxonomyError::SubcategoryExists {
                        category,
                        subcategory,
                    });
                }
                let level = req.level.unwrap_or_else(|| infer_level(&subcategory));
                CategoryNode::subcategory(category, subcategory, req.description.clone(), level)
            }
        };

        self.store.put(&node)?;
        debug!(
            category = %node.category,
            subcategory = %node.subcategory,
            level = node.level,
            "added taxonomy node"
        );
        Ok(node)
    }

    /// List every record in the table.
    ///
    /// Follows pagination until the scan is exhausted. Order is
    /// storage-defined. Fails only when the backend does.
    pub fn list_all(&self) -> TaxonomyResult<Vec<CategoryNode>> {
        Ok(self.store.scan_all()?)
    }

    /// List every record under `category`, the main record included.
    ///
    /// The partition match is case-sensitive; callers pre-normalize.
    /// An empty partition is reported as not-found.
    pub fn list_by_category(&self, category: &str) -> TaxonomyResult<Vec<CategoryNode>> {
        if category.trim().is_empty() {
            return Err(TaxonomyError::Validation { field: "category" });
        }
        let items = self.store.query_partition_all(category)?;
        if items.is_empty() {
            return Err(TaxonomyError::CategoryNotFound {
                category: category.to_string(),
            });
        }
        Ok(items)
    }

    /// Delete a subcategory record, or the main-category record when no
    /// path is supplied.
    ///
    /// A main-category delete is refused while any subcategory remains in
    /// the partition. A subcategory delete is unconditional once the record
    /// exists: descendants reachable through deeper paths neither block it
    /// nor are cascaded to.
    pub fn delete(&self, req: &DeleteRequest) -> TaxonomyResult<NodeKey> {
        let category = require_non_empty("category", &req.category)?;

        let path = req
            .subcategory_path
            .as_deref()
            .map(normalize)
            .filter(|p| !p.is_empty());

        let key = match path {
            Some(path) => {
                let key = NodeKey::new(category.as_str(), path.as_str());
                if self.store.get(&key)?.is_none() {
                    return Err(TaxonomyError::SubcategoryNotFound {
                        category,
                        subcategory: path,
                    });
                }
                key
            }
            None => {
                let key = NodeKey::main(category.as_str());
                if self.store.get(&key)?.is_none() {
                    return Err(TaxonomyError::MainCategoryNotFound { category });
                }
                let partition = self.store.query_partition_all(&category)?;
                if partition.len() > 1 {
                    return Err(TaxonomyError::HasChildren {
                        category,
                        children: partition.len() - 1,
                    });
                }
                key
            }
        };

        self.store.delete(&key)?;
        debug!(key = %key, "deleted taxonomy node");
        Ok(key)
    }
}

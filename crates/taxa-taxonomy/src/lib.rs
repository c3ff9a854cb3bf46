//! Taxonomy invariant enforcement for the Taxa category store.
//!
//! This crate is the heart of Taxa. It owns every rule that decides whether
//! a write or delete is legal given the current shape of the hierarchy:
//!
//! - a subcategory may only be created under an existing main category;
//! - no key is ever inserted twice;
//! - a main category may only be deleted once its partition holds nothing
//!   but the main record itself;
//! - a node's level is inferred from its path depth unless supplied.
//!
//! Operations are exposed on [`TaxonomyStore`], which is constructed over an
//! injected [`TableStore`](taxa_store::TableStore) backend and returns
//! structured results: storage faults surface as
//! [`TaxonomyError::Storage`], never as panics.

pub mod error;
pub mod requests;
pub mod store;

pub use error::{ErrorKind, TaxonomyError, TaxonomyResult};
pub use requests::{AddRequest, DeleteRequest};
pub use store::TaxonomyStore;

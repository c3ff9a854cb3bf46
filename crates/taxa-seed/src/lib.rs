//! Provisioning bootstrap and bulk sample-data loading for the Taxa
//! category store.
//!
//! Two concerns live here, both outside the request path:
//!
//! - [`bootstrap`] — validating the table definition a deployment expects
//!   and optionally wiping existing records before a reload
//! - [`loader`] — loading the two sample-data formats (a flat entry list
//!   and a structured hierarchy document) and writing them into any
//!   [`TableStore`](taxa_store::TableStore), stamping the enrichment
//!   fields (`attributes`, `subcategory_id`, `last_updated`, `active`)
//!   that the single-item write path never touches
//!
//! Bulk loading writes records directly, bypassing the taxonomy store's
//! invariant checks: seed data is trusted to be shaped correctly, the way
//! a provisioning script's input is.

pub mod bootstrap;
pub mod dataset;
pub mod error;
pub mod loader;

pub use bootstrap::Bootstrap;
pub use dataset::{FlatEntry, HierarchyDoc, MainCategory, ProductCategories, Subcategory};
pub use error::{SeedError, SeedResult};
pub use loader::{load_flat, load_hierarchy, seed_flat, seed_hierarchy};

//! Foundation types for the Taxa category store.
//!
//! This crate provides the core data model shared by every other Taxa crate:
//! the [`CategoryNode`] entity, the [`NodeKey`] two-part primary key, and the
//! path-depth rules that derive a node's hierarchy level from its
//! colon-separated subcategory path.
//!
//! # Key Types
//!
//! - [`CategoryNode`] — A single taxonomy record (main category or subcategory)
//! - [`NodeKey`] — `(category, subcategory)` partition/sort key pair
//! - [`TypeError`] — Input validation failures detected before any storage call
//!
//! # Conventions
//!
//! A main category is marked by a self-referential sort key: its
//! `subcategory` equals its `category`. This is the single sentinel
//! convention used everywhere in the workspace.

pub mod error;
pub mod key;
pub mod node;
pub mod path;

pub use error::{require_non_empty, TypeError};
pub use key::NodeKey;
pub use node::CategoryNode;
pub use path::{infer_level, normalize, MAIN_LEVEL, SEPARATOR};

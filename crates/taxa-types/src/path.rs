//! Subcategory path parsing and hierarchy level inference.
//!
//! Subcategories may be nested using colon-separated paths
//! (`"mobiles:apple"`). A node's level is derived from the number of
//! separators in its path unless the caller supplies one explicitly:
//!
//! - main category → level 1
//! - `"mobiles"` → level 2 (no separator)
//! - `"mobiles:apple"` → level 3 (one separator)

/// Path separator for nested subcategories.
pub const SEPARATOR: char = ':';

/// Hierarchy level of a main category.
pub const MAIN_LEVEL: u32 = 1;

/// Normalize a name for storage: trim surrounding whitespace and lowercase.
///
/// Applied to `category` and `subcategory` before any lookup or write so
/// that keys compare consistently.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Infer the hierarchy level of a subcategory from its path string.
///
/// A subcategory with no separator sits directly under its main category at
/// level 2; each additional separator adds one level of nesting.
///
/// # Examples
///
/// ```
/// use taxa_types::infer_level;
///
/// assert_eq!(infer_level("mobiles"), 2);
/// assert_eq!(infer_level("mobiles:apple"), 3);
/// assert_eq!(infer_level("mobiles:apple:iphone"), 4);
/// ```
pub fn infer_level(subcategory: &str) -> u32 {
    let separators = subcategory.matches(SEPARATOR).count() as u32;
    separators + 2
}

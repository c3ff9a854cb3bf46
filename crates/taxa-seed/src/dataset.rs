//! Serde models for the two sample-data file formats.

use serde::{Deserialize, Serialize};

/// One entry of the flat sample-data format: a JSON array of
/// category/subcategory rows with optional enrichment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlatEntry {
    pub main_category: String,
    pub sub_category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// The structured hierarchy format: a document with named main categories,
/// each listing its subcategories.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HierarchyDoc {
    #[serde(default)]
    pub product_categories: ProductCategories,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductCategories {
    #[serde(default)]
    pub main_categories: Vec<MainCategory>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MainCategory {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
}

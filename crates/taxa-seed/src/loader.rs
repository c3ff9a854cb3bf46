//! Bulk sample-data loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::info;

use taxa_store::TableStore;
use taxa_types::{infer_level, normalize, CategoryNode, MAIN_LEVEL};

use crate::dataset::{FlatEntry, HierarchyDoc};
use crate::error::SeedResult;

/// Read the flat sample-data format from a JSON file.
pub fn load_flat(path: impl AsRef<Path>) -> SeedResult<Vec<FlatEntry>> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Read the hierarchy sample-data format from a JSON file.
pub fn load_hierarchy(path: impl AsRef<Path>) -> SeedResult<HierarchyDoc> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Write flat entries into the store, returning the record count.
///
/// Identifiers are normalized; a row whose subcategory repeats its main
/// category becomes the main-category record. `last_updated` falls back to
/// today's date and every record is marked active.
pub fn seed_flat<S: TableStore>(store: &S, entries: &[FlatEntry]) -> SeedResult<usize> {
    for entry in entries {
        let category = normalize(&entry.main_category);
        let subcategory = normalize(&entry.sub_category);
        let level = if subcategory == category {
            MAIN_LEVEL
        } else {
            infer_level(&subcategory)
        };

        let mut node =
            CategoryNode::subcategory(category, subcategory, entry.description.clone(), level);
        node.attributes = entry.attributes.clone();
        node.last_updated = Some(entry.last_updated.clone().unwrap_or_else(today));
        node.active = Some(true);
        store.put(&node)?;
    }
    info!(count = entries.len(), "seeded flat category data");
    Ok(entries.len())
}

/// Write a hierarchy document into the store, returning the record count.
///
/// Each main category yields one main record (self-referential sort key)
/// plus one record per subcategory, with descriptions synthesized from the
/// names and `subcategory_id` carried from the document.
pub fn seed_hierarchy<S: TableStore>(store: &S, doc: &HierarchyDoc) -> SeedResult<usize> {
    let mut count = 0;
    for main in &doc.product_categories.main_categories {
        let category = normalize(&main.name);

        let mut node =
            CategoryNode::main(category.as_str(), format!("Main category for {category}"));
        node.last_updated = Some(today());
        node.active = Some(true);
        store.put(&node)?;
        count += 1;

        for sub in &main.subcategories {
            let subcategory = normalize(&sub.name);
            let mut node = CategoryNode::subcategory(
                category.as_str(),
                subcategory.as_str(),
                format!("Subcategory of {category}"),
                infer_level(&subcategory),
            );
            node.subcategory_id = sub.id.clone();
            node.last_updated = Some(today());
            node.active = Some(true);
            store.put(&node)?;
            count += 1;
        }
    }
    info!(count, "seeded hierarchy category data");
    Ok(count)
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

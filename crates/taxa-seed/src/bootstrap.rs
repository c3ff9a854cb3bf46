//! Table bootstrap: definition checks and optional record wipe.

use tracing::info;

use taxa_store::{KeyType, TableDefinition, TableStore};

use crate::error::{SeedError, SeedResult};

/// Prepares a store for use against a declared [`TableDefinition`].
///
/// Backends in this workspace create their table implicitly, so bootstrap
/// reduces to validating that the definition matches what the record model
/// requires (a string-typed two-part key) and, when `recreate` is set,
/// wiping whatever records an earlier run left behind, the analogue of
/// dropping and re-creating the table.
pub struct Bootstrap {
    definition: TableDefinition,
    recreate: bool,
}

impl Bootstrap {
    /// Bootstrap against the given definition, keeping existing records.
    pub fn new(definition: TableDefinition) -> Self {
        Self {
            definition,
            recreate: false,
        }
    }

    /// Wipe existing records during [`Bootstrap::apply`].
    pub fn recreate(mut self) -> Self {
        self.recreate = true;
        self
    }

    /// The definition this bootstrap was built with.
    pub fn definition(&self) -> &TableDefinition {
        &self.definition
    }

    /// Validate the definition and prepare the store.
    pub fn apply<S: TableStore>(&self, store: &S) -> SeedResult<()> {
        self.validate()?;

        if self.recreate {
            let existing = store.scan_all()?;
            for node in &existing {
                store.delete(&node.key())?;
            }
            if !existing.is_empty() {
                info!(
                    table = %self.definition.name,
                    removed = existing.len(),
                    "cleared existing records"
                );
            }
        }

        info!(table = %self.definition.name, "table ready");
        Ok(())
    }

    fn validate(&self) -> SeedResult<()> {
        if self.definition.name.trim().is_empty() {
            return Err(SeedError::InvalidDefinition(
                "table name must not be empty".into(),
            ));
        }
        for key in [&self.definition.partition_key, &self.definition.sort_key] {
            if key.key_type != KeyType::String {
                return Err(SeedError::InvalidDefinition(format!(
                    "key '{}' must be string-typed",
                    key.name
                )));
            }
        }
        Ok(())
    }
}

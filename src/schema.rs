//! Table schema loading
//!
//! Schemas are plain-text `.sql` files, one per table, read once at startup.
//! The mapping is immutable for the process lifetime; editing files on disk
//! afterwards has no effect. Entries iterate sorted by table name so the
//! assembled prompt is deterministic.

use std::collections::BTreeMap;
use std::path::Path;

/// Immutable mapping from table name to schema definition text
#[derive(Debug, Default, Clone)]
pub struct SchemaStore {
    tables: BTreeMap<String, String>,
}

impl SchemaStore {
    /// Load all `.sql` files from a directory.
    ///
    /// The table name is the file name without its extension. Read errors
    /// are logged and the file is skipped; an unreadable or missing
    /// directory yields an empty store, never a startup failure.
    pub fn load(dir: &Path) -> Self {
        let mut tables = BTreeMap::new();

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Failed to read schema directory {:?}: {}", dir, e);
                return Self { tables };
            }
        };

        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    tracing::warn!("Failed to read schema directory entry: {}", e);
                    continue;
                }
            };

            if !path.extension().is_some_and(|ext| ext == "sql") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            match std::fs::read_to_string(&path) {
                Ok(definition) => {
                    tables.insert(name.to_string(), definition);
                }
                Err(e) => {
                    tracing::warn!("Failed to read schema file {:?}: {}", path, e);
                }
            }
        }

        Self { tables }
    }

    /// Build a store from an in-memory mapping
    #[allow(dead_code)]
    pub fn from_tables(tables: BTreeMap<String, String>) -> Self {
        Self { tables }
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Iterate entries in table-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

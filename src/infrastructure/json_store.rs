use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::cart::CartLine;
use crate::domain::errors::StoreError;
use crate::domain::ports::CartStore;

/// Full-snapshot cart persistence backed by a single JSON file, the local
/// analogue of the browser's `cart` storage key.
///
/// Restored entries are shape checked: a line with a blank product id, a
/// non-positive quantity, or a duplicate id is discarded and logged instead
/// of being carried into the running cart.
pub struct JsonFileCartStore {
    path: PathBuf,
}

impl JsonFileCartStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn filter_well_formed(entries: Vec<serde_json::Value>) -> Vec<CartLine> {
        let mut seen = HashSet::new();
        let mut lines = Vec::with_capacity(entries.len());
        for entry in entries {
            match serde_json::from_value::<CartLine>(entry) {
                Ok(line) if !line.is_well_formed() => {
                    log::warn!(
                        "Dropping malformed cart entry for product '{}' (quantity {})",
                        line.product_id,
                        line.quantity
                    );
                }
                Ok(line) if !seen.insert(line.product_id.clone()) => {
                    log::warn!(
                        "Dropping duplicate cart entry for product '{}'",
                        line.product_id
                    );
                }
                Ok(line) => lines.push(line),
                Err(e) => log::warn!("Dropping unreadable cart entry: {}", e),
            }
        }
        lines
    }
}

impl CartStore for JsonFileCartStore {
    fn load(&self) -> Result<Option<Vec<CartLine>>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let entries: Vec<serde_json::Value> = serde_json::from_str(&raw)?;
        Ok(Some(Self::filter_well_formed(entries)))
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        // Write-then-rename so a crash mid-write never truncates the snapshot.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(lines)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::DbError;
use crate::storage::engine::StorageEngine;
use crate::storage::Catalog;
use crate::types::Record;

const CATALOG_FILE: &str = "catalog.json";
const TABLES_DIR: &str = "tables";

/// JSON-file storage.
///
/// Layout under `root`:
/// - `catalog.json` holds every table schema
/// - `tables/<table>.json` holds one table's records as a JSON array
///
/// Files are replaced atomically (write temp file, fsync, rename).
#[derive(Debug)]
pub struct DiskStorage {
    root: PathBuf,
}

impl DiskStorage {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, DbError> {
        let root = root.into();
        initialize_layout(&root)?;
        Ok(Self { root })
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root.join(CATALOG_FILE)
    }

    pub fn table_file_path(&self, table: &str) -> PathBuf {
        self.root.join(TABLES_DIR).join(format!("{table}.json"))
    }
}

fn initialize_layout(root: &Path) -> Result<(), DbError> {
    fs::create_dir_all(root.join(TABLES_DIR))
        .map_err(|e| DbError::Storage(format!("Failed to create db directory: {e}")))
}

/// Reads a file, mapping "not found" and whitespace-only content to `None`.
fn read_document(path: &Path) -> Result<Option<String>, DbError> {
    match fs::read_to_string(path) {
        Ok(content) if content.trim().is_empty() => Ok(None),
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(DbError::Storage(format!(
            "Failed to read {}: {e}",
            path.display()
        ))),
    }
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), DbError> {
    let tmp = path.with_extension("json.tmp");
    if tmp.exists() {
        warn!(path = %tmp.display(), "replacing stale temp file");
    }
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&tmp)
        .map_err(|e| DbError::Storage(format!("Failed to write {}: {e}", tmp.display())))?;
    file.write_all(payload)
        .and_then(|_| file.sync_all())
        .map_err(|e| DbError::Storage(format!("Failed to write {}: {e}", tmp.display())))?;
    fs::rename(&tmp, path)
        .map_err(|e| DbError::Storage(format!("Failed to replace {}: {e}", path.display())))?;
    sync_parent_dir(path);
    Ok(())
}

fn sync_parent_dir(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Ok(dir) = File::open(parent) {
            let _ = dir.sync_all();
        }
    }
}

impl StorageEngine for DiskStorage {
    fn load_catalog(&self) -> Result<Catalog, DbError> {
        let path = self.catalog_path();
        let Some(content) = read_document(&path)? else {
            return Ok(Catalog::new());
        };
        let catalog: Catalog = serde_json::from_str(&content)?;
        catalog.validate()?;
        debug!(path = %path.display(), tables = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    fn save_catalog(&mut self, catalog: &Catalog) -> Result<(), DbError> {
        let path = self.catalog_path();
        let payload = serde_json::to_vec_pretty(catalog)?;
        write_atomic(&path, &payload)?;
        debug!(path = %path.display(), tables = catalog.len(), "catalog saved");
        Ok(())
    }

    fn load_table(&self, table: &str) -> Result<Vec<Record>, DbError> {
        let path = self.table_file_path(table);
        let Some(content) = read_document(&path)? else {
            return Ok(Vec::new());
        };
        let records: Vec<Record> = serde_json::from_str(&content)?;
        debug!(table, records = records.len(), "table loaded");
        Ok(records)
    }

    fn save_table(&mut self, table: &str, records: &[Record]) -> Result<(), DbError> {
        let path = self.table_file_path(table);
        let payload = serde_json::to_vec_pretty(records)?;
        write_atomic(&path, &payload)?;
        debug!(table, records = records.len(), "table saved");
        Ok(())
    }

    fn drop_table(&mut self, table: &str) -> Result<(), DbError> {
        let path = self.table_file_path(table);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(table, "table file removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DbError::Storage(format!(
                "Failed to remove {}: {e}",
                path.display()
            ))),
        }
    }
}

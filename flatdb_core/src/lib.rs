use std::path::{Path, PathBuf};

pub mod error;
pub mod types;
pub mod parser;
pub mod storage;
pub mod engine;

pub use error::DbError;

use storage::DiskStorage;

/// A database directory opened for command execution.
///
/// Nothing is cached between commands: each `execute` reads the catalog and
/// the table it touches from disk and writes back what it changed.
#[derive(Debug)]
pub struct Database {
    path: PathBuf,
    storage: DiskStorage,
}

impl Database {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DbError> {
        let path = path.into();
        let storage = DiskStorage::new(path.clone())?;
        Ok(Self { path, storage })
    }

    pub fn execute(&mut self, input: &str) -> Result<String, DbError> {
        let cmd = parser::parser::parse(input)?;
        engine::execute_command(cmd, &mut self.storage)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

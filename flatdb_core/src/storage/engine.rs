use crate::error::DbError;
use crate::storage::Catalog;
use crate::types::Record;

/// Storage engine trait - the persistence boundary for the catalog document
/// and the per-table record documents (on disk, in memory, ...).
///
/// Every call moves a whole unit: there is no partial or append-only write.
pub trait StorageEngine {
    /// Loads the catalog; an absent catalog is an empty one
    fn load_catalog(&self) -> Result<Catalog, DbError>;

    /// Replaces the stored catalog
    fn save_catalog(&mut self, catalog: &Catalog) -> Result<(), DbError>;

    /// Loads a table's records; an absent table yields no records
    fn load_table(&self, table: &str) -> Result<Vec<Record>, DbError>;

    /// Replaces a table's stored records
    fn save_table(&mut self, table: &str, records: &[Record]) -> Result<(), DbError>;

    /// Forgets a table's records. Missing tables are not an error.
    fn drop_table(&mut self, table: &str) -> Result<(), DbError>;
}

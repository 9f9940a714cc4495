use std::path::Path;

use redb::{Database, ReadableTable, TableDefinition};
use tracing::debug;

use crate::error::KVError;
use crate::traits::KVStore;

const PREFS: TableDefinition<&str, &[u8]> = TableDefinition::new("prefs");

/// RedbStore is a KVStore backed by a single redb file.
///
/// Every `set` commits its own write transaction, so a value is
/// durable by the time the call returns.
pub struct RedbStore {
    db: Database,
}

impl RedbStore {
    /// Open or create a redb database at the given path.
    pub fn open(path: &Path) -> Result<Self, KVError> {
        let db = Database::create(path).map_err(KVError::storage)?;

        // Create the table up front so reads on a fresh file see an empty
        // table instead of TableDoesNotExist.
        let txn = db.begin_write().map_err(KVError::storage)?;
        txn.open_table(PREFS).map_err(KVError::storage)?;
        txn.commit().map_err(KVError::storage)?;

        debug!(path = %path.display(), "opened preference database");
        Ok(Self { db })
    }
}

impl KVStore for RedbStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVError> {
        let txn = self.db.begin_read().map_err(KVError::storage)?;
        let table = txn.open_table(PREFS).map_err(KVError::storage)?;
        let value = table.get(key).map_err(KVError::storage)?;
        Ok(value.map(|v| v.value().to_vec()))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), KVError> {
        let txn = self.db.begin_write().map_err(KVError::storage)?;
        {
            let mut table = txn.open_table(PREFS).map_err(KVError::storage)?;
            table.insert(key, value).map_err(KVError::storage)?;
        }
        txn.commit().map_err(KVError::storage)
    }
}

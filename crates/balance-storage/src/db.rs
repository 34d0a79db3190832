//! RocksDB-backed ledger

use crate::error::{StorageError, StorageResult};
use crate::traits::{LedgerReader, LedgerWriter};
use bytes::Bytes;
use parking_lot::RwLock;
use rocksdb::{BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, MultiThreaded, Options, WriteBatch};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Column family holding account balances
const BALANCES_CF: &str = "balances";

type RocksDB = DBWithThreadMode<MultiThreaded>;

/// Database tuning
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DbConfig {
    /// Create database if missing
    pub create_if_missing: bool,
    /// Maximum number of open files
    pub max_open_files: i32,
    /// Write buffer size
    pub write_buffer_size: usize,
    /// Maximum write buffers
    pub max_write_buffer_number: i32,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            create_if_missing: true,
            max_open_files: 256,
            write_buffer_size: 16 * 1024 * 1024, // 16MB
            max_write_buffer_number: 2,
        }
    }
}

/// Ledger persisted in the `balances` column family.
///
/// Reads and writes fail with `NotOpen` after `close()`.
pub struct LedgerDb {
    db: RwLock<Option<RocksDB>>,
    path: PathBuf,
}

impl LedgerDb {
    /// Open (or create) the ledger at `path`
    pub fn open(path: impl AsRef<Path>, config: &DbConfig) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();

        let mut opts = Options::default();
        opts.create_if_missing(config.create_if_missing);
        opts.create_missing_column_families(true);
        opts.set_max_open_files(config.max_open_files);
        opts.set_write_buffer_size(config.write_buffer_size);
        opts.set_max_write_buffer_number(config.max_write_buffer_number);

        let balances = ColumnFamilyDescriptor::new(BALANCES_CF, Options::default());
        let db = RocksDB::open_cf_descriptors(&opts, &path, vec![balances])?;
        tracing::debug!(path = %path.display(), "ledger database opened");

        Ok(Self {
            db: RwLock::new(Some(db)),
            path,
        })
    }

    /// Release the database handle
    pub fn close(&self) {
        if self.db.write().take().is_some() {
            tracing::debug!(path = %self.path.display(), "ledger database closed");
        }
    }

    fn balances_cf(db: &RocksDB) -> StorageResult<Arc<BoundColumnFamily<'_>>> {
        db.cf_handle(BALANCES_CF)
            .ok_or_else(|| StorageError::InvalidColumnFamily(BALANCES_CF.to_string()))
    }
}

impl LedgerReader for LedgerDb {
    fn get(&self, key: &str) -> StorageResult<Option<Bytes>> {
        let guard = self.db.read();
        let db = guard.as_ref().ok_or(StorageError::NotOpen)?;
        let cf = Self::balances_cf(db)?;
        Ok(db.get_cf(&cf, key.as_bytes())?.map(Bytes::from))
    }
}

impl LedgerWriter for LedgerDb {
    fn put(&mut self, key: &str, value: Bytes) -> StorageResult<()> {
        let guard = self.db.read();
        let db = guard.as_ref().ok_or(StorageError::NotOpen)?;
        let cf = Self::balances_cf(db)?;
        db.put_cf(&cf, key.as_bytes(), &value)?;
        Ok(())
    }

    /// Writes the whole set in one atomic batch
    fn apply(&mut self, writes: Vec<(String, Bytes)>) -> StorageResult<()> {
        let guard = self.db.read();
        let db = guard.as_ref().ok_or(StorageError::NotOpen)?;
        let cf = Self::balances_cf(db)?;

        let mut batch = WriteBatch::default();
        for (key, value) in &writes {
            batch.put_cf(&cf, key.as_bytes(), value);
        }
        db.write(batch)?;
        Ok(())
    }
}

//! Per-invocation write staging
//!
//! Reads check the staged writes first, then fall back to the wrapped ledger.
//! Writes stay in memory until `commit()`; dropping the stage discards them.

use crate::error::StorageResult;
use crate::traits::{Ledger, LedgerReader, LedgerWriter};
use bytes::Bytes;

/// Ledger overlay that buffers writes for one invocation
pub struct StagedLedger<'a, L: Ledger + ?Sized> {
    inner: &'a mut L,
    writes: Vec<(String, Bytes)>,
}

impl<'a, L: Ledger + ?Sized> StagedLedger<'a, L> {
    /// Stage writes on top of a ledger
    pub fn new(inner: &'a mut L) -> Self {
        Self {
            inner,
            writes: Vec::new(),
        }
    }

    /// Apply the staged writes to the wrapped ledger, returning how many were applied
    pub fn commit(self) -> StorageResult<usize> {
        let count = self.writes.len();
        if count > 0 {
            self.inner.apply(self.writes)?;
            tracing::trace!(writes = count, "staged writes committed");
        }
        Ok(count)
    }
}

impl<L: Ledger + ?Sized> LedgerReader for StagedLedger<'_, L> {
    fn get(&self, key: &str) -> StorageResult<Option<Bytes>> {
        if let Some((_, value)) = self.writes.iter().rev().find(|(k, _)| k == key) {
            return Ok(Some(value.clone()));
        }
        self.inner.get(key)
    }
}

impl<L: Ledger + ?Sized> LedgerWriter for StagedLedger<'_, L> {
    fn put(&mut self, key: &str, value: Bytes) -> StorageResult<()> {
        self.writes.push((key.to_string(), value));
        Ok(())
    }
}

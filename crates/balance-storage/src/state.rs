//! In-memory ledger

use crate::error::StorageResult;
use crate::traits::{LedgerReader, LedgerWriter};
use bytes::Bytes;
use std::collections::HashMap;

/// In-memory ledger
#[derive(Clone, Debug, Default)]
pub struct MemoryLedger {
    entries: HashMap<String, Bytes>,
}

impl MemoryLedger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if ledger is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all stored entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Bytes)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Bytes>> FromIterator<(K, V)> for MemoryLedger {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl LedgerReader for MemoryLedger {
    fn get(&self, key: &str) -> StorageResult<Option<Bytes>> {
        Ok(self.entries.get(key).cloned())
    }
}

impl LedgerWriter for MemoryLedger {
    fn put(&mut self, key: &str, value: Bytes) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

//! Ledger accessor traits

use crate::error::StorageResult;
use bytes::Bytes;

/// What the ledger holds for an account key.
///
/// Presence is decided by whether the ledger returned a value at all, so an
/// empty or non-numeric value is `Invalid`, never `Absent`. A decimal integer
/// too wide for `i64` is `OutOfRange`, not `Invalid`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BalanceEntry {
    /// No value stored under the key
    Absent,
    /// A decimal integer balance
    Valid(i64),
    /// A decimal integer outside the `i64` range
    OutOfRange(Bytes),
    /// A value that does not parse as a number
    Invalid(Bytes),
}

impl BalanceEntry {
    /// Classify raw ledger bytes
    pub fn from_value(value: Option<Bytes>) -> Self {
        let Some(bytes) = value else {
            return BalanceEntry::Absent;
        };
        let Ok(text) = std::str::from_utf8(&bytes) else {
            return BalanceEntry::Invalid(bytes);
        };
        match text.parse::<i64>() {
            Ok(balance) => BalanceEntry::Valid(balance),
            Err(_) if is_decimal_integer(text) => BalanceEntry::OutOfRange(bytes),
            Err(_) => BalanceEntry::Invalid(bytes),
        }
    }

    /// Check if any value is stored
    pub fn is_present(&self) -> bool {
        !matches!(self, BalanceEntry::Absent)
    }
}

/// Optional sign followed by ASCII digits, the shape `i64::from_str` accepts
fn is_decimal_integer(text: &str) -> bool {
    let digits = text.strip_prefix(|c| c == '+' || c == '-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Read access to the ledger
pub trait LedgerReader {
    /// Get the raw value stored under a key
    fn get(&self, key: &str) -> StorageResult<Option<Bytes>>;

    /// Check if a key has any value
    fn exists(&self, key: &str) -> StorageResult<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Get the balance entry for an account key
    fn balance(&self, key: &str) -> StorageResult<BalanceEntry> {
        Ok(BalanceEntry::from_value(self.get(key)?))
    }
}

/// Write access to the ledger
pub trait LedgerWriter {
    /// Store a value under a key
    fn put(&mut self, key: &str, value: Bytes) -> StorageResult<()>;

    /// Apply a write set in order.
    ///
    /// Backends that can write atomically override this.
    fn apply(&mut self, writes: Vec<(String, Bytes)>) -> StorageResult<()> {
        for (key, value) in writes {
            self.put(&key, value)?;
        }
        Ok(())
    }
}

/// Combined read/write ledger access
pub trait Ledger: LedgerReader + LedgerWriter {}

impl<T: LedgerReader + LedgerWriter> Ledger for T {}

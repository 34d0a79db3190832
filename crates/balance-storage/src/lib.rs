//! # balance-storage
//!
//! Ledger access for the balance manager.
//!
//! This crate provides:
//! - `LedgerReader` / `LedgerWriter` get/put abstraction
//! - Three-state balance lookup (`BalanceEntry`)
//! - In-memory ledger
//! - RocksDB ledger with atomic batch writes
//! - Per-invocation staged write set

#![warn(missing_docs)]
#![warn(clippy::all)]

mod db;
mod error;
mod staged;
mod state;
mod traits;

pub use db::{DbConfig, LedgerDb};
pub use error::{StorageError, StorageResult};
pub use staged::StagedLedger;
pub use state::MemoryLedger;
pub use traits::{BalanceEntry, Ledger, LedgerReader, LedgerWriter};

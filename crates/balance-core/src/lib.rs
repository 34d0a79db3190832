//! # balance-core
//!
//! Account balance contract for the balance manager.
//!
//! An [`Invocation`] names one operation and carries positional string
//! arguments. The [`Dispatcher`] resolves the name to an [`Operation`],
//! runs its handler against a staged view of the ledger and turns the
//! outcome into a [`Response`].
//!
//! ```
//! use balance_core::{Dispatcher, Invocation};
//! use balance_storage::MemoryLedger;
//!
//! let dispatcher = Dispatcher::default();
//! let mut ledger = MemoryLedger::new();
//!
//! dispatcher.invoke(&mut ledger, &Invocation::new("create", ["alice"]));
//! dispatcher.invoke(&mut ledger, &Invocation::new("charge", ["alice", "50"]));
//! dispatcher.invoke(&mut ledger, &Invocation::new("charge", ["alice", "-20"]));
//!
//! let response = dispatcher.invoke(&mut ledger, &Invocation::new("query", ["alice"]));
//! assert_eq!(response.payload.as_deref(), Some(&b"30"[..]));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod dispatcher;
mod error;
pub mod handlers;
mod operation;
mod response;

pub use config::{ContractConfig, CorruptBalancePolicy};
pub use dispatcher::Dispatcher;
pub use error::{ContractError, ContractResult, ErrorKind};
pub use handlers::{Handler, InvocationContext};
pub use operation::{Invocation, Operation};
pub use response::{ChaincodeEvent, Response, Status};

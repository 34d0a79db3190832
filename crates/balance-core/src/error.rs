//! Contract error types

use balance_storage::StorageError;
use serde_json::{json, Value};
use thiserror::Error;

/// Broad class of a contract failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing arguments
    Validation,
    /// Account already exists
    Conflict,
    /// Account does not exist
    NotFound,
    /// Stored balance is not an integer
    CorruptState,
    /// Ledger access failed
    Storage,
}

/// Contract errors
#[derive(Debug, Error)]
pub enum ContractError {
    /// Wrong number of positional arguments
    #[error("incorrect number of arguments for {operation}: expecting {expected}, actual {actual}")]
    ArgumentCount {
        /// Operation name
        operation: &'static str,
        /// Expected argument count
        expected: usize,
        /// Actual argument count
        actual: usize,
    },

    /// Account id argument is empty
    #[error("account id must not be empty")]
    EmptyAccount,

    /// Charge amount is not an integer
    #[error("invalid charge amount {0:?}: expecting an integer value")]
    InvalidAmount(String),

    /// Balance would not fit in an i64
    #[error("balance overflow for {account}: {balance} + {amount}")]
    BalanceOverflow {
        /// Account id
        account: String,
        /// Stored balance
        balance: i64,
        /// Charge amount
        amount: i64,
    },

    /// Stored balance is an integer too wide for an i64
    #[error("stored balance for {account} is out of range: {value}")]
    BalanceOutOfRange {
        /// Account id
        account: String,
        /// Stored value
        value: String,
    },

    /// Create on an existing account
    #[error("account already exists: {0}")]
    AccountExists(String),

    /// Charge or query on a missing account
    #[error("account does not exist: {0}")]
    AccountNotFound(String),

    /// Stored balance does not parse (strict policy only)
    #[error("stored balance for {account} is not an integer: {value:?}")]
    CorruptBalance {
        /// Account id
        account: String,
        /// Stored value, lossily decoded
        value: String,
    },

    /// Storage error
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ContractError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContractError::ArgumentCount { .. }
            | ContractError::EmptyAccount
            | ContractError::InvalidAmount(_)
            | ContractError::BalanceOverflow { .. }
            | ContractError::BalanceOutOfRange { .. } => ErrorKind::Validation,
            ContractError::AccountExists(_) => ErrorKind::Conflict,
            ContractError::AccountNotFound(_) => ErrorKind::NotFound,
            ContractError::CorruptBalance { .. } => ErrorKind::CorruptState,
            ContractError::Storage(_) => ErrorKind::Storage,
        }
    }

    /// Structured details returned alongside the message
    pub fn details(&self) -> Option<Value> {
        match self {
            ContractError::AccountNotFound(account) => Some(json!({
                "error": format!("Failed to get state for {}", account),
                "account": account,
            })),
            _ => None,
        }
    }
}

/// Result type for contract operations
pub type ContractResult<T> = Result<T, ContractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let count = ContractError::ArgumentCount { operation: "create", expected: 1, actual: 0 };
        assert_eq!(count.kind(), ErrorKind::Validation);
        assert_eq!(ContractError::EmptyAccount.kind(), ErrorKind::Validation);
        assert_eq!(ContractError::InvalidAmount("x".into()).kind(), ErrorKind::Validation);
        assert_eq!(
            ContractError::BalanceOutOfRange { account: "a".into(), value: "99999999999999999999".into() }.kind(),
            ErrorKind::Validation
        );
        assert_eq!(ContractError::AccountExists("a".into()).kind(), ErrorKind::Conflict);
        assert_eq!(ContractError::AccountNotFound("a".into()).kind(), ErrorKind::NotFound);
        assert_eq!(
            ContractError::CorruptBalance { account: "a".into(), value: "x".into() }.kind(),
            ErrorKind::CorruptState
        );
        assert_eq!(ContractError::Storage(StorageError::NotOpen).kind(), ErrorKind::Storage);
    }

    #[test]
    fn test_error_messages() {
        let count = ContractError::ArgumentCount { operation: "charge", expected: 2, actual: 3 };
        assert_eq!(
            count.to_string(),
            "incorrect number of arguments for charge: expecting 2, actual 3"
        );
        assert_eq!(
            ContractError::AccountExists("alice".into()).to_string(),
            "account already exists: alice"
        );
        assert_eq!(
            ContractError::InvalidAmount("ten".into()).to_string(),
            "invalid charge amount \"ten\": expecting an integer value"
        );
    }

    #[test]
    fn test_not_found_details() {
        let details = ContractError::AccountNotFound("bob".into()).details().unwrap();
        assert_eq!(details["error"], "Failed to get state for bob");
        assert_eq!(details["account"], "bob");

        assert!(ContractError::EmptyAccount.details().is_none());
    }
}

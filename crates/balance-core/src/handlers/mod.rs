//! Operation handlers
//!
//! Every handler validates its arguments before touching the ledger and
//! performs at most one write.

mod account;
mod lifecycle;

pub use account::{charge, create, query};
pub use lifecycle::{init, upgrade};

use crate::config::ContractConfig;
use crate::error::{ContractError, ContractResult};
use crate::response::ChaincodeEvent;
use balance_storage::Ledger;
use bytes::Bytes;
use serde_json::Value;

/// Handler signature shared by all operations
pub type Handler = fn(&mut InvocationContext<'_>, &[String]) -> ContractResult<Option<Bytes>>;

/// State available to a handler during one invocation
pub struct InvocationContext<'a> {
    ledger: &'a mut dyn Ledger,
    config: &'a ContractConfig,
    event: Option<ChaincodeEvent>,
}

impl<'a> InvocationContext<'a> {
    /// Create a context over a ledger
    pub fn new(ledger: &'a mut dyn Ledger, config: &'a ContractConfig) -> Self {
        Self {
            ledger,
            config,
            event: None,
        }
    }

    /// Ledger accessor
    pub fn ledger(&mut self) -> &mut dyn Ledger {
        &mut *self.ledger
    }

    /// Contract configuration
    pub fn config(&self) -> &ContractConfig {
        self.config
    }

    /// Record an event; a later call replaces an earlier one
    pub fn set_event(&mut self, name: impl Into<String>, payload: Value) {
        self.event = Some(ChaincodeEvent {
            name: name.into(),
            payload,
        });
    }

    /// Take the recorded event
    pub fn take_event(&mut self) -> Option<ChaincodeEvent> {
        self.event.take()
    }
}

/// Fail unless exactly `expected` arguments were given
fn expect_args(operation: &'static str, args: &[String], expected: usize) -> ContractResult<()> {
    if args.len() != expected {
        return Err(ContractError::ArgumentCount {
            operation,
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

/// Non-empty account id
fn account_arg(arg: &str) -> ContractResult<&str> {
    if arg.is_empty() {
        return Err(ContractError::EmptyAccount);
    }
    Ok(arg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use balance_storage::MemoryLedger;
    use serde_json::json;

    #[test]
    fn test_expect_args() {
        let args = vec!["a".to_string(), "b".to_string()];
        assert!(expect_args("charge", &args, 2).is_ok());
        assert!(matches!(
            expect_args("create", &args, 1),
            Err(ContractError::ArgumentCount { operation: "create", expected: 1, actual: 2 })
        ));
    }

    #[test]
    fn test_account_arg() {
        assert_eq!(account_arg("alice").unwrap(), "alice");
        assert!(matches!(account_arg(""), Err(ContractError::EmptyAccount)));
    }

    #[test]
    fn test_context_event() {
        let mut ledger = MemoryLedger::new();
        let config = ContractConfig::default();
        let mut ctx = InvocationContext::new(&mut ledger, &config);

        assert!(ctx.take_event().is_none());
        ctx.set_event("first", json!(1));
        ctx.set_event("second", json!(2));

        let event = ctx.take_event().unwrap();
        assert_eq!(event.name, "second");
        assert!(ctx.take_event().is_none());
    }
}

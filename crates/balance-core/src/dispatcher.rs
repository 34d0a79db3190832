//! Operation dispatcher

use std::collections::HashMap;

use balance_storage::{Ledger, StagedLedger};

use crate::config::ContractConfig;
use crate::error::ContractError;
use crate::handlers::{self, Handler, InvocationContext};
use crate::operation::{Invocation, Operation};
use crate::response::Response;

/// Routes invocations to operation handlers
pub struct Dispatcher {
    handlers: HashMap<Operation, Handler>,
    config: ContractConfig,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(ContractConfig::default())
    }
}

impl Dispatcher {
    /// Create a dispatcher with all operations registered
    pub fn new(config: ContractConfig) -> Self {
        let mut dispatcher = Self {
            handlers: HashMap::new(),
            config,
        };

        // Lifecycle hooks
        dispatcher.register(Operation::Init, handlers::init);
        dispatcher.register(Operation::Upgrade, handlers::upgrade);

        // Account operations
        dispatcher.register(Operation::Create, handlers::create);
        dispatcher.register(Operation::Charge, handlers::charge);
        dispatcher.register(Operation::Query, handlers::query);

        dispatcher
    }

    /// Register a handler, replacing any previous one for the operation
    pub fn register(&mut self, operation: Operation, handler: Handler) {
        self.handlers.insert(operation, handler);
    }

    /// Resolve an operation name to its handler
    pub fn resolve(&self, function: &str) -> Option<(Operation, Handler)> {
        let operation = Operation::from_name(function)?;
        self.handlers.get(&operation).map(|handler| (operation, *handler))
    }

    /// Run one invocation against the ledger.
    ///
    /// Unknown names succeed with no payload. Handler writes reach the
    /// ledger only when the handler succeeds.
    pub fn invoke(&self, ledger: &mut dyn Ledger, invocation: &Invocation) -> Response {
        let Some((operation, handler)) = self.resolve(&invocation.function) else {
            tracing::warn!(function = %invocation.function, "no handler for function, ignoring");
            return Response::success(None);
        };

        tracing::debug!(%operation, args = ?invocation.args, "dispatching");

        let mut staged = StagedLedger::new(ledger);
        let outcome = {
            let mut ctx = InvocationContext::new(&mut staged, &self.config);
            handler(&mut ctx, &invocation.args).map(|payload| (payload, ctx.take_event()))
        };

        let (payload, event) = match outcome {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(%operation, kind = ?err.kind(), error = %err, "invocation failed");
                return Response::error(&err);
            }
        };

        match staged.commit() {
            Ok(writes) => {
                tracing::debug!(%operation, writes, "invocation succeeded");
                Response::success(payload).with_event(event)
            }
            Err(e) => {
                let err = ContractError::from(e);
                tracing::error!(%operation, error = %err, "failed to commit writes");
                Response::error(&err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContractResult;
    use crate::response::Status;
    use balance_storage::{LedgerReader, LedgerWriter, MemoryLedger, StorageError, StorageResult};
    use bytes::Bytes;

    /// Ledger whose writes always fail
    struct ReadOnlyLedger(MemoryLedger);

    impl LedgerReader for ReadOnlyLedger {
        fn get(&self, key: &str) -> StorageResult<Option<Bytes>> {
            self.0.get(key)
        }
    }

    impl LedgerWriter for ReadOnlyLedger {
        fn put(&mut self, _key: &str, _value: Bytes) -> StorageResult<()> {
            Err(StorageError::NotOpen)
        }
    }

    fn write_then_fail(ctx: &mut InvocationContext<'_>, _args: &[String]) -> ContractResult<Option<Bytes>> {
        ctx.ledger().put("partial", Bytes::from("1"))?;
        Err(ContractError::EmptyAccount)
    }

    #[test]
    fn test_registered_operations() {
        let dispatcher = Dispatcher::default();
        for op in Operation::ALL {
            let (resolved, _) = dispatcher.resolve(op.name()).unwrap();
            assert_eq!(resolved, op);
        }
        assert!(dispatcher.resolve("transfer").is_none());
    }

    #[test]
    fn test_unknown_function_is_noop_success() {
        let dispatcher = Dispatcher::default();
        let mut ledger = MemoryLedger::new();

        for function in ["transfer", "", "CREATE", "getX"] {
            let response = dispatcher.invoke(&mut ledger, &Invocation::new(function, ["alice"]));
            assert_eq!(response, Response::success(None));
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_lifecycle_hooks() {
        let dispatcher = Dispatcher::default();
        let mut ledger = MemoryLedger::new();

        for function in ["init", "upgrade"] {
            let response = dispatcher.invoke(&mut ledger, &Invocation::new(function, ["k1", "k2"]));
            assert!(response.is_ok());
            assert!(response.payload.is_none());
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_error_response() {
        let dispatcher = Dispatcher::default();
        let mut ledger = MemoryLedger::new();

        let response = dispatcher.invoke(&mut ledger, &Invocation::new("query", ["nobody"]));
        assert_eq!(response.status, Status::Error);
        assert_eq!(response.message, "account does not exist: nobody");
        assert_eq!(response.details.unwrap()["account"], "nobody");
    }

    #[test]
    fn test_failed_handler_discards_writes() {
        let mut dispatcher = Dispatcher::default();
        dispatcher.register(Operation::Create, write_then_fail);
        let mut ledger = MemoryLedger::new();

        let response = dispatcher.invoke(&mut ledger, &Invocation::new("create", ["alice"]));
        assert!(!response.is_ok());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_commit_failure_is_error_response() {
        let dispatcher = Dispatcher::default();
        let mut ledger = ReadOnlyLedger(MemoryLedger::new());

        let response = dispatcher.invoke(&mut ledger, &Invocation::new("create", ["alice"]));
        assert_eq!(response.status, Status::Error);
        assert_eq!(response.message, "storage error: database not open");
    }

    #[test]
    fn test_charge_event_in_response() {
        let dispatcher = Dispatcher::default();
        let mut ledger: MemoryLedger = [("alice", "0")].into_iter().collect();

        let response = dispatcher.invoke(&mut ledger, &Invocation::new("charge", ["alice", "7"]));
        let event = response.event.unwrap();
        assert_eq!(event.name, "charge");
        assert_eq!(event.payload["amount"], "7");
    }
}

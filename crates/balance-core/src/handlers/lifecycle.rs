//! Deployment lifecycle hooks

use super::InvocationContext;
use crate::error::ContractResult;
use bytes::Bytes;

/// init - Deployment hook, accepts any arguments and touches nothing
pub fn init(_ctx: &mut InvocationContext<'_>, args: &[String]) -> ContractResult<Option<Bytes>> {
    tracing::debug!(args = args.len(), "init hook");
    Ok(None)
}

/// upgrade - Upgrade hook, accepts any arguments and touches nothing
pub fn upgrade(_ctx: &mut InvocationContext<'_>, args: &[String]) -> ContractResult<Option<Bytes>> {
    tracing::debug!(args = args.len(), "upgrade hook");
    Ok(None)
}

//! Account state transitions

use super::{account_arg, expect_args, InvocationContext};
use crate::config::CorruptBalancePolicy;
use crate::error::{ContractError, ContractResult};
use balance_storage::BalanceEntry;
use bytes::Bytes;
use serde_json::json;

/// Balance written for a freshly created account
const INITIAL_BALANCE: &str = "0";

/// Name of the event emitted by a successful charge
pub const CHARGE_EVENT: &str = "charge";

/// create - Open an account with a balance of 0
///
/// Args: `[account]`. Fails if the ledger holds any value for the key,
/// whether or not it parses as a balance.
pub fn create(ctx: &mut InvocationContext<'_>, args: &[String]) -> ContractResult<Option<Bytes>> {
    expect_args("create", args, 1)?;
    let account = account_arg(&args[0])?;

    if ctx.ledger().exists(account)? {
        return Err(ContractError::AccountExists(account.to_string()));
    }

    ctx.ledger().put(account, Bytes::from_static(INITIAL_BALANCE.as_bytes()))?;
    tracing::debug!(account, "account created");
    Ok(None)
}

/// charge - Add a signed amount to an existing balance
///
/// Args: `[account, amount]`. Negative amounts debit the account; there is
/// no lower bound on the resulting balance.
pub fn charge(ctx: &mut InvocationContext<'_>, args: &[String]) -> ContractResult<Option<Bytes>> {
    expect_args("charge", args, 2)?;
    let account = account_arg(&args[0])?;
    let amount = parse_amount(&args[1])?;

    let balance = match ctx.ledger().balance(account)? {
        BalanceEntry::Absent => {
            return Err(ContractError::AccountNotFound(account.to_string()));
        }
        BalanceEntry::Valid(balance) => {
            balance
                .checked_add(amount)
                .ok_or_else(|| ContractError::BalanceOverflow {
                    account: account.to_string(),
                    balance,
                    amount,
                })?
        }
        BalanceEntry::OutOfRange(raw) => {
            return Err(ContractError::BalanceOutOfRange {
                account: account.to_string(),
                value: String::from_utf8_lossy(&raw).into_owned(),
            });
        }
        BalanceEntry::Invalid(raw) => {
            let stored = String::from_utf8_lossy(&raw).into_owned();
            match ctx.config().corrupt_balance {
                CorruptBalancePolicy::Lenient => {
                    tracing::warn!(account, stored = %stored, amount, "stored balance is not an integer, replacing with charge amount");
                    amount
                }
                CorruptBalancePolicy::Strict => {
                    return Err(ContractError::CorruptBalance {
                        account: account.to_string(),
                        value: stored,
                    });
                }
            }
        }
    };

    ctx.ledger().put(account, Bytes::from(balance.to_string()))?;
    ctx.set_event(
        CHARGE_EVENT,
        json!({
            "status": "ok",
            "account": account,
            "amount": amount.to_string(),
        }),
    );
    tracing::debug!(account, amount, balance, "account charged");
    Ok(None)
}

/// query - Return the stored balance bytes untouched
///
/// Args: `[account]`.
pub fn query(ctx: &mut InvocationContext<'_>, args: &[String]) -> ContractResult<Option<Bytes>> {
    expect_args("query", args, 1)?;
    let account = args[0].as_str();

    // Raw bytes, whether or not they parse as a balance
    let value = ctx
        .ledger()
        .get(account)?
        .ok_or_else(|| ContractError::AccountNotFound(account.to_string()))?;

    tracing::debug!(name = account, amount = %String::from_utf8_lossy(&value), "query response");
    Ok(Some(value))
}

fn parse_amount(raw: &str) -> ContractResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ContractError::InvalidAmount(raw.to_string()))
}

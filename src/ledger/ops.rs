//! Free functions that mutate a supplied [`RewardsLedger`].
//!
//! They are the only way to change a balance, so every mutation goes through the same overflow
//! checks. Both take `&mut RewardsLedger` so that the caller makes mutability explicit at the
//! call site.

use crate::ledger::RewardsLedger;
use crate::log_entry::CustomerId;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("balance overflow applying {op} of points={points} to customer_id={customer_id} balance={balance}")]
    BalanceOverflow {
        customer_id: CustomerId,
        balance: i64,
        points: u64,
        op: LedgerOp,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, parse_display::Display)]
#[display(style = "lowercase")]
pub enum LedgerOp {
    Debit,
    Credit,
}

/// Subtracts `points` from the `customer_id` balance. The balance may go negative.
///
/// # Errors
///
/// Returns an error if:
/// - The new balance does not fit an `i64` ([`LedgerError::BalanceOverflow`]). The balance is left untouched.
pub fn debit(ledger: &mut RewardsLedger, customer_id: CustomerId, points: u64) -> Result<(), LedgerError> {
    let balance = ledger.balance(customer_id);
    let new_balance = i64::try_from(points)
        .ok()
        .and_then(|points| balance.checked_sub(points))
        .ok_or_else(|| overflow_error(customer_id, balance, points, LedgerOp::Debit))?;
    ledger.0.insert(customer_id, new_balance);
    Ok(())
}

/// Adds `points` to the `customer_id` balance.
///
/// # Errors
///
/// Returns an error if:
/// - The new balance does not fit an `i64` ([`LedgerError::BalanceOverflow`]). The balance is left untouched.
pub fn credit(ledger: &mut RewardsLedger, customer_id: CustomerId, points: u64) -> Result<(), LedgerError> {
    let balance = ledger.balance(customer_id);
    let new_balance = i64::try_from(points)
        .ok()
        .and_then(|points| balance.checked_add(points))
        .ok_or_else(|| overflow_error(customer_id, balance, points, LedgerOp::Credit))?;
    ledger.0.insert(customer_id, new_balance);
    Ok(())
}

const fn overflow_error(customer_id: CustomerId, balance: i64, points: u64, op: LedgerOp) -> LedgerError {
    LedgerError::BalanceOverflow {
        customer_id,
        balance,
        points,
        op,
    }
}

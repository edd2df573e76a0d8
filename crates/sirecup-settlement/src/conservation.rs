//! Conservation checks around a settlement run.
//!
//! Invariants the engine's outputs satisfy:
//! ```text
//! Σ balances == 0                                  (zero-sum)
//! apply(balances, transactions) ≈ 0 for every p    (full settlement)
//! ```
//!
//! The second holds except for creditors whose surplus no debtor can cover
//! (an expense with no participants); [`unsettleable_surplus`] reports that
//! residue.

use rust_decimal::Decimal;
use sirecup_types::{Balances, Result, SirecupError, Transaction};

/// Verify that balances sum to zero within `tolerance`.
///
/// # Errors
/// Returns [`SirecupError::BalanceInvariantViolation`] if `|Σ| > tolerance`.
pub fn verify_zero_sum(balances: &Balances, tolerance: Decimal) -> Result<()> {
    let sum = balances.total();
    if sum.abs() > tolerance {
        return Err(SirecupError::BalanceInvariantViolation { sum });
    }
    Ok(())
}

/// Replay `transactions` against `balances`: the payer's balance rises by
/// the amount and the receiver's falls by it. Returns a new mapping.
#[must_use]
pub fn apply_transactions(balances: &Balances, transactions: &[Transaction]) -> Balances {
    let mut after = balances.clone();
    for tx in transactions {
        after.adjust(tx.from.id, tx.amount);
        after.adjust(tx.to.id, -tx.amount);
    }
    after
}

/// Verify that every balance is within `tolerance` of zero.
///
/// # Errors
/// Returns [`SirecupError::UnsettledBalance`] for the first player (by id)
/// whose residual exceeds `tolerance`.
pub fn verify_fully_settled(balances: &Balances, tolerance: Decimal) -> Result<()> {
    if let Some((player, residual)) = balances.iter().find(|(_, b)| b.abs() > tolerance) {
        return Err(SirecupError::UnsettledBalance { player, residual });
    }
    Ok(())
}

/// Credit left over after applying `transactions` that no debtor covers.
///
/// Zero for any ledger whose expenses all list participants.
#[must_use]
pub fn unsettleable_surplus(balances: &Balances, transactions: &[Transaction]) -> Decimal {
    let after = apply_transactions(balances, transactions);
    after.credit_mass() - after.debit_mass()
}

//! Net balance computation.
//!
//! ```text
//! balance[p] = Σ amount (expenses p paid) − Σ share (expenses p joined)
//! ```
//!
//! An expense with no participants credits the payer and debits nobody:
//! the payer ends up with a surplus that no transaction can settle.

use rust_decimal::Decimal;
use sirecup_types::{Balances, Expense, Player, saturating_sum};

/// Compute every player's net balance across `expenses`.
///
/// Every roster player appears in the result, at zero if untouched. Ids
/// that an expense references but the roster lacks are accumulated too, so
/// the balances still sum to zero.
///
/// No validation happens here: zero or negative amounts flow straight
/// through. Balances clamp at the `Decimal` range rather than overflow, so
/// the zero-sum invariant only holds for ledgers below `Decimal::MAX`.
#[must_use]
pub fn compute_balances(players: &[Player], expenses: &[Expense]) -> Balances {
    let mut balances = Balances::new();
    for player in players {
        balances.open(player.id);
    }

    for expense in expenses {
        balances.adjust(expense.payer, expense.amount);

        let Some(share) = expense.share() else {
            tracing::debug!(
                expense = %expense.id,
                payer = %expense.payer,
                amount = %expense.amount,
                "Expense has no participants; absorbed by payer"
            );
            continue;
        };

        for &participant in &expense.participants {
            balances.adjust(participant, -share);
        }
    }

    balances
}

/// Sum of all expense amounts.
#[must_use]
pub fn total_spent(expenses: &[Expense]) -> Decimal {
    saturating_sum(expenses.iter().map(|e| e.amount))
}

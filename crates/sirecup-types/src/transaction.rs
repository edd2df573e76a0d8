//! Settlement transactions.
//!
//! A [`Transaction`] is a directed payment from a net debtor to a net
//! creditor that reduces both outstanding amounts by the same quantity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Player;

/// A single "who pays whom" entry produced by the settlement sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// The paying (debtor) player.
    pub from: Player,
    /// The receiving (creditor) player.
    pub to: Player,
    /// Payment amount, rounded to currency scale. Always positive.
    pub amount: Decimal,
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}: {}", self.from.name, self.to.name, self.amount)
    }
}

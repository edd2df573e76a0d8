//! The "settle up" view handed to the presentation layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sirecup_types::{Balances, Player, Transaction};

/// One roster row: who, and where they stand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBalance {
    pub player: Player,
    pub balance: Decimal,
}

impl PlayerBalance {
    #[must_use]
    pub fn is_creditor(&self) -> bool {
        self.balance > Decimal::ZERO
    }

    #[must_use]
    pub fn is_debtor(&self) -> bool {
        self.balance < Decimal::ZERO
    }
}

/// Everything the settle-up screen shows, computed from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettleUpReport {
    /// Net balance per player id.
    pub balances: Balances,
    /// Roster-ordered rows for per-player display.
    pub rows: Vec<PlayerBalance>,
    /// Who pays whom, in sweep order.
    pub transactions: Vec<Transaction>,
    /// Sum of every expense amount in the snapshot.
    pub total_spent: Decimal,
    pub expense_count: usize,
    /// Credit no debtor can cover (expenses without participants).
    pub unsettled_surplus: Decimal,
    /// Hex SHA-256 of `transactions`.
    pub digest: String,
}

impl SettleUpReport {
    /// `true` when nobody owes anything.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Transactions where `player` pays.
    pub fn payments_by(&self, player: &Player) -> impl Iterator<Item = &Transaction> {
        let id = player.id;
        self.transactions.iter().filter(move |t| t.from.id == id)
    }

    /// Transactions where `player` receives.
    pub fn payments_to(&self, player: &Player) -> impl Iterator<Item = &Transaction> {
        let id = player.id;
        self.transactions.iter().filter(move |t| t.to.id == id)
    }
}

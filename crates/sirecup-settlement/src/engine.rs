//! Settlement engine facade.
//!
//! [`SettlementEngine`] binds a validated [`SettlementConfig`] to the pure
//! balance and transaction functions and bundles their outputs into a
//! [`SettleUpReport`]. It holds no state beyond the config, so one engine
//! can serve any number of concurrent requests.

use sirecup_types::{Balances, Expense, Player, Result, SettlementConfig, Transaction};

use crate::balances::{compute_balances, total_spent};
use crate::conservation::unsettleable_surplus;
use crate::digest::compute_settlement_digest;
use crate::report::{PlayerBalance, SettleUpReport};
use crate::transactions::compute_transactions_with;

/// Stateless settlement engine.
#[derive(Debug, Clone, Default)]
pub struct SettlementEngine {
    config: SettlementConfig,
}

impl SettlementEngine {
    /// Create an engine with the default one-cent tolerance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom tolerances.
    ///
    /// # Errors
    /// Returns [`sirecup_types::SirecupError::Configuration`] if `config`
    /// fails validation.
    pub fn with_config(config: SettlementConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &SettlementConfig {
        &self.config
    }

    /// See [`compute_balances`].
    #[must_use]
    pub fn balances(&self, players: &[Player], expenses: &[Expense]) -> Balances {
        compute_balances(players, expenses)
    }

    /// See [`compute_transactions_with`].
    #[must_use]
    pub fn transactions(&self, players: &[Player], balances: &Balances) -> Vec<Transaction> {
        compute_transactions_with(players, balances, &self.config)
    }

    /// Compute balances and transactions for one snapshot of the ledger.
    ///
    /// The caller is responsible for reading `players` and `expenses`
    /// consistently (e.g. within one storage transaction).
    #[must_use]
    pub fn settle_up(&self, players: &[Player], expenses: &[Expense]) -> SettleUpReport {
        let balances = self.balances(players, expenses);
        let sum = balances.total();
        if sum.abs() > self.config.zero_sum_tolerance {
            // Only reachable with amounts near Decimal's precision limit.
            tracing::warn!(sum = %sum, "Balances do not sum to zero");
        }

        let transactions = self.transactions(players, &balances);
        let unsettled_surplus = unsettleable_surplus(&balances, &transactions);
        let digest = hex::encode(compute_settlement_digest(&transactions));

        let rows = players
            .iter()
            .map(|player| PlayerBalance {
                player: player.clone(),
                balance: balances.get(player.id),
            })
            .collect();

        tracing::info!(
            players = players.len(),
            expenses = expenses.len(),
            transactions = transactions.len(),
            digest = %digest,
            "Settle-up report built"
        );

        SettleUpReport {
            balances,
            rows,
            transactions,
            total_spent: total_spent(expenses),
            expense_count: expenses.len(),
            unsettled_surplus,
            digest,
        }
    }
}

/// [`SettlementEngine::settle_up`] with the default configuration.
#[must_use]
pub fn settle_up(players: &[Player], expenses: &[Expense]) -> SettleUpReport {
    SettlementEngine::new().settle_up(players, expenses)
}

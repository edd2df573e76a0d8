//! Greedy largest-first debt settlement.
//!
//! ```text
//! compute_transactions(players, balances) -> [Transaction]
//! ```
//!
//! ## Algorithm
//!
//! 1. Split the roster into debtors (balance < 0, stored as a positive
//!    outstanding amount) and creditors (balance > 0)
//! 2. Stable-sort both descending by outstanding amount; ties keep roster
//!    order
//! 3. Walk both lists with one cursor each. At every step settle
//!    `min(debtor, creditor)`, emit it if it exceeds epsilon, subtract it
//!    from both sides, then advance whichever cursor fell below epsilon or
//!    reached zero (possibly both)
//!
//! The emitted order is part of the contract: callers display it as-is.
//! Running remainders stay unrounded; only emitted amounts are rounded.

use rust_decimal::Decimal;
use sirecup_types::{Balances, Player, SettlementConfig, Transaction, saturating_sum};

/// One side of the sweep: a player and what they still owe or are owed.
#[derive(Debug)]
struct Outstanding<'a> {
    player: &'a Player,
    remaining: Decimal,
}

/// Settle `balances` with the default one-cent epsilon and two-decimal
/// rounding.
#[must_use]
pub fn compute_transactions(players: &[Player], balances: &Balances) -> Vec<Transaction> {
    compute_transactions_with(players, balances, &SettlementConfig::default())
}

/// Settle `balances` using the tolerances in `config`.
///
/// Only roster players take part; balances for ids missing from `players`
/// are ignored. Every emitted transaction has `from != to` and a positive
/// amount.
///
/// A non-positive `config.epsilon` emits every nonzero remainder; the sweep
/// still terminates because a fully paid side always advances.
#[must_use]
pub fn compute_transactions_with(
    players: &[Player],
    balances: &Balances,
    config: &SettlementConfig,
) -> Vec<Transaction> {
    let epsilon = config.epsilon;

    let mut debtors: Vec<Outstanding<'_>> = Vec::new();
    let mut creditors: Vec<Outstanding<'_>> = Vec::new();
    for player in players {
        let balance = balances.get(player.id);
        if balance < Decimal::ZERO {
            debtors.push(Outstanding {
                player,
                remaining: balance.abs(),
            });
        } else if balance > Decimal::ZERO {
            creditors.push(Outstanding {
                player,
                remaining: balance,
            });
        }
    }

    // `sort_by` is stable, so equal amounts keep roster order.
    debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

    let mut transactions = Vec::new();
    let mut debtor_idx = 0;
    let mut creditor_idx = 0;

    while debtor_idx < debtors.len() && creditor_idx < creditors.len() {
        let debtor = &mut debtors[debtor_idx];
        let creditor = &mut creditors[creditor_idx];

        let settle = debtor.remaining.min(creditor.remaining);
        if settle > epsilon {
            let mut amount = settle.round_dp(config.currency_scale);
            amount.rescale(config.currency_scale);
            let tx = Transaction {
                from: debtor.player.clone(),
                to: creditor.player.clone(),
                amount,
            };
            tracing::debug!(
                from = %tx.from.id,
                to = %tx.to.id,
                amount = %tx.amount,
                "Settlement transaction"
            );
            transactions.push(tx);
        }

        debtor.remaining -= settle;
        creditor.remaining -= settle;

        if is_exhausted(debtor.remaining, epsilon) {
            debtor_idx += 1;
        }
        if is_exhausted(creditor.remaining, epsilon) {
            creditor_idx += 1;
        }
    }

    let stranded = saturating_sum(
        creditors[creditor_idx..]
            .iter()
            .map(|c| c.remaining)
            .filter(|r| !is_exhausted(*r, epsilon)),
    );
    if stranded > Decimal::ZERO {
        tracing::warn!(
            surplus = %stranded,
            creditors = creditors.len() - creditor_idx,
            "Unsettleable surplus: no debtor left to cover remaining credit"
        );
    }

    tracing::info!(
        debtors = debtors.len(),
        creditors = creditors.len(),
        transactions = transactions.len(),
        "Settlement complete"
    );

    transactions
}

/// A side is done once nothing is left or only sub-epsilon residue remains.
fn is_exhausted(remaining: Decimal, epsilon: Decimal) -> bool {
    remaining <= Decimal::ZERO || remaining < epsilon
}

#[cfg(test)]
mod tests {
    use sirecup_types::PlayerId;

    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    fn balances(entries: &[(u64, Decimal)]) -> Balances {
        entries.iter().map(|&(id, b)| (PlayerId(id), b)).collect()
    }

    fn summary(txs: &[Transaction]) -> Vec<(u64, u64, Decimal)> {
        txs.iter().map(|t| (t.from.id.0, t.to.id.0, t.amount)).collect()
    }

    #[test]
    fn empty_inputs_no_transactions() {
        assert!(compute_transactions(&[], &Balances::new()).is_empty());
    }

    #[test]
    fn all_zero_no_transactions() {
        let players = Player::dummy_roster(3);
        let b = balances(&[(1, Decimal::ZERO), (2, Decimal::ZERO), (3, Decimal::ZERO)]);
        assert!(compute_transactions(&players, &b).is_empty());
    }

    #[test]
    fn single_pair() {
        let players = Player::dummy_roster(2);
        let b = balances(&[(1, dec(25)), (2, dec(-25))]);
        let txs = compute_transactions(&players, &b);
        assert_eq!(summary(&txs), vec![(2, 1, dec(25))]);
        assert_eq!(txs[0].amount.to_string(), "25.00");
    }

    #[test]
    fn ties_keep_roster_order() {
        let players = Player::dummy_roster(3);
        let b = balances(&[(1, dec(60)), (2, dec(-30)), (3, dec(-30))]);
        let txs = compute_transactions(&players, &b);
        assert_eq!(summary(&txs), vec![(2, 1, dec(30)), (3, 1, dec(30))]);
    }

    #[test]
    fn largest_debtor_pairs_with_largest_creditor_first() {
        // Roster order deliberately differs from amount order.
        let players = Player::dummy_roster(4);
        let b = balances(&[(1, dec(-10)), (2, dec(20)), (3, dec(-40)), (4, dec(30))]);
        let txs = compute_transactions(&players, &b);
        assert_eq!(
            summary(&txs),
            vec![(3, 4, dec(30)), (3, 2, dec(10)), (1, 2, dec(10))]
        );
    }

    #[test]
    fn creditor_without_debtor_emits_nothing() {
        let players = Player::dummy_roster(3);
        let b = balances(&[(1, dec(50)), (2, Decimal::ZERO), (3, Decimal::ZERO)]);
        assert!(compute_transactions(&players, &b).is_empty());
    }

    #[test]
    fn sub_epsilon_residue_dropped() {
        let players = Player::dummy_roster(2);
        let b = balances(&[(1, Decimal::new(5, 3)), (2, Decimal::new(-5, 3))]);
        assert!(compute_transactions(&players, &b).is_empty());
    }

    #[test]
    fn exactly_epsilon_is_not_emitted_but_advances() {
        let players = Player::dummy_roster(2);
        let b = balances(&[(1, Decimal::new(1, 2)), (2, Decimal::new(-1, 2))]);
        assert!(compute_transactions(&players, &b).is_empty());
    }

    #[test]
    fn amounts_rounded_to_cents() {
        let players = Player::dummy_roster(3);
        // 100 split three ways from player 1.
        let share = dec(100) / dec(3);
        let b = balances(&[(1, dec(100) - share), (2, -share), (3, -share)]);
        let txs = compute_transactions(&players, &b);
        assert_eq!(txs.len(), 2);
        for tx in &txs {
            assert_eq!(tx.amount, Decimal::new(3333, 2));
            assert_eq!(tx.amount.scale(), 2);
        }
    }

    #[test]
    fn off_roster_balances_ignored() {
        let players = Player::dummy_roster(1);
        let b = balances(&[(1, dec(10)), (9, dec(-10))]);
        assert!(compute_transactions(&players, &b).is_empty());
    }

    #[test]
    fn no_self_payment() {
        let players = Player::dummy_roster(5);
        let b = balances(&[
            (1, dec(40)),
            (2, dec(-15)),
            (3, dec(-15)),
            (4, dec(5)),
            (5, dec(-15)),
        ]);
        for tx in compute_transactions(&players, &b) {
            assert_ne!(tx.from.id, tx.to.id);
            assert!(tx.amount > Decimal::ZERO);
        }
    }

    #[test]
    fn custom_epsilon_changes_threshold() {
        let players = Player::dummy_roster(2);
        let b = balances(&[(1, Decimal::new(5, 1)), (2, Decimal::new(-5, 1))]);
        let coarse = SettlementConfig {
            epsilon: Decimal::ONE,
            ..SettlementConfig::default()
        };
        assert!(compute_transactions_with(&players, &b, &coarse).is_empty());
        assert_eq!(compute_transactions(&players, &b).len(), 1);
    }

    #[test]
    fn zero_epsilon_still_terminates() {
        let players = Player::dummy_roster(3);
        let b = balances(&[(1, dec(10)), (2, dec(-10)), (3, Decimal::ZERO)]);
        let zero = SettlementConfig {
            epsilon: Decimal::ZERO,
            ..SettlementConfig::default()
        };
        let txs = compute_transactions_with(&players, &b, &zero);
        assert_eq!(summary(&txs), vec![(2, 1, dec(10))]);
        assert_eq!(txs[0].amount.to_string(), "10.00");
    }

    #[test]
    fn negative_epsilon_still_terminates() {
        let players = Player::dummy_roster(4);
        let b = balances(&[(1, dec(-10)), (2, dec(20)), (3, dec(-40)), (4, dec(30))]);
        let negative = SettlementConfig {
            epsilon: Decimal::NEGATIVE_ONE,
            ..SettlementConfig::default()
        };
        assert_eq!(
            compute_transactions_with(&players, &b, &negative),
            compute_transactions(&players, &b)
        );
    }

    #[test]
    fn idempotent() {
        let players = Player::dummy_roster(4);
        let b = balances(&[(1, dec(-10)), (2, dec(20)), (3, dec(-40)), (4, dec(30))]);
        assert_eq!(
            compute_transactions(&players, &b),
            compute_transactions(&players, &b)
        );
    }
}

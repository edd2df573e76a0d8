//! Net balances produced by the settlement engine.
//!
//! Positive means the player is owed money (net creditor), negative means
//! the player owes money (net debtor), zero means settled.
//!
//! Entries keep insertion order: the roster first, then any off-roster ids
//! in the order expenses reference them. Arithmetic saturates at
//! `Decimal::MAX` / `Decimal::MIN` instead of panicking.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::PlayerId;

/// Mapping from player to signed net balance.
///
/// Recomputed from scratch for every settlement request; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balances(IndexMap<PlayerId, Decimal>);

impl Balances {
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Register a player at zero if not already present.
    pub fn open(&mut self, player: PlayerId) {
        self.0.entry(player).or_insert(Decimal::ZERO);
    }

    /// Add `delta` (which may be negative) to a player's balance.
    pub fn adjust(&mut self, player: PlayerId, delta: Decimal) {
        let balance = self.0.entry(player).or_insert(Decimal::ZERO);
        *balance = balance.saturating_add(delta);
    }

    /// Balance for `player`, zero if unknown.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Decimal {
        self.0.get(&player).copied().unwrap_or(Decimal::ZERO)
    }

    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.0.contains_key(&player)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, Decimal)> + '_ {
        self.0.iter().map(|(id, amount)| (*id, *amount))
    }

    /// Sum of all balances. Zero for any ledger, up to division residue.
    #[must_use]
    pub fn total(&self) -> Decimal {
        saturating_sum(self.0.values().copied())
    }

    /// Total owed to net creditors.
    #[must_use]
    pub fn credit_mass(&self) -> Decimal {
        saturating_sum(self.0.values().copied().filter(|b| *b > Decimal::ZERO))
    }

    /// Total owed by net debtors, as a positive number.
    #[must_use]
    pub fn debit_mass(&self) -> Decimal {
        saturating_sum(
            self.0
                .values()
                .filter(|b| **b < Decimal::ZERO)
                .map(|b| b.abs()),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Sum that clamps at the `Decimal` range instead of panicking.
#[must_use]
pub fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

impl FromIterator<(PlayerId, Decimal)> for Balances {
    fn from_iter<I: IntoIterator<Item = (PlayerId, Decimal)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    #[test]
    fn unknown_player_is_zero() {
        let b = Balances::new();
        assert_eq!(b.get(PlayerId(1)), Decimal::ZERO);
        assert!(!b.contains(PlayerId(1)));
        assert!(b.is_empty());
    }

    #[test]
    fn open_does_not_reset() {
        let mut b = Balances::new();
        b.adjust(PlayerId(1), dec(20));
        b.open(PlayerId(1));
        b.open(PlayerId(2));
        assert_eq!(b.get(PlayerId(1)), dec(20));
        assert!(b.contains(PlayerId(2)));
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn masses_and_total() {
        let b: Balances = [
            (PlayerId(1), dec(60)),
            (PlayerId(2), dec(-30)),
            (PlayerId(3), dec(-30)),
            (PlayerId(4), Decimal::ZERO),
        ]
        .into_iter()
        .collect();
        assert_eq!(b.total(), Decimal::ZERO);
        assert_eq!(b.credit_mass(), dec(60));
        assert_eq!(b.debit_mass(), dec(60));
    }

    #[test]
    fn serializes_as_json_object() {
        let b: Balances = [
            (PlayerId(1), Decimal::new(1050, 2)),
            (PlayerId(2), Decimal::new(-1050, 2)),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"{"1":"10.50","2":"-10.50"}"#);
        let back: Balances = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut b = Balances::new();
        for id in [3, 1, 2] {
            b.open(PlayerId(id));
        }
        b.adjust(PlayerId(9), dec(5));
        b.adjust(PlayerId(1), dec(-5));
        let ids: Vec<u64> = b.iter().map(|(id, _)| id.0).collect();
        assert_eq!(ids, vec![3, 1, 2, 9]);
        assert_eq!(
            serde_json::to_string(&b).unwrap(),
            r#"{"3":"0","1":"-5","2":"0","9":"5"}"#
        );
    }

    #[test]
    fn adjust_saturates() {
        let mut b = Balances::new();
        b.adjust(PlayerId(1), Decimal::MAX);
        b.adjust(PlayerId(1), Decimal::MAX);
        b.adjust(PlayerId(2), Decimal::MIN);
        b.adjust(PlayerId(2), Decimal::MIN);
        assert_eq!(b.get(PlayerId(1)), Decimal::MAX);
        assert_eq!(b.get(PlayerId(2)), Decimal::MIN);
        assert_eq!(b.credit_mass(), Decimal::MAX);
        assert_eq!(b.debit_mass(), Decimal::MAX);
        assert_eq!(b.total(), Decimal::ZERO);
    }
}

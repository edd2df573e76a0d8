//! Shared expenses.
//!
//! An [`Expense`] is fronted by one payer and split evenly across its
//! participants. The participant list may be empty, in which case the payer
//! absorbs the whole amount.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ExpenseId, Player, PlayerId, Result, SirecupError};

/// A shared expense as recorded by the data-entry layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    /// Amount fronted by the payer.
    pub amount: Decimal,
    pub payer: PlayerId,
    /// Players sharing the cost. Order is irrelevant to settlement.
    pub participants: Vec<PlayerId>,
    pub spent_at: DateTime<Utc>,
    pub notes: Option<String>,
}

impl Expense {
    #[must_use]
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        amount: Decimal,
        payer: PlayerId,
        participants: Vec<PlayerId>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            payer,
            participants,
            spent_at: Utc::now(),
            notes: None,
        }
    }

    /// Per-participant share, or `None` when nobody is listed.
    #[must_use]
    pub fn share(&self) -> Option<Decimal> {
        if self.participants.is_empty() {
            return None;
        }
        Some(self.amount / Decimal::from(self.participants.len()))
    }

    /// Check the expense the way the entry form does before it is stored.
    ///
    /// The settlement engine never calls this; it accepts whatever it is
    /// given.
    ///
    /// # Errors
    /// - [`SirecupError::InvalidExpense`] if the amount is not positive
    /// - [`SirecupError::PlayerNotFound`] if the payer or a participant is
    ///   missing from `roster`
    /// - [`SirecupError::DuplicateParticipant`] if a participant repeats
    pub fn validate(&self, roster: &[Player]) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(SirecupError::InvalidExpense {
                expense: self.id,
                reason: format!("amount must be positive, got {}", self.amount),
            });
        }

        let known: HashSet<PlayerId> = roster.iter().map(|p| p.id).collect();
        if !known.contains(&self.payer) {
            return Err(SirecupError::PlayerNotFound(self.payer));
        }

        let mut seen = HashSet::with_capacity(self.participants.len());
        for &participant in &self.participants {
            if !known.contains(&participant) {
                return Err(SirecupError::PlayerNotFound(participant));
            }
            if !seen.insert(participant) {
                return Err(SirecupError::DuplicateParticipant {
                    expense: self.id,
                    player: participant,
                });
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Expense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Expense[{}] {} by {} for {} split {} ways",
            self.id,
            self.description,
            self.payer,
            self.amount,
            self.participants.len(),
        )
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl Expense {
    /// Create an expense with a fixed timestamp for unit tests.
    pub fn dummy(id: u64, amount: Decimal, payer: u64, participants: &[u64]) -> Self {
        Self {
            id: ExpenseId(id),
            description: format!("expense {id}"),
            amount,
            payer: PlayerId(payer),
            participants: participants.iter().copied().map(PlayerId).collect(),
            spent_at: DateTime::<Utc>::UNIX_EPOCH,
            notes: None,
        }
    }
}

#[cfg(feature = "test-helpers")]
impl Expense {
    /// Generate `count` random expenses over players `1..=player_count`.
    ///
    /// Amounts are whole cents between 0.01 and 500.00. Participant lists
    /// are random subsets and may be empty.
    pub fn random_ledger<R: rand::Rng>(rng: &mut R, player_count: u64, count: u64) -> Vec<Self> {
        assert!(player_count > 0, "random_ledger needs at least one player");
        (1..=count)
            .map(|id| {
                let cents = rng.gen_range(1..=50_000_i64);
                let payer = rng.gen_range(1..=player_count);
                let participants: Vec<u64> = (1..=player_count)
                    .filter(|_| rng.gen_bool(0.6))
                    .collect();
                Self::dummy(id, Decimal::new(cents, 2), payer, &participants)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Player> {
        Player::dummy_roster(3)
    }

    #[test]
    fn share_splits_evenly() {
        let e = Expense::dummy(1, Decimal::new(90, 0), 1, &[1, 2, 3]);
        assert_eq!(e.share(), Some(Decimal::new(30, 0)));
    }

    #[test]
    fn share_none_without_participants() {
        let e = Expense::dummy(1, Decimal::new(50, 0), 1, &[]);
        assert_eq!(e.share(), None);
    }

    #[test]
    fn validate_accepts_well_formed() {
        let e = Expense::dummy(1, Decimal::new(4250, 2), 2, &[1, 2, 3]);
        assert!(e.validate(&roster()).is_ok());
    }

    #[test]
    fn validate_accepts_empty_participants() {
        let e = Expense::dummy(1, Decimal::new(50, 0), 1, &[]);
        assert!(e.validate(&roster()).is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_amount() {
        let e = Expense::dummy(5, Decimal::ZERO, 1, &[1]);
        let err = e.validate(&roster()).unwrap_err();
        assert!(matches!(
            err,
            SirecupError::InvalidExpense { expense, .. } if expense == ExpenseId(5)
        ));

        let e = Expense::dummy(6, Decimal::new(-10, 0), 1, &[1]);
        assert!(e.validate(&roster()).is_err());
    }

    #[test]
    fn validate_rejects_unknown_payer() {
        let e = Expense::dummy(1, Decimal::ONE, 9, &[1]);
        let err = e.validate(&roster()).unwrap_err();
        assert!(matches!(err, SirecupError::PlayerNotFound(id) if id == PlayerId(9)));
    }

    #[test]
    fn validate_rejects_unknown_participant() {
        let e = Expense::dummy(1, Decimal::ONE, 1, &[1, 4]);
        let err = e.validate(&roster()).unwrap_err();
        assert!(matches!(err, SirecupError::PlayerNotFound(id) if id == PlayerId(4)));
    }

    #[test]
    fn validate_rejects_duplicate_participant() {
        let e = Expense::dummy(3, Decimal::ONE, 1, &[1, 2, 2]);
        let err = e.validate(&roster()).unwrap_err();
        assert!(matches!(
            err,
            SirecupError::DuplicateParticipant { player, .. } if player == PlayerId(2)
        ));
    }

    #[test]
    fn expense_serde_roundtrip() {
        let e = Expense::dummy(1, Decimal::new(12345, 2), 1, &[1, 2]);
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"amount\":\"123.45\""), "Got: {json}");
        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}

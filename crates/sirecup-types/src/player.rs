//! Roster entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::PlayerId;

/// A player on the trip roster.
///
/// Only `id` and `name` matter to settlement; the rest is carried so the
/// roster can be handed around as one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Display label.
    pub name: String,
    pub handicap: Decimal,
    /// Team assignment, if drafted.
    pub team: Option<String>,
    pub is_captain: bool,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            handicap: Decimal::ZERO,
            team: None,
            is_captain: false,
        }
    }

    #[must_use]
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    #[must_use]
    pub fn with_handicap(mut self, handicap: Decimal) -> Self {
        self.handicap = handicap;
        self
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl Player {
    /// Create a roster entry named after its id (`P1`, `P2`, ...).
    pub fn dummy(id: u64) -> Self {
        Self::new(PlayerId(id), format!("P{id}"))
    }

    /// Build a roster of `count` dummy players with ids `1..=count`.
    pub fn dummy_roster(count: u64) -> Vec<Self> {
        (1..=count).map(Self::dummy).collect()
    }
}

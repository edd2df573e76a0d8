//! Head-to-head match records between the two trip teams.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{MatchId, PlayerId};

/// Play format of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFormat {
    Singles,
    Fourball,
    Foursomes,
    Scramble,
}

impl std::fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Singles => write!(f, "SINGLES"),
            Self::Fourball => write!(f, "FOURBALL"),
            Self::Foursomes => write!(f, "FOURSOMES"),
            Self::Scramble => write!(f, "SCRAMBLE"),
        }
    }
}

/// Lifecycle status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scheduled => write!(f, "SCHEDULED"),
            Self::InProgress => write!(f, "IN_PROGRESS"),
            Self::Completed => write!(f, "COMPLETED"),
        }
    }
}

/// Who won a completed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Team1,
    Team2,
    Halved,
}

impl MatchOutcome {
    /// Points awarded as `(team1, team2)`: a win is worth one point and a
    /// halved match half a point to each side.
    #[must_use]
    pub fn points(self) -> (Decimal, Decimal) {
        let half = Decimal::new(5, 1);
        match self {
            Self::Team1 => (Decimal::ONE, Decimal::ZERO),
            Self::Team2 => (Decimal::ZERO, Decimal::ONE),
            Self::Halved => (half, half),
        }
    }
}

/// A match between a side from each team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub played_on: NaiveDate,
    pub format: MatchFormat,
    pub status: MatchStatus,
    pub team1_players: Vec<PlayerId>,
    pub team2_players: Vec<PlayerId>,
    /// Set once the match is completed and a result is entered.
    pub outcome: Option<MatchOutcome>,
    /// Free-form margin, e.g. "3&2", "1 up", "A/S".
    pub result_description: Option<String>,
}

impl Match {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// Points this match contributes to the standings.
    ///
    /// Only completed matches with a recorded outcome score.
    #[must_use]
    pub fn points(&self) -> (Decimal, Decimal) {
        match (self.status, self.outcome) {
            (MatchStatus::Completed, Some(outcome)) => outcome.points(),
            _ => (Decimal::ZERO, Decimal::ZERO),
        }
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl Match {
    /// Create a singles match between players 1 and 2 in the given state.
    pub fn dummy(id: u64, status: MatchStatus, outcome: Option<MatchOutcome>) -> Self {
        Self {
            id: MatchId(id),
            played_on: NaiveDate::from_ymd_opt(2026, 10, 24).unwrap_or_default(),
            format: MatchFormat::Singles,
            status,
            team1_players: vec![PlayerId(1)],
            team2_players: vec![PlayerId(2)],
            outcome,
            result_description: None,
        }
    }
}

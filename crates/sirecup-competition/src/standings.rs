//! Team standings.
//!
//! ```text
//! points[team] = Σ points(m, team) for m in matches where m.status == Completed
//! ```
//!
//! A win is worth one point, a halved match half a point to each side.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sirecup_types::Match;
use sirecup_types::constants::{DEFAULT_TEAM1_NAME, DEFAULT_TEAM2_NAME};

/// One team's line in the standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    pub name: String,
    pub points: Decimal,
}

/// The standings view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub team1: TeamScore,
    pub team2: TeamScore,
    /// Completed matches, including any with no result entered yet.
    pub matches_played: usize,
    /// Points still available from matches not yet completed.
    pub points_remaining: Decimal,
}

impl Standings {
    /// The team ahead on points, or `None` when level.
    #[must_use]
    pub fn leader(&self) -> Option<&TeamScore> {
        match self.team1.points.cmp(&self.team2.points) {
            std::cmp::Ordering::Greater => Some(&self.team1),
            std::cmp::Ordering::Less => Some(&self.team2),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Compute team standings.
///
/// `team_names` is the trip's configured list; missing entries fall back
/// to "Team 1" / "Team 2" and extra entries are ignored.
#[must_use]
pub fn compute_standings(team_names: &[String], matches: &[Match]) -> Standings {
    let name = |idx: usize, fallback: &str| {
        team_names
            .get(idx)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    };

    let mut team1_points = Decimal::ZERO;
    let mut team2_points = Decimal::ZERO;
    let mut matches_played = 0;
    let mut matches_open = 0_usize;

    for m in matches {
        if !m.is_completed() {
            matches_open += 1;
            continue;
        }
        if m.outcome.is_none() {
            tracing::warn!(match_id = %m.id, "Completed match has no recorded outcome");
        }
        let (t1, t2) = m.points();
        team1_points += t1;
        team2_points += t2;
        matches_played += 1;
    }

    tracing::debug!(
        team1 = %team1_points,
        team2 = %team2_points,
        matches_played,
        matches_open,
        "Standings computed"
    );

    Standings {
        team1: TeamScore {
            name: name(0, DEFAULT_TEAM1_NAME),
            points: team1_points,
        },
        team2: TeamScore {
            name: name(1, DEFAULT_TEAM2_NAME),
            points: team2_points,
        },
        matches_played,
        points_remaining: Decimal::from(matches_open),
    }
}

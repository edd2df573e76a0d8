//! Round scorecards.
//!
//! Scores are entered hole by hole. A blank hole is scored at the course
//! par for that hole; a player with every hole blank did not play and gets
//! no card.

use serde::{Deserialize, Serialize};
use sirecup_types::constants::HOLES_PER_ROUND;
use sirecup_types::{Course, PlayerId, Result, SirecupError};

/// Raw per-hole input for one player. `None` is a blank hole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleEntries {
    pub player: PlayerId,
    pub holes: Vec<Option<u8>>,
}

/// A scored 18-hole card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub player: PlayerId,
    pub hole_scores: Vec<u8>,
    pub total: u32,
    /// Strokes relative to course par (negative is under par).
    pub to_par: i64,
}

impl Scorecard {
    /// Front nine total.
    #[must_use]
    pub fn front_nine(&self) -> u32 {
        self.hole_scores.iter().take(9).map(|&s| u32::from(s)).sum()
    }

    /// Back nine total.
    #[must_use]
    pub fn back_nine(&self) -> u32 {
        self.hole_scores.iter().skip(9).map(|&s| u32::from(s)).sum()
    }
}

/// Score one round on `course`.
///
/// Cards come back in entry order, minus players who entered nothing.
///
/// # Errors
/// - [`SirecupError::InvalidCourse`] if the course is not a valid 18-hole
///   layout
/// - [`SirecupError::InvalidScorecard`] if an entry does not have 18 holes
///   or records a score of zero
pub fn score_round(course: &Course, entries: &[HoleEntries]) -> Result<Vec<Scorecard>> {
    course.validate()?;
    let course_par = i64::from(course.total_par());

    let mut cards = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.holes.len() != HOLES_PER_ROUND {
            return Err(SirecupError::InvalidScorecard {
                player: entry.player,
                reason: format!(
                    "expected {HOLES_PER_ROUND} holes, got {}",
                    entry.holes.len()
                ),
            });
        }
        if let Some(hole) = entry.holes.iter().position(|h| *h == Some(0)) {
            return Err(SirecupError::InvalidScorecard {
                player: entry.player,
                reason: format!("hole {} scored 0", hole + 1),
            });
        }
        if entry.holes.iter().all(Option::is_none) {
            continue;
        }

        let hole_scores: Vec<u8> = entry
            .holes
            .iter()
            .zip(&course.pars)
            .map(|(score, &par)| score.unwrap_or(par))
            .collect();
        let total: u32 = hole_scores.iter().map(|&s| u32::from(s)).sum();

        cards.push(Scorecard {
            player: entry.player,
            hole_scores,
            total,
            to_par: i64::from(total) - course_par,
        });
    }

    tracing::debug!(
        course = %course.id,
        entries = entries.len(),
        cards = cards.len(),
        "Round scored"
    );

    Ok(cards)
}

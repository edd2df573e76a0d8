//! # sirecup-competition
//!
//! Read-only competition views derived from stored records:
//!
//! - **Standings**: team points summed over completed matches
//! - **Scorecards**: 18-hole cards where unentered holes take the course par
//!
//! Like the settlement engine, these are pure functions of their inputs.

pub mod scorecard;
pub mod standings;

pub use scorecard::{HoleEntries, Scorecard, score_round};
pub use standings::{Standings, TeamScore, compute_standings};

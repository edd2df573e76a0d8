//! Error types for the Sire Cup ledger.
//!
//! All errors use the `SC_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Roster errors
//! - 2xx: Expense errors
//! - 3xx: Settlement errors
//! - 4xx: Competition errors
//! - 9xx: General / internal errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{CourseId, ExpenseId, PlayerId};

/// Central error enum for all fallible Sire Cup operations.
///
/// The settlement engine itself never fails; these errors come from the
/// validation and verification helpers around it.
#[derive(Debug, Error)]
pub enum SirecupError {
    // =================================================================
    // Roster Errors (1xx)
    // =================================================================
    /// A referenced player is not on the roster.
    #[error("SC_ERR_100: Player not found: {0}")]
    PlayerNotFound(PlayerId),

    // =================================================================
    // Expense Errors (2xx)
    // =================================================================
    /// The expense failed validation (non-positive amount, etc.).
    #[error("SC_ERR_200: Invalid expense {expense}: {reason}")]
    InvalidExpense { expense: ExpenseId, reason: String },

    /// The same player is listed twice as a participant.
    #[error("SC_ERR_201: Player {player} listed twice on expense {expense}")]
    DuplicateParticipant { expense: ExpenseId, player: PlayerId },

    // =================================================================
    // Settlement Errors (3xx)
    // =================================================================
    /// Balances do not sum to zero.
    #[error("SC_ERR_300: Balance invariant violation: sum is {sum}")]
    BalanceInvariantViolation { sum: Decimal },

    /// A player still carries a balance after applying transactions.
    #[error("SC_ERR_301: Unsettled balance for {player}: {residual}")]
    UnsettledBalance { player: PlayerId, residual: Decimal },

    // =================================================================
    // Competition Errors (4xx)
    // =================================================================
    /// The course definition is unusable (wrong hole count, zero par).
    #[error("SC_ERR_400: Invalid course {course}: {reason}")]
    InvalidCourse { course: CourseId, reason: String },

    /// A scorecard entry could not be scored.
    #[error("SC_ERR_401: Invalid scorecard for {player}: {reason}")]
    InvalidScorecard { player: PlayerId, reason: String },

    // =================================================================
    // General (9xx)
    // =================================================================
    /// Serialization / deserialization error.
    #[error("SC_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid config file, out-of-range values, etc.).
    #[error("SC_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SirecupError>;

impl From<serde_json::Error> for SirecupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

//! System-wide constants for the Sire Cup ledger.

use rust_decimal::Decimal;

/// Tolerance that absorbs decimal residue when matching debtors to
/// creditors (one cent).
pub const SETTLEMENT_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Decimal places used for emitted transaction amounts.
pub const CURRENCY_SCALE: u32 = 2;

/// Largest scale a `Decimal` can carry.
pub const MAX_DECIMAL_SCALE: u32 = 28;

/// Tolerance used when checking that balances sum to zero.
///
/// Even splits such as `100 / 3` are not exactly representable, so the
/// sum may drift in the last of the 28 significant digits.
pub const ZERO_SUM_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 6);

/// Holes on a regulation course.
pub const HOLES_PER_ROUND: usize = 18;

/// Display names used when the trip has not named its teams.
pub const DEFAULT_TEAM1_NAME: &str = "Team 1";
pub const DEFAULT_TEAM2_NAME: &str = "Team 2";

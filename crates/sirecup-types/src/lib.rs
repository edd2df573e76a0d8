//! # sirecup-types
//!
//! Shared types, errors, and configuration for the **Sire Cup** trip ledger.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`PlayerId`], [`ExpenseId`], [`MatchId`], [`CourseId`]
//! - **Roster model**: [`Player`]
//! - **Expense model**: [`Expense`]
//! - **Settlement outputs**: [`Balances`], [`Transaction`]
//! - **Competition model**: [`Match`], [`MatchFormat`], [`MatchStatus`], [`MatchOutcome`], [`Course`]
//! - **Configuration**: [`SettlementConfig`]
//! - **Errors**: [`SirecupError`] with `SC_ERR_` prefix codes
//! - **Constants**: settlement tolerances and course defaults

pub mod balance;
pub mod config;
pub mod constants;
pub mod course;
pub mod error;
pub mod expense;
pub mod ids;
pub mod matchplay;
pub mod player;
pub mod transaction;

// Re-export all primary types at crate root for ergonomic imports:
//   use sirecup_types::{Player, Expense, Balances, Transaction, ...};

pub use balance::*;
pub use config::*;
pub use course::*;
pub use error::*;
pub use expense::*;
pub use ids::*;
pub use matchplay::*;
pub use player::*;
pub use transaction::*;

// Constants are accessed via `sirecup_types::constants::FOO`
// (not re-exported to avoid name collisions).

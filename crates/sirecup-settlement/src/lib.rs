//! # sirecup-settlement
//!
//! **Settlement engine** for shared trip expenses.
//!
//! ## Architecture
//!
//! Pure computation over a snapshot supplied by the storage layer:
//! 1. [`compute_balances`]: credit each payer, debit each participant an
//!    even share
//! 2. [`compute_transactions`]: pair debtors with creditors, largest
//!    outstanding amounts first
//! 3. [`settle_up`]: both of the above bundled into a [`SettleUpReport`]
//!    for display
//!
//! Nothing here performs I/O, holds state between calls, or mutates its
//! inputs. Identical inputs always produce identical outputs, witnessed by
//! the [`compute_settlement_digest`] fingerprint.
//!
//! The pairing is a greedy largest-first sweep. It is deterministic and
//! usually short, but it does not guarantee the minimum number of
//! transactions.

pub mod balances;
pub mod conservation;
pub mod digest;
pub mod engine;
pub mod report;
pub mod transactions;

pub use balances::compute_balances;
pub use conservation::{
    apply_transactions, unsettleable_surplus, verify_fully_settled, verify_zero_sum,
};
pub use digest::{compute_settlement_digest, verify_settlement_digest};
pub use engine::{SettlementEngine, settle_up};
pub use report::{PlayerBalance, SettleUpReport};
pub use transactions::{compute_transactions, compute_transactions_with};

//! Settlement fingerprints.
//!
//! Settling the same snapshot twice must yield the same transactions in
//! the same order. The digest is a SHA-256 over the ordered transaction
//! list, so two runs can be compared (or cached) without diffing full
//! payloads.

use sha2::{Digest, Sha256};
use sirecup_types::Transaction;

/// Compute the digest of an ordered transaction list.
///
/// Depends on, per transaction and in order: payer id, receiver id, and
/// the amount's canonical string. Display names do not contribute.
#[must_use]
pub fn compute_settlement_digest(transactions: &[Transaction]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"sirecup:settlement:v1:");
    hasher.update((transactions.len() as u64).to_le_bytes());

    for tx in transactions {
        hasher.update(tx.from.id.0.to_le_bytes());
        hasher.update(tx.to.id.0.to_le_bytes());
        // Normalize so 30 and 30.00 hash alike.
        hasher.update(tx.amount.normalize().to_string().as_bytes());
        hasher.update(b";");
    }

    let result = hasher.finalize();
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&result);
    digest
}

/// Recompute the digest and compare with `expected`.
#[must_use]
pub fn verify_settlement_digest(transactions: &[Transaction], expected: &[u8; 32]) -> bool {
    compute_settlement_digest(transactions) == *expected
}

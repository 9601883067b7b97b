//! Vector store abstraction.
//!
//! The [`VectorStore`] trait is the seam to the storage engine behind the
//! embedding index. It only knows about vectors and metadata; embedding the
//! text is the caller's job. Backends:
//!
//! | Backend | Crate | Use |
//! |---------|-------|-----|
//! | [`memory::InMemoryVectorStore`] | this crate | tests, ephemeral runs |
//! | `SqliteVectorStore` | `legal-rag` | durable on-disk index |
//!
//! Stores are append-only: entries are never updated or deleted.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{IndexEntry, ScoredEntry};

/// Result of an [`add`](VectorStore::add) call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOutcome {
    /// Number of entries written.
    pub inserted: usize,
    /// Ids that already existed and were left untouched.
    pub skipped: Vec<String>,
}

/// Append-only store of `(id, embedding, metadata)` entries, queryable by
/// cosine similarity.
///
/// Implementations must tolerate concurrent readers and writers.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Persist a batch of entries as one unit: either every new entry is
    /// written or none are.
    ///
    /// An id that is already present is not overwritten; it is reported in
    /// [`AddOutcome::skipped`].
    async fn add(&self, entries: &[IndexEntry]) -> Result<AddOutcome>;

    /// Return up to `k` entries most similar to `vector`, best first.
    async fn query(&self, vector: &[f32], k: usize) -> Result<Vec<ScoredEntry>>;

    /// Number of stored entries.
    async fn count(&self) -> Result<usize>;
}

/// Sort candidates best-first and keep the top `k`.
///
/// The sort is stable, so entries with equal scores keep their insertion
/// order.
pub fn rank_top_k(mut candidates: Vec<ScoredEntry>, k: usize) -> Vec<ScoredEntry> {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates.truncate(k);
    candidates
}

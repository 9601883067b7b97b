//! In-memory [`VectorStore`] for tests and throwaway runs.
//!
//! Entries live in a `Vec` behind `std::sync::RwLock`. Queries are
//! brute-force cosine similarity over every stored vector.

use std::collections::HashSet;
use std::sync::RwLock;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::embedding::cosine_similarity;
use crate::models::{IndexEntry, ScoredEntry};

use super::{rank_top_k, AddOutcome, VectorStore};

#[derive(Default)]
struct Inner {
    entries: Vec<IndexEntry>,
    ids: HashSet<String>,
}

/// Non-durable vector store.
#[derive(Default)]
pub struct InMemoryVectorStore {
    inner: RwLock<Inner>,
}

impl InMemoryVectorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of every stored entry, in insertion order.
    pub fn ids(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|inner| inner.entries.iter().map(|e| e.id.clone()).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn add(&self, entries: &[IndexEntry]) -> Result<AddOutcome> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| anyhow!("in-memory store lock poisoned"))?;

        let mut outcome = AddOutcome::default();
        for entry in entries {
            if inner.ids.insert(entry.id.clone()) {
                inner.entries.push(entry.clone());
                outcome.inserted += 1;
            } else {
                outcome.skipped.push(entry.id.clone());
            }
        }
        Ok(outcome)
    }

    async fn query(&self, vector: &[f32], k: usize) -> Result<Vec<ScoredEntry>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| anyhow!("in-memory store lock poisoned"))?;

        let candidates = inner
            .entries
            .iter()
            .map(|e| ScoredEntry {
                id: e.id.clone(),
                score: cosine_similarity(vector, &e.embedding),
                metadata: e.metadata.clone(),
            })
            .collect();

        Ok(rank_top_k(candidates, k))
    }

    async fn count(&self) -> Result<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| anyhow!("in-memory store lock poisoned"))?;
        Ok(inner.entries.len())
    }
}

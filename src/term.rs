//! Interned term identifiers for the assertion vocabulary.
//!
//! Both entailment pipelines report their results over IRIs. Before comparison
//! those IRIs are interned into [`TermId`]s through a shared [`TermInterner`],
//! so that assertions from the two paths land in one common vocabulary and
//! set/map comparison is cheap integer comparison. The [`TermInterner`]
//! provides thread-safe O(1) lookups in both directions.

use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::error::{MaatResult, TermError};

/// Unique, niche-optimized identifier for an interned term.
///
/// Uses `NonZeroU64` so that `Option<TermId>` is the same size as `TermId`
/// (the niche optimization lets the compiler use 0 as the `None` discriminant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct TermId(NonZeroU64);

impl TermId {
    /// Create a `TermId` from a raw `u64`.
    ///
    /// Returns `None` if `raw` is zero.
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(TermId)
    }

    /// Get the underlying `u64` value.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl std::fmt::Display for TermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "term:{}", self.0)
    }
}

/// Thread-safe bidirectional IRI ↔ [`TermId`] interner.
///
/// Interning the same IRI twice yields the same id. Safe to share across
/// threads via `Arc<TermInterner>`.
pub struct TermInterner {
    /// Forward map: IRI → TermId (source of truth for interning).
    iri_to_id: DashMap<String, TermId>,
    /// Reverse map: TermId → IRI.
    id_to_iri: DashMap<TermId, String>,
    next: AtomicU64,
}

impl TermInterner {
    /// Create a new empty interner. IDs start from 1.
    pub fn new() -> Self {
        Self {
            iri_to_id: DashMap::new(),
            id_to_iri: DashMap::new(),
            next: AtomicU64::new(1),
        }
    }

    /// Intern an IRI, returning its stable id.
    ///
    /// Errors only if the ID space is exhausted (after 2^64 - 1 allocations).
    pub fn intern(&self, iri: &str) -> MaatResult<TermId> {
        if let Some(existing) = self.iri_to_id.get(iri) {
            return Ok(*existing.value());
        }
        let raw = self.next.fetch_add(1, Ordering::Relaxed);
        let id = TermId::new(raw).ok_or(TermError::AllocatorExhausted)?;
        // Two threads may race on a fresh IRI; the entry API keeps the first
        // winner and the loser's id is simply never referenced again.
        let id = *self.iri_to_id.entry(iri.to_owned()).or_insert(id);
        self.id_to_iri.entry(id).or_insert_with(|| iri.to_owned());
        Ok(id)
    }

    /// Look up the id for an already-interned IRI.
    pub fn lookup(&self, iri: &str) -> Option<TermId> {
        self.iri_to_id.get(iri).map(|r| *r.value())
    }

    /// Resolve an id to its IRI, falling back to `term:{id}` for unknown ids.
    pub fn resolve(&self, id: TermId) -> String {
        self.id_to_iri
            .get(&id)
            .map(|r| r.value().clone())
            .unwrap_or_else(|| format!("term:{}", id.get()))
    }

    /// Number of interned terms.
    pub fn len(&self) -> usize {
        self.id_to_iri.len()
    }

    /// Whether the interner is empty.
    pub fn is_empty(&self) -> bool {
        self.id_to_iri.is_empty()
    }
}

impl Default for TermInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TermInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermInterner")
            .field("count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_id_niche_optimization() {
        // Option<TermId> should be the same size as TermId thanks to NonZeroU64.
        assert_eq!(
            std::mem::size_of::<Option<TermId>>(),
            std::mem::size_of::<TermId>()
        );
    }

    #[test]
    fn term_id_zero_is_none() {
        assert!(TermId::new(0).is_none());
        assert!(TermId::new(1).is_some());
        assert_eq!(TermId::new(42).unwrap().get(), 42);
    }

    #[test]
    fn interning_is_idempotent() {
        let interner = TermInterner::new();
        let a = interner.intern("http://example.org/ont#Alice").unwrap();
        let b = interner.intern("http://example.org/ont#Alice").unwrap();
        assert_eq!(a, b);
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn distinct_iris_get_distinct_ids() {
        let interner = TermInterner::new();
        let a = interner.intern("http://example.org/ont#Alice").unwrap();
        let b = interner.intern("http://example.org/ont#Bob").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn resolve_round_trips() {
        let interner = TermInterner::new();
        let id = interner.intern("http://example.org/ont#Person").unwrap();
        assert_eq!(interner.resolve(id), "http://example.org/ont#Person");
        assert_eq!(interner.lookup("http://example.org/ont#Person"), Some(id));
    }

    #[test]
    fn resolve_unknown_falls_back() {
        let interner = TermInterner::new();
        let ghost = TermId::new(999).unwrap();
        assert_eq!(interner.resolve(ghost), "term:999");
    }

    #[test]
    fn term_id_ordering() {
        let interner = TermInterner::new();
        let a = interner.intern("a").unwrap();
        let b = interner.intern("b").unwrap();
        assert!(a < b);
    }
}

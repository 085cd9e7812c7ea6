//! Assertion data model: the common vocabulary both pipelines are compared in.
//!
//! A [`ConceptAssertion`] states that an individual belongs to a class; a
//! [`RoleAssertion`] states that a binary relation holds between two
//! individuals; a [`SameAsGrouping`] maps a representative individual to the
//! set of individuals entailed equal to it. One computation path's entire
//! result is captured as an immutable [`EntailmentSnapshot`].

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::term::TermId;

/// A claim that an individual is a member of a class.
///
/// Compared by structural value equality, never by identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConceptAssertion {
    /// The named individual.
    pub individual: TermId,
    /// The class the individual belongs to.
    pub concept: TermId,
}

impl ConceptAssertion {
    /// Create a new concept assertion.
    pub fn new(individual: TermId, concept: TermId) -> Self {
        Self {
            individual,
            concept,
        }
    }
}

/// A claim that a binary relation holds between two individuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoleAssertion {
    /// The subject individual.
    pub subject: TermId,
    /// The object property (role).
    pub role: TermId,
    /// The object individual.
    pub object: TermId,
}

impl RoleAssertion {
    /// Create a new role assertion.
    pub fn new(subject: TermId, role: TermId, object: TermId) -> Self {
        Self {
            subject,
            role,
            object,
        }
    }
}

/// Mapping from a representative individual to its sameAs equivalence class.
///
/// The same logical equivalence class may appear under different
/// representative keys depending on which pipeline produced it; grouping
/// equality is therefore representative-sensitive (see [`crate::compare`]).
/// BTree containers give deterministic iteration for diagnostics.
pub type SameAsGrouping = BTreeMap<TermId, BTreeSet<TermId>>;

/// Immutable bundle of one computation path's entailment results.
///
/// Built once per session per path and never mutated afterwards; all
/// comparison queries are pure functions of two snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntailmentSnapshot {
    /// Entailed concept assertions.
    pub concept_assertions: HashSet<ConceptAssertion>,
    /// Entailed role assertions.
    pub role_assertions: HashSet<RoleAssertion>,
    /// Entailed sameAs grouping.
    pub sameas: SameAsGrouping,
    /// Expected number of concept assertions from the KB's own bookkeeping,
    /// if the path maintains one (only the materializer does).
    pub expected_concept_count: Option<usize>,
    /// Expected number of role assertions from the KB's own bookkeeping.
    pub expected_role_count: Option<usize>,
}

impl EntailmentSnapshot {
    /// Create a snapshot from the three result categories.
    pub fn new(
        concept_assertions: HashSet<ConceptAssertion>,
        role_assertions: HashSet<RoleAssertion>,
        sameas: SameAsGrouping,
    ) -> Self {
        Self {
            concept_assertions,
            role_assertions,
            sameas,
            expected_concept_count: None,
            expected_role_count: None,
        }
    }

    /// Attach the expected concept-assertion count.
    pub fn with_expected_concept_count(mut self, count: usize) -> Self {
        self.expected_concept_count = Some(count);
        self
    }

    /// Attach the expected role-assertion count.
    pub fn with_expected_role_count(mut self, count: usize) -> Self {
        self.expected_role_count = Some(count);
        self
    }

    /// Whether the concept-assertion set size matches the expected count.
    ///
    /// Trivially true when no expected count was recorded.
    pub fn concept_count_correct(&self) -> bool {
        self.expected_concept_count
            .is_none_or(|n| n == self.concept_assertions.len())
    }

    /// Whether the role-assertion set size matches the expected count.
    pub fn role_count_correct(&self) -> bool {
        self.expected_role_count
            .is_none_or(|n| n == self.role_assertions.len())
    }
}

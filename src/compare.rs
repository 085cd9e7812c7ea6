//! Result comparison: set equality and structured differencing.
//!
//! Comparison is pure and returns values; rendering lives in
//! [`crate::report`]. For mismatching sets the comparator always computes
//! *both* one-sided differences, never the raw symmetric difference alone:
//! assertions only the materializer derived point at over-derivation
//! (unsoundness relative to the reference), assertions only the reasoner
//! derived point at under-derivation (incompleteness).

use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

use serde::Serialize;

use crate::assertion::SameAsGrouping;
use crate::term::TermId;

/// Both one-sided differences between the two pipelines' result sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetDiff<T: Ord> {
    /// Derived by the materializer but not by the DL reasoner.
    pub only_in_materializer: BTreeSet<T>,
    /// Derived by the DL reasoner but not by the materializer.
    pub only_in_reasoner: BTreeSet<T>,
}

impl<T: Ord> SetDiff<T> {
    /// Whether the two sets were equal.
    pub fn is_empty(&self) -> bool {
        self.only_in_materializer.is_empty() && self.only_in_reasoner.is_empty()
    }
}

/// Partition two result sets into their one-sided differences.
///
/// The partitions come back ordered so diagnostics render deterministically.
pub fn diff_sets<T>(by_materializer: &HashSet<T>, by_reasoner: &HashSet<T>) -> SetDiff<T>
where
    T: Eq + Hash + Ord + Clone,
{
    let only_in_materializer = by_materializer
        .iter()
        .filter(|item| !by_reasoner.contains(item))
        .cloned()
        .collect();
    let only_in_reasoner = by_reasoner
        .iter()
        .filter(|item| !by_materializer.contains(item))
        .cloned()
        .collect();
    SetDiff {
        only_in_materializer,
        only_in_reasoner,
    }
}

/// Strict mapping equality between two sameAs groupings.
///
/// Key sets must be equal and every shared key's class set equal. This is
/// representative-sensitive: `{a: {b}}` and `{b: {a}}` encode the same
/// equivalence class but compare unequal. Callers that want to know whether
/// a mismatch is representative-choice only can compare
/// [`canonical_partition`]s as well.
pub fn groupings_equal(by_materializer: &SameAsGrouping, by_reasoner: &SameAsGrouping) -> bool {
    by_materializer == by_reasoner
}

/// Canonicalize a grouping into a partition of disjoint equivalence classes.
///
/// Each class is closed over its own representative key (key ∪ members), so
/// the result no longer depends on which member served as the key.
pub fn canonical_partition(grouping: &SameAsGrouping) -> BTreeSet<BTreeSet<TermId>> {
    grouping
        .iter()
        .map(|(representative, members)| {
            let mut class = members.clone();
            class.insert(*representative);
            class
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertion::ConceptAssertion;
    use crate::term::TermId;
    use std::collections::BTreeMap;

    fn term(id: u64) -> TermId {
        TermId::new(id).unwrap()
    }

    fn concept_set(pairs: &[(u64, u64)]) -> HashSet<ConceptAssertion> {
        pairs
            .iter()
            .map(|&(i, c)| ConceptAssertion::new(term(i), term(c)))
            .collect()
    }

    #[test]
    fn equal_sets_yield_empty_diff() {
        let a = concept_set(&[(1, 10), (2, 10)]);
        let b = concept_set(&[(2, 10), (1, 10)]);
        let diff = diff_sets(&a, &b);
        assert!(diff.is_empty());
    }

    #[test]
    fn asymmetric_diff_partitions_by_source() {
        let by_materializer = concept_set(&[(1, 10)]);
        let by_reasoner = concept_set(&[(1, 10), (2, 10)]);

        let diff = diff_sets(&by_materializer, &by_reasoner);
        assert!(diff.only_in_materializer.is_empty());
        assert_eq!(
            diff.only_in_reasoner,
            BTreeSet::from([ConceptAssertion::new(term(2), term(10))])
        );
    }

    #[test]
    fn two_sided_diff_reports_both_partitions() {
        let by_materializer = concept_set(&[(1, 10), (3, 10)]);
        let by_reasoner = concept_set(&[(1, 10), (2, 10)]);

        let diff = diff_sets(&by_materializer, &by_reasoner);
        assert_eq!(diff.only_in_materializer.len(), 1);
        assert_eq!(diff.only_in_reasoner.len(), 1);
        assert!(!diff.is_empty());
    }

    #[test]
    fn grouping_equality_is_representative_sensitive() {
        // {a: {b}} vs {b: {a}}: same equivalence class, different key.
        let mut left = BTreeMap::new();
        left.insert(term(1), BTreeSet::from([term(2)]));
        let mut right = BTreeMap::new();
        right.insert(term(2), BTreeSet::from([term(1)]));

        assert!(!groupings_equal(&left, &right));
    }

    #[test]
    fn canonical_partition_ignores_representative_choice() {
        let mut left = BTreeMap::new();
        left.insert(term(1), BTreeSet::from([term(2)]));
        let mut right = BTreeMap::new();
        right.insert(term(2), BTreeSet::from([term(1)]));

        assert_eq!(canonical_partition(&left), canonical_partition(&right));
    }

    #[test]
    fn canonical_partition_separates_distinct_classes() {
        let mut grouping = BTreeMap::new();
        grouping.insert(term(1), BTreeSet::from([term(2)]));
        grouping.insert(term(3), BTreeSet::from([term(4)]));

        let partition = canonical_partition(&grouping);
        assert_eq!(partition.len(), 2);
        assert!(partition.contains(&BTreeSet::from([term(1), term(2)])));
        assert!(partition.contains(&BTreeSet::from([term(3), term(4)])));
    }
}

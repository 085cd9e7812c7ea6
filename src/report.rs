//! Diagnostic printer: deterministic rendering into the log sink.
//!
//! Stateless helpers that render diff partitions and sameAs groupings through
//! `tracing`, one element per line, sorted. Nothing here decides *whether*
//! to print; that gating lives with the oracle and its configuration.

use std::collections::BTreeSet;

use crate::assertion::{ConceptAssertion, RoleAssertion, SameAsGrouping};
use crate::compare::SetDiff;
use crate::term::{TermId, TermInterner};

fn render_concept(interner: &TermInterner, assertion: &ConceptAssertion) -> String {
    format!(
        "{}({})",
        interner.resolve(assertion.concept),
        interner.resolve(assertion.individual)
    )
}

fn render_role(interner: &TermInterner, assertion: &RoleAssertion) -> String {
    format!(
        "{}({}, {})",
        interner.resolve(assertion.role),
        interner.resolve(assertion.subject),
        interner.resolve(assertion.object)
    )
}

fn render_class(interner: &TermInterner, class: &BTreeSet<TermId>) -> String {
    let members: Vec<String> = class.iter().map(|id| interner.resolve(*id)).collect();
    format!("{{{}}}", members.join(", "))
}

/// Print both partitions of a concept-assertion diff, labeled by source.
pub fn print_concept_diff(interner: &TermInterner, diff: &SetDiff<ConceptAssertion>) {
    tracing::info!("======== concept assertions by materializer but not by DL reasoner ========");
    for assertion in &diff.only_in_materializer {
        tracing::info!("  {}", render_concept(interner, assertion));
    }
    tracing::info!("======== concept assertions by DL reasoner but not by materializer ========");
    for assertion in &diff.only_in_reasoner {
        tracing::info!("  {}", render_concept(interner, assertion));
    }
}

/// Print both partitions of a role-assertion diff, labeled by source.
pub fn print_role_diff(interner: &TermInterner, diff: &SetDiff<RoleAssertion>) {
    tracing::info!("======== role assertions by materializer but not by DL reasoner ========");
    for assertion in &diff.only_in_materializer {
        tracing::info!("  {}", render_role(interner, assertion));
    }
    tracing::info!("======== role assertions by DL reasoner but not by materializer ========");
    for assertion in &diff.only_in_reasoner {
        tracing::info!("  {}", render_role(interner, assertion));
    }
}

/// Print a full sameAs grouping, one representative per line.
pub fn print_grouping(interner: &TermInterner, label: &str, grouping: &SameAsGrouping) {
    tracing::info!("sameAs grouping by {label}:");
    for (representative, class) in grouping {
        tracing::info!(
            "  {} -> {}",
            interner.resolve(*representative),
            render_class(interner, class)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn interner_with(iris: &[&str]) -> (TermInterner, Vec<TermId>) {
        let interner = TermInterner::new();
        let ids = iris.iter().map(|s| interner.intern(s).unwrap()).collect();
        (interner, ids)
    }

    #[test]
    fn concept_rendering_uses_dl_notation() {
        let (interner, ids) = interner_with(&["ex:Alice", "ex:Person"]);
        let assertion = ConceptAssertion::new(ids[0], ids[1]);
        assert_eq!(render_concept(&interner, &assertion), "ex:Person(ex:Alice)");
    }

    #[test]
    fn role_rendering_uses_dl_notation() {
        let (interner, ids) = interner_with(&["ex:Alice", "ex:knows", "ex:Bob"]);
        let assertion = RoleAssertion::new(ids[0], ids[1], ids[2]);
        assert_eq!(
            render_role(&interner, &assertion),
            "ex:knows(ex:Alice, ex:Bob)"
        );
    }

    #[test]
    fn class_rendering_is_sorted_by_id() {
        let (interner, ids) = interner_with(&["ex:a", "ex:b"]);
        let class = BTreeSet::from([ids[1], ids[0]]);
        assert_eq!(render_class(&interner, &class), "{ex:a, ex:b}");
    }

    #[test]
    fn printing_does_not_panic_on_unknown_terms() {
        let interner = TermInterner::new();
        let ghost = TermId::new(7).unwrap();
        let mut grouping = BTreeMap::new();
        grouping.insert(ghost, BTreeSet::from([ghost]));
        print_grouping(&interner, "materializer", &grouping);
    }
}

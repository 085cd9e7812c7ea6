//! Collaborator contracts for the two entailment-computation paths.
//!
//! The oracle does not perform inference itself. It consumes two engines
//! behind traits: a [`Materializer`] (the fast rule-based path, whose decoded
//! result model is a [`KnowledgeBaseView`]) and a [`DlReasoner`] (the
//! reference description-logic path). Real engines live outside this crate;
//! [`FixedMaterializer`] and [`FixedReasoner`] are canned in-memory engines
//! used by test harnesses and by callers replaying recorded results.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use crate::assertion::{ConceptAssertion, RoleAssertion, SameAsGrouping};
use crate::error::{MaterializeError, ReasonerError};

/// The materializer's decoded result model.
///
/// The decoding layer (out of scope here) has already translated the
/// engine-internal abstracted encoding back into externally-visible
/// individuals, with sameAs merging resolved under the decoder's
/// representative convention. The expected counts come from the knowledge
/// base's own bookkeeping and power the self-consistency check, independent
/// of the reference reasoner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBaseView {
    /// Decoded concept assertions.
    pub concept_assertions: HashSet<ConceptAssertion>,
    /// Decoded role assertions.
    pub role_assertions: HashSet<RoleAssertion>,
    /// Decoded sameAs grouping.
    pub sameas: SameAsGrouping,
    /// Expected concept-assertion count per the KB's bookkeeping.
    pub expected_concept_count: usize,
    /// Expected role-assertion count per the KB's bookkeeping.
    pub expected_role_count: usize,
}

/// The fast rule-based materialization path.
pub trait Materializer {
    /// Run forward materialization over the knowledge base.
    ///
    /// Side-effecting: the result is exposed afterwards via
    /// [`Materializer::result_view`].
    fn materialize(&mut self) -> Result<(), MaterializeError>;

    /// The decoded result model of the last materialization.
    fn result_view(&self) -> KnowledgeBaseView;
}

/// The reference description-logic reasoning path.
pub trait DlReasoner {
    /// Compute all entailments of the knowledge base.
    fn compute_entailments(&mut self) -> Result<(), ReasonerError>;

    /// Entailed concept assertions, under the reasoner's own representative
    /// convention for merged individuals.
    fn entailed_concept_assertions(&self) -> HashSet<ConceptAssertion>;

    /// Entailed role assertions.
    fn entailed_role_assertions(&self) -> HashSet<RoleAssertion>;

    /// Entailed sameAs grouping.
    fn entailed_sameas_assertions(&self) -> SameAsGrouping;
}

// ---------------------------------------------------------------------------
// Canned engines
// ---------------------------------------------------------------------------

/// Shared invocation counter for canned engines.
///
/// Harnesses keep a clone before handing the engine to the oracle, so the
/// at-most-once computation contract stays observable from outside.
#[derive(Debug, Clone, Default)]
pub struct InvocationCounter(Arc<AtomicUsize>);

impl InvocationCounter {
    fn bump(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of recorded invocations.
    pub fn get(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }
}

/// A materializer that replays a fixed [`KnowledgeBaseView`].
///
/// Counts invocations so harnesses can assert the oracle's at-most-once
/// computation contract. An injected error makes `materialize` fail instead.
#[derive(Debug, Default)]
pub struct FixedMaterializer {
    view: KnowledgeBaseView,
    failure: Option<String>,
    invocations: InvocationCounter,
}

impl FixedMaterializer {
    /// Create a canned materializer replaying the given view.
    pub fn new(view: KnowledgeBaseView) -> Self {
        Self {
            view,
            failure: None,
            invocations: InvocationCounter::default(),
        }
    }

    /// Make `materialize` fail with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            view: KnowledgeBaseView::default(),
            failure: Some(message.into()),
            invocations: InvocationCounter::default(),
        }
    }

    /// Handle to this engine's invocation counter.
    pub fn counter(&self) -> InvocationCounter {
        self.invocations.clone()
    }
}

impl Materializer for FixedMaterializer {
    fn materialize(&mut self) -> Result<(), MaterializeError> {
        self.invocations.bump();
        match &self.failure {
            Some(message) => Err(MaterializeError::EngineFailure {
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn result_view(&self) -> KnowledgeBaseView {
        self.view.clone()
    }
}

/// A DL reasoner that replays fixed entailment sets.
#[derive(Debug, Default)]
pub struct FixedReasoner {
    concept_assertions: HashSet<ConceptAssertion>,
    role_assertions: HashSet<RoleAssertion>,
    sameas: SameAsGrouping,
    failure: Option<ReasonerFailure>,
    invocations: InvocationCounter,
}

/// Which failure mode a [`FixedReasoner`] should simulate.
#[derive(Debug, Clone)]
enum ReasonerFailure {
    Engine(String),
    Inconsistent,
}

impl FixedReasoner {
    /// Create a canned reasoner replaying the given entailments.
    pub fn new(
        concept_assertions: HashSet<ConceptAssertion>,
        role_assertions: HashSet<RoleAssertion>,
        sameas: SameAsGrouping,
    ) -> Self {
        Self {
            concept_assertions,
            role_assertions,
            sameas,
            failure: None,
            invocations: InvocationCounter::default(),
        }
    }

    /// Make `compute_entailments` fail with an engine error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(ReasonerFailure::Engine(message.into())),
            ..Self::default()
        }
    }

    /// Make `compute_entailments` report an inconsistent knowledge base.
    pub fn inconsistent() -> Self {
        Self {
            failure: Some(ReasonerFailure::Inconsistent),
            ..Self::default()
        }
    }

    /// Handle to this engine's invocation counter.
    pub fn counter(&self) -> InvocationCounter {
        self.invocations.clone()
    }
}

impl DlReasoner for FixedReasoner {
    fn compute_entailments(&mut self) -> Result<(), ReasonerError> {
        self.invocations.bump();
        match &self.failure {
            Some(ReasonerFailure::Engine(message)) => Err(ReasonerError::EngineFailure {
                message: message.clone(),
            }),
            Some(ReasonerFailure::Inconsistent) => Err(ReasonerError::Inconsistent),
            None => Ok(()),
        }
    }

    fn entailed_concept_assertions(&self) -> HashSet<ConceptAssertion> {
        self.concept_assertions.clone()
    }

    fn entailed_role_assertions(&self) -> HashSet<RoleAssertion> {
        self.role_assertions.clone()
    }

    fn entailed_sameas_assertions(&self) -> SameAsGrouping {
        self.sameas.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::TermId;

    fn term(id: u64) -> TermId {
        TermId::new(id).unwrap()
    }

    #[test]
    fn fixed_materializer_replays_view() {
        let mut view = KnowledgeBaseView::default();
        view.concept_assertions
            .insert(ConceptAssertion::new(term(1), term(2)));
        view.expected_concept_count = 1;

        let mut engine = FixedMaterializer::new(view);
        let counter = engine.counter();
        engine.materialize().unwrap();
        assert_eq!(counter.get(), 1);
        assert_eq!(engine.result_view().concept_assertions.len(), 1);
        assert_eq!(engine.result_view().expected_concept_count, 1);
    }

    #[test]
    fn failing_materializer_errors() {
        let mut engine = FixedMaterializer::failing("stratification failure");
        let counter = engine.counter();
        let err = engine.materialize().unwrap_err();
        assert!(matches!(err, MaterializeError::EngineFailure { .. }));
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn inconsistent_reasoner_errors() {
        let mut engine = FixedReasoner::inconsistent();
        let err = engine.compute_entailments().unwrap_err();
        assert!(matches!(err, ReasonerError::Inconsistent));
    }
}

//! # maat
//!
//! A differential-testing oracle for logical-inference engines over
//! description-logic knowledge bases. Two independently implemented pipelines
//! compute the entailed assertions of a knowledge base — a fast rule-based
//! materializer and a reference DL reasoner — and the oracle decides whether
//! the fast path is complete (misses nothing) and sound relative to the
//! reference (derives nothing extra), with actionable per-category diffs when
//! it is not.
//!
//! ## Architecture
//!
//! - **Terms** (`term`): interned IRI vocabulary both pipelines are normalized into
//! - **Assertions** (`assertion`): concept/role assertions, sameAs groupings, snapshots
//! - **Pipelines** (`pipeline`): collaborator contracts for the two engines
//! - **Comparison** (`compare`): pure set/mapping equality and structured diffing
//! - **Reporting** (`report`): deterministic diagnostics into the `tracing` sink
//! - **Oracle** (`oracle`): lazy-once session over both engines, cached queries
//!
//! ## Library usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use maat::config::{LogFacet, OracleConfig};
//! use maat::oracle::{CompletenessChecker, HornOracle};
//! use maat::pipeline::{FixedMaterializer, FixedReasoner, KnowledgeBaseView};
//! use maat::term::TermInterner;
//!
//! let interner = Arc::new(TermInterner::new());
//! let config = OracleConfig::new().with_facet(LogFacet::ComparedResults);
//! let oracle = HornOracle::new(
//!     FixedMaterializer::new(KnowledgeBaseView::default()),
//!     FixedReasoner::default(),
//!     config,
//!     interner,
//! );
//! assert!(oracle.is_concept_assertion_complete().unwrap());
//! ```

pub mod assertion;
pub mod compare;
pub mod config;
pub mod error;
pub mod oracle;
pub mod pipeline;
pub mod report;
pub mod term;

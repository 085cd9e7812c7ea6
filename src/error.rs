//! Rich diagnostic error types for the maat oracle.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes, help text, and source chains so operators know exactly
//! which side of the differential pipeline failed and how to proceed.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the maat oracle.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text) through to the caller.
#[derive(Debug, Error, Diagnostic)]
pub enum MaatError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Term(#[from] TermError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Materialize(#[from] MaterializeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Reasoner(#[from] ReasonerError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Oracle(#[from] OracleError),
}

// ---------------------------------------------------------------------------
// Term errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum TermError {
    #[error("term allocator exhausted: cannot allocate more than u64::MAX terms")]
    #[diagnostic(
        code(maat::term::exhausted),
        help(
            "The term ID space is exhausted. This is extremely unlikely in \
             practice (requires 2^64 interned IRIs). If you see this error, \
             check for an interning loop."
        )
    )]
    AllocatorExhausted,
}

// ---------------------------------------------------------------------------
// Materialization-path errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum MaterializeError {
    #[error("materialization engine failed: {message}")]
    #[diagnostic(
        code(maat::materialize::engine_failure),
        help(
            "The rule-based materializer signalled an error during forward \
             computation. The oracle session is left unusable; inspect the \
             engine's own logs and re-create the oracle after fixing the input."
        )
    )]
    EngineFailure { message: String },

    #[error("invalid result model: {message}")]
    #[diagnostic(
        code(maat::materialize::invalid_result_model),
        help(
            "The materializer's result view is internally inconsistent \
             (e.g. an assertion references an individual the decoding layer \
             never emitted). This points at a bug in the decoding layer, not \
             in the knowledge base."
        )
    )]
    InvalidResultModel { message: String },
}

// ---------------------------------------------------------------------------
// Reference-reasoner errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ReasonerError {
    #[error("DL reasoner failed: {message}")]
    #[diagnostic(
        code(maat::reasoner::engine_failure),
        help(
            "The reference description-logic reasoner signalled an error \
             during entailment computation. The oracle session is left \
             unusable; no comparison result is valid for this knowledge base."
        )
    )]
    EngineFailure { message: String },

    #[error("knowledge base is inconsistent")]
    #[diagnostic(
        code(maat::reasoner::inconsistent),
        help(
            "An inconsistent knowledge base entails every assertion, so there \
             is no meaningful entailment set to compare against. Repair the \
             ontology before running the oracle."
        )
    )]
    Inconsistent,
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    #[diagnostic(
        code(maat::config::io),
        help("Check that the config file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {source}")]
    #[diagnostic(
        code(maat::config::parse),
        help(
            "The config file is not valid TOML for OracleConfig. \
             Valid log facets are: \"compared-results\", \"statistics\"."
        )
    )]
    Parse {
        #[source]
        source: toml::de::Error,
    },
}

// ---------------------------------------------------------------------------
// Oracle errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum OracleError {
    #[error("oracle session failed on an earlier query: {message}")]
    #[diagnostic(
        code(maat::oracle::session_failed),
        help(
            "A previous query triggered entailment computation and one of the \
             two engines failed; the session is pinned in the failed state. \
             Create a fresh oracle to retry."
        )
    )]
    SessionFailed { message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Materialize(#[from] MaterializeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Reasoner(#[from] ReasonerError),
}

/// Convenience alias for functions returning maat results.
pub type MaatResult<T> = std::result::Result<T, MaatError>;

/// Convenience alias for oracle query operations.
pub type OracleResult<T> = std::result::Result<T, OracleError>;

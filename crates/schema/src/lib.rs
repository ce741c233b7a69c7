//! Case/stage question schema support for SuperSOAP.
//!
//! This crate provides the **wire model** and **loader** for the externally supplied question
//! schema: a mapping of case-category name to per-stage ordered question lists, plus optional
//! stage rules and operative-report templates.
//!
//! This crate focuses on:
//! - serialisation/deserialisation (YAML and JSON)
//! - structural validation of the loaded document
//!
//! Question semantics (visibility against answers, default resolution, sentence building) live
//! in `soap-core`.

pub mod document;
pub mod question;

pub use document::{CaseSchema, QuestionSchema, StageQuestions, StageRule};
pub use question::{ConditionValue, DateDefault, Question, QuestionKind, ShowIf, ShowRule};

/// Errors returned by the `soap-schema` crate.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid schema: {0}")]
    InvalidInput(String),

    #[error("failed to read schema file {path}: {source}", path = path.display())]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Mismatch(String),
}

/// Type alias for Results that can fail with a [`SchemaError`].
pub type SchemaResult<T> = Result<T, SchemaError>;

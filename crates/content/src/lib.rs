//! SOLID reference content model and wire/boundary support.
//!
//! This crate defines the domain types for the SOLID principles reference document and
//! translates them to and from their serialised forms:
//! - YAML (the on-disk authoring format)
//! - JSON (the hand-off format for page renderers)
//!
//! This crate focuses on:
//! - strict deserialisation with field-path error reporting
//! - enforcing the document invariants at load time
//! - translation between the public domain types and private wire structs
//!
//! Lookup and configuration live in `solid-core`.

pub mod document;
pub mod format;
pub mod principle;
pub mod validation;

pub use document::{Component, Document, Example, Principle};
pub use format::ContentFormat;
pub use principle::{ComponentKind, PrincipleName};

pub use solid_types::{NonEmptyText, TextError, VerbatimText};

/// Errors returned by the `solid-content` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("translation error: {0}")]
    Translation(String),

    #[error("unsupported content format: {0}")]
    UnsupportedFormat(String),
}

/// Type alias for Results that can fail with a [`ContentError`].
pub type ContentResult<T> = Result<T, ContentError>;

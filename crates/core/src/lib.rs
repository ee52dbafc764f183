//! # SOLID Core
//!
//! Loading and read-only access for the SOLID principles reference document.
//!
//! This crate contains:
//! - Startup configuration that decides where content comes from ([`CoreConfig`])
//! - The canonical content asset, embedded at compile time
//! - [`ContentAccessor`], the immutable query surface used by renderers
//!
//! **No format concerns**: parsing, rendering and the document invariants belong in
//! `solid-content`.

pub mod accessor;
pub mod config;
pub mod constants;
pub mod error;

pub use accessor::ContentAccessor;
pub use config::{resolve_content_file, validate_content_file, ContentSource, CoreConfig};
pub use error::{CoreError, CoreResult};

pub use solid_content::{
    Component, ComponentKind, ContentFormat, Document, Example, Principle, PrincipleName,
};

//! Read-only access to the SOLID reference document.
//!
//! [`ContentAccessor`] is built once (from the embedded asset or a configured file) and then
//! handed to any number of readers. It holds the document behind an `Arc` and exposes only
//! shared references, so clones are cheap and no coordination between readers is needed.

use crate::config::{read_content_file, ContentSource, CoreConfig};
use crate::constants::{EMBEDDED_CONTENT, EMBEDDED_CONTENT_FORMAT};
use crate::{CoreError, CoreResult};
use solid_content::{Component, ContentFormat, Document, Principle, PrincipleName};
use std::sync::Arc;

/// Immutable provider over the reference document.
#[derive(Clone, Debug)]
pub struct ContentAccessor {
    document: Arc<Document>,
}

impl ContentAccessor {
    /// Builds an accessor over the canonical content compiled into this crate.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Content`] if the embedded asset is malformed.
    pub fn embedded() -> CoreResult<Self> {
        let document = Document::parse(EMBEDDED_CONTENT, EMBEDDED_CONTENT_FORMAT)?;
        tracing::info!(
            source = "embedded",
            principles = document.principles().len(),
            "loaded SOLID reference content"
        );
        Ok(Self::from_document(document))
    }

    /// Builds an accessor from the configured content source.
    ///
    /// There is no fallback: a missing or malformed file is an error, never a silent switch
    /// to the embedded content. The file is validated again when read, so one that was
    /// replaced or grew past the size limit after configuration is rejected.
    pub fn load(config: &CoreConfig) -> CoreResult<Self> {
        match config.content_source() {
            ContentSource::Embedded => Self::embedded(),
            ContentSource::File { path, format } => {
                let text = read_content_file(path)?;
                let document = Document::parse(&text, *format)?;
                tracing::info!(
                    source = %config.content_source(),
                    principles = document.principles().len(),
                    "loaded SOLID reference content"
                );
                Ok(Self::from_document(document))
            }
        }
    }

    /// Wraps an already-parsed document.
    pub fn from_document(document: Document) -> Self {
        Self {
            document: Arc::new(document),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// All principles in SOLID acronym order. Always five entries.
    pub fn list_principles(&self) -> &[Principle] {
        self.document.principles()
    }

    /// Looks up a principle by abbreviation or full title, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if `name` does not identify one of the five principles.
    pub fn get_principle(&self, name: &str) -> CoreResult<&Principle> {
        PrincipleName::lookup(name)
            .and_then(|principle| self.document.principle(principle))
            .ok_or_else(|| {
                tracing::warn!(name, "unknown principle requested");
                CoreError::NotFound(name.to_string())
            })
    }

    /// Reference URLs for the whole document. Empty if none were authored.
    pub fn get_references(&self) -> &[String] {
        self.document.references()
    }

    /// Finds an illustrative component by exact name across all principles.
    ///
    /// The first match in acronym order wins.
    pub fn find_component(&self, component_name: &str) -> Option<(&Principle, &Component)> {
        self.list_principles().iter().find_map(|principle| {
            principle
                .example()
                .component(component_name)
                .map(|component| (principle, component))
        })
    }

    /// Serialises the document for a renderer.
    pub fn export(&self, format: ContentFormat) -> CoreResult<String> {
        Ok(self.document.render(format)?)
    }
}

//! Constants used throughout the SOLID core crate.
//!
//! This module contains the content asset locations and file limits so that loading and
//! configuration agree on them.

use solid_content::ContentFormat;

/// Directory (relative to the crate root or working directory) holding content assets.
pub const CONTENT_DIR_NAME: &str = "content";

/// Filename of the canonical content asset.
pub const CONTENT_FILENAME: &str = "solid-principles.yaml";

/// Canonical content, compiled into the crate.
pub const EMBEDDED_CONTENT: &str = include_str!("../content/solid-principles.yaml");

/// Format of [`EMBEDDED_CONTENT`].
pub const EMBEDDED_CONTENT_FORMAT: ContentFormat = ContentFormat::Yaml;

/// Largest content file accepted from disk (1 MiB).
pub const MAX_CONTENT_FILE_BYTES: u64 = 1024 * 1024;

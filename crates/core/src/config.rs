//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into [`crate::ContentAccessor::load`]. Nothing here reads process environment
//! variables; callers decide where content comes from.

use crate::constants::{CONTENT_DIR_NAME, CONTENT_FILENAME, MAX_CONTENT_FILE_BYTES};
use crate::{CoreError, CoreResult};
use solid_content::ContentFormat;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where the reference document is loaded from.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ContentSource {
    /// The canonical content compiled into this crate.
    #[default]
    Embedded,
    /// A YAML or JSON file on disk.
    File { path: PathBuf, format: ContentFormat },
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSource::Embedded => f.write_str("embedded"),
            ContentSource::File { path, format } => write!(f, "{} ({format})", path.display()),
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    content_source: ContentSource,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// File sources are checked with [`validate_content_file`] up front so that a bad path
    /// fails at startup rather than on first load.
    pub fn new(content_source: ContentSource) -> CoreResult<Self> {
        if let ContentSource::File { path, .. } = &content_source {
            validate_content_file(path)?;
        }
        Ok(Self { content_source })
    }

    /// Configuration that serves the embedded canonical content.
    pub fn embedded() -> Self {
        Self::default()
    }

    /// Configuration that serves content from `path`, inferring the format from its extension.
    pub fn from_file(path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        let format = ContentFormat::from_path(&path)?;
        Self::new(ContentSource::File { path, format })
    }

    pub fn content_source(&self) -> &ContentSource {
        &self.content_source
    }
}

/// Resolve the content file on disk.
///
/// If `override_path` is provided, it must pass [`validate_content_file`]. Otherwise this
/// searches for `content/solid-principles.yaml` relative to the current working directory and
/// then walks up from `CARGO_MANIFEST_DIR`. Candidates that fail [`validate_content_file`] are
/// skipped.
pub fn resolve_content_file(override_path: Option<PathBuf>) -> CoreResult<PathBuf> {
    if let Some(path) = override_path {
        validate_content_file(&path)?;
        return Ok(path);
    }

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let roots = std::iter::once(Path::new("")).chain(manifest_dir.ancestors());
    search_content_file(roots).ok_or_else(|| {
        CoreError::InvalidInput(format!(
            "could not locate {}/{} content file",
            CONTENT_DIR_NAME, CONTENT_FILENAME
        ))
    })
}

/// First `<root>/content/solid-principles.yaml` that exists and passes validation.
fn search_content_file<'a>(roots: impl IntoIterator<Item = &'a Path>) -> Option<PathBuf> {
    let relative = Path::new(CONTENT_DIR_NAME).join(CONTENT_FILENAME);
    for root in roots {
        let candidate = root.join(&relative);
        if std::fs::symlink_metadata(&candidate).is_err() {
            continue;
        }
        match validate_content_file(&candidate) {
            Ok(()) => return Some(candidate),
            Err(err) => {
                tracing::warn!(
                    path = %candidate.display(),
                    error = %err,
                    "skipping content file candidate"
                );
            }
        }
    }
    None
}

/// Read a content file, re-checking it against [`validate_content_file`].
///
/// The file may have changed since the configuration was built, so the size limit is also
/// enforced on the bytes actually read.
pub(crate) fn read_content_file(path: &Path) -> CoreResult<String> {
    validate_content_file(path)?;

    let file = std::fs::File::open(path).map_err(CoreError::FileRead)?;
    let mut text = String::new();
    file.take(MAX_CONTENT_FILE_BYTES + 1)
        .read_to_string(&mut text)
        .map_err(CoreError::FileRead)?;

    if text.len() as u64 > MAX_CONTENT_FILE_BYTES {
        return Err(oversized(path));
    }
    Ok(text)
}

fn oversized(path: &Path) -> CoreError {
    CoreError::InvalidInput(format!(
        "content file exceeds maximum size of {} bytes: {}",
        MAX_CONTENT_FILE_BYTES,
        path.display()
    ))
}

/// Validate that a content file is safe to load.
///
/// The file must be a regular file (not a symlink, directory or special file), have a
/// supported extension, and be no larger than [`MAX_CONTENT_FILE_BYTES`].
pub fn validate_content_file(path: &Path) -> CoreResult<()> {
    let metadata = std::fs::symlink_metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CoreError::InvalidInput(format!("content file not found: {}", path.display()))
        } else {
            CoreError::FileRead(e)
        }
    })?;
    let file_type = metadata.file_type();

    if file_type.is_symlink() {
        return Err(CoreError::InvalidInput(format!(
            "content file must not be a symlink: {}",
            path.display()
        )));
    }

    if !file_type.is_file() {
        return Err(CoreError::InvalidInput(format!(
            "content path is not a regular file: {}",
            path.display()
        )));
    }

    ContentFormat::from_path(path)?;

    if metadata.len() > MAX_CONTENT_FILE_BYTES {
        return Err(oversized(path));
    }

    Ok(())
}

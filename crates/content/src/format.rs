//! Serialised content formats.

use crate::{ContentError, ContentResult};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Serialisation format of a content file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentFormat {
    #[default]
    Yaml,
    Json,
}

impl ContentFormat {
    /// File extensions accepted for each format, lowercase.
    pub const YAML_EXTENSIONS: &'static [&'static str] = &["yaml", "yml"];
    pub const JSON_EXTENSIONS: &'static [&'static str] = &["json"];

    /// Infers the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::UnsupportedFormat`] when the path has no extension or the
    /// extension is not one of `yaml`, `yml` or `json` (case-insensitive).
    pub fn from_path(path: &Path) -> ContentResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ContentError::UnsupportedFormat(format!(
                    "{} has no file extension",
                    path.display()
                ))
            })?;
        ext.parse()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentFormat::Yaml => "yaml",
            ContentFormat::Json => "json",
        }
    }
}

impl FromStr for ContentFormat {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if Self::YAML_EXTENSIONS.contains(&lower.as_str()) {
            Ok(ContentFormat::Yaml)
        } else if Self::JSON_EXTENSIONS.contains(&lower.as_str()) {
            Ok(ContentFormat::Json)
        } else {
            Err(ContentError::UnsupportedFormat(s.to_string()))
        }
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_format_from_extension() {
        assert_eq!(
            ContentFormat::from_path(Path::new("content/solid.yaml")).expect("yaml"),
            ContentFormat::Yaml
        );
        assert_eq!(
            ContentFormat::from_path(Path::new("solid.YML")).expect("yml"),
            ContentFormat::Yaml
        );
        assert_eq!(
            ContentFormat::from_path(Path::new("/tmp/solid.json")).expect("json"),
            ContentFormat::Json
        );
    }

    #[test]
    fn rejects_unknown_or_missing_extension() {
        let err = ContentFormat::from_path(Path::new("solid.toml")).expect_err("toml rejected");
        assert!(matches!(err, ContentError::UnsupportedFormat(ext) if ext == "toml"));

        let err = ContentFormat::from_path(Path::new("solid")).expect_err("no extension");
        assert!(matches!(
            err,
            ContentError::UnsupportedFormat(msg) if msg.contains("no file extension")
        ));
    }
}

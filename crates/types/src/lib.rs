//! Validated text primitives shared across the SOLID reference crates.
//!
//! Prose fields in the content model are [`NonEmptyText`] (trimmed on construction), while
//! illustrative code is [`VerbatimText`], which keeps every byte it was given.

use std::fmt;

/// Errors that can occur when creating validated text types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err(TextError::Empty)` if the input is empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Opaque text that is stored exactly as given.
///
/// Used for illustrative source code: indentation and trailing newlines are part of the
/// content, so nothing is trimmed. The only check is that the text is not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerbatimText(String);

impl VerbatimText {
    /// Wraps `input` unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Err(TextError::Empty)` if the input has no non-whitespace character.
    pub fn new(input: impl Into<String>) -> Result<Self, TextError> {
        let input = input.into();
        if input.trim().is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VerbatimText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VerbatimText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for VerbatimText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for VerbatimText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        VerbatimText::new(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_input() {
        let text = NonEmptyText::new("  Open/Closed  ").expect("valid text");
        assert_eq!(text.as_str(), "Open/Closed");
    }

    #[test]
    fn non_empty_text_rejects_blank_input() {
        assert_eq!(NonEmptyText::new(""), Err(TextError::Empty));
        assert_eq!(NonEmptyText::new(" \n\t "), Err(TextError::Empty));
    }

    #[test]
    fn verbatim_text_keeps_whitespace() {
        let snippet = "  class A {}\n\n";
        let text = VerbatimText::new(snippet).expect("valid snippet");
        assert_eq!(text.as_str(), snippet);
    }

    #[test]
    fn verbatim_text_rejects_blank_input() {
        assert_eq!(VerbatimText::new("   \n"), Err(TextError::Empty));
    }

    #[test]
    fn deserialize_rejects_blank_strings() {
        let err = serde_json::from_str::<NonEmptyText>("\"   \"").expect_err("blank rejected");
        assert!(err.to_string().contains("cannot be empty"));

        let err = serde_json::from_str::<VerbatimText>("\"\"").expect_err("blank rejected");
        assert!(err.to_string().contains("cannot be empty"));
    }
}

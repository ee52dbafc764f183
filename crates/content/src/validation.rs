//! Input validation utilities.
//!
//! Checks that are applied to content as it crosses the wire boundary, before it is exposed
//! through the domain types.

use crate::principle::PrincipleName;
use crate::{ContentError, ContentResult};

/// Validates a reference URL.
///
/// References are rendered as links, so they must be absolute web URLs:
/// - `http://` or `https://` scheme (case-insensitive)
/// - a non-empty host
/// - ASCII only, no whitespace, bounded length
///
/// # Errors
///
/// Returns `ContentError::InvalidInput` if the URL is not acceptable.
pub fn validate_reference_url(url: &str) -> ContentResult<()> {
    const MAX_URL_LEN: usize = 2048;

    if url.trim().is_empty() {
        return Err(ContentError::InvalidInput(
            "reference URL cannot be empty".into(),
        ));
    }

    if url.len() > MAX_URL_LEN {
        return Err(ContentError::InvalidInput(format!(
            "reference URL exceeds maximum length of {} characters",
            MAX_URL_LEN
        )));
    }

    if !url.is_ascii() {
        return Err(ContentError::InvalidInput(format!(
            "reference URL must contain only ASCII characters: {url}"
        )));
    }

    if url.bytes().any(|b| b.is_ascii_whitespace() || b.is_ascii_control()) {
        return Err(ContentError::InvalidInput(format!(
            "reference URL contains whitespace or control characters: {url}"
        )));
    }

    let lower = url.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .ok_or_else(|| {
            ContentError::InvalidInput(format!(
                "reference URL must start with http:// or https://: {url}"
            ))
        })?;

    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() {
        return Err(ContentError::InvalidInput(format!(
            "reference URL has no host: {url}"
        )));
    }

    Ok(())
}

/// Validates that principles appear exactly once each, in SOLID acronym order.
///
/// # Errors
///
/// Returns `ContentError::InvalidInput` naming the first offending position.
pub fn validate_principle_order(names: &[PrincipleName]) -> ContentResult<()> {
    let expected = PrincipleName::CANONICAL_ORDER;

    if names.len() != expected.len() {
        return Err(ContentError::InvalidInput(format!(
            "document must contain exactly {} principles, found {}",
            expected.len(),
            names.len()
        )));
    }

    for (idx, (found, wanted)) in names.iter().zip(expected.iter()).enumerate() {
        if found != wanted {
            return Err(ContentError::InvalidInput(format!(
                "principles[{idx}] must be {wanted}, found {found}"
            )));
        }
    }

    Ok(())
}

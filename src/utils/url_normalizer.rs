//! Long URL normalization and validation.

use url::Url;

/// Scheme prepended to inputs that carry none.
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Errors that can occur while validating a long URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("URL contains control characters")]
    ControlCharacters,
}

/// Prepends `https://` unless the input already contains `://`.
///
/// The input is otherwise left untouched.
pub fn ensure_scheme(input: &str) -> String {
    if input.contains("://") {
        input.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{input}")
    }
}

/// Normalizes a raw long URL and checks that it is an absolute URL with a host.
///
/// Returns the normalized string exactly as it will be stored. The parsed form
/// is only used for validation; re-serializing it would, for instance, append
/// a trailing slash to a bare host.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] if the URL does not parse.
/// Returns [`UrlNormalizationError::MissingHost`] if it parses without a host.
/// Returns [`UrlNormalizationError::ControlCharacters`] for input the parser would
/// silently clean up (tabs, newlines) but that could not be sent back in a
/// `Location` header.
///
/// # Examples
///
/// ```
/// use linkhop::utils::url_normalizer::normalize_url;
///
/// assert_eq!(normalize_url("example.com").unwrap(), "https://example.com");
/// assert_eq!(normalize_url("http://x.io/a?b=c").unwrap(), "http://x.io/a?b=c");
/// assert!(normalize_url("not a url").is_err());
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    if input.chars().any(char::is_control) {
        return Err(UrlNormalizationError::ControlCharacters);
    }

    let normalized = ensure_scheme(input);

    let parsed =
        Url::parse(&normalized).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(normalized),
        _ => Err(UrlNormalizationError::MissingHost),
    }
}

//! Short code generation.
//!
//! Codes are six characters drawn independently and uniformly from the 62
//! ASCII alphanumerics. Generation says nothing about uniqueness; the
//! registrar checks candidates against the store.

use rand::Rng;

use crate::error::AppError;

/// Symbols a generated code is drawn from.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of every generated code.
pub const CODE_LENGTH: usize = 6;

/// Longest short code a caller may request.
pub const MAX_REQUESTED_CODE_LENGTH: usize = 64;

/// Codes that collide with fixed routes and can never be registered.
pub const RESERVED_CODES: &[&str] = &["create", "health", "stats"];

/// Source of candidate short codes.
///
/// Implementations must be cheap and free of side effects; the registrar may
/// call `generate` several times per registration.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Default generator backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code()
    }
}

/// Generates a random short code.
///
/// # Examples
///
/// ```
/// let code = linkhop::utils::code_generator::generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `code` is owned by a fixed route.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Checks that a requested code is reachable as a single path segment.
///
/// # Rules
///
/// - 1 to 64 characters
/// - Only ASCII letters, digits, `-` and `_`
///
/// Reserved codes pass this check; the registrar rejects them separately.
///
/// # Errors
///
/// Returns [`AppError::Validation`] describing the first broken rule.
pub fn validate_requested_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() {
        return Err(AppError::Validation(
            "short_url must not be empty".to_string(),
        ));
    }

    if code.len() > MAX_REQUESTED_CODE_LENGTH {
        return Err(AppError::Validation(format!(
            "short_url must be at most {} characters",
            MAX_REQUESTED_CODE_LENGTH
        )));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::Validation(
            "short_url may only contain letters, digits, '-' and '_'".to_string(),
        ));
    }

    Ok(())
}

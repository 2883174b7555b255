//! Short code generation and validation utilities.
//!
//! Generated codes are drawn from a 62-character alphanumeric alphabet using
//! the operating system's CSPRNG. Custom codes may additionally use `-` and
//! `_`.

use crate::error::ShortenError;
use regex::Regex;
use std::sync::LazyLock;

/// Alphabet for generated codes: digits, uppercase, lowercase, in that order.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Largest multiple of the alphabet size that fits in a byte. Bytes at or
/// above it are rejected so every symbol stays equally likely.
const REJECTION_BOUND: u8 = (256 / ALPHABET.len() * ALPHABET.len()) as u8;

/// Admissible syntax for any code, generated or custom.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-_0-9A-Za-z]+$").expect("static code regex"));

/// Generates a random short code of `length` symbols from [`ALPHABET`].
///
/// Each symbol is an independent, uniform draw. Random bytes come from
/// `getrandom`; there is no fallback to a weaker source.
///
/// # Errors
///
/// Returns [`ShortenError::RandomSource`] if the system entropy source fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6)?;
/// assert_eq!(code.len(), 6);
/// assert!(is_valid_code(&code));
/// ```
pub fn generate_code(length: usize) -> Result<String, ShortenError> {
    let mut code = String::with_capacity(length);
    let mut buffer = [0u8; 64];

    while code.len() < length {
        getrandom::fill(&mut buffer)?;

        for &byte in buffer.iter().filter(|&&b| b < REJECTION_BOUND) {
            if code.len() == length {
                break;
            }
            code.push(ALPHABET[usize::from(byte) % ALPHABET.len()] as char);
        }
    }

    Ok(code)
}

/// Returns true iff `code` is non-empty and uses only `[A-Za-z0-9_-]`.
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

/// Validates a caller-supplied custom code.
///
/// # Errors
///
/// Returns [`ShortenError::InvalidCode`] if the code fails [`is_valid_code`].
pub fn validate_custom_code(code: &str) -> Result<(), ShortenError> {
    if !is_valid_code(code) {
        return Err(ShortenError::InvalidCode);
    }

    Ok(())
}

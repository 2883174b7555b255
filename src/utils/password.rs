//! Salted password hashing.
//!
//! `hash = SHA3-512(salt || utf8(password))` with a fresh 16-byte salt per
//! credential. Only the salt and hash are ever persisted.

use crate::error::ShortenError;
use sha3::{Digest, Sha3_512};
use subtle::ConstantTimeEq;

/// Salt length in bytes.
pub const SALT_SIZE: usize = 16;

/// A salt together with the hash it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash {
    pub salt: Vec<u8>,
    pub hash: Vec<u8>,
}

fn digest(salt: &[u8], password: &str) -> Vec<u8> {
    let mut hasher = Sha3_512::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}

/// Hashes `password` under a freshly generated salt.
///
/// # Errors
///
/// Returns [`ShortenError::RandomSource`] if the salt cannot be generated.
pub fn hash_password(password: &str) -> Result<PasswordHash, ShortenError> {
    let mut salt = vec![0u8; SALT_SIZE];
    getrandom::fill(&mut salt)?;

    let hash = digest(&salt, password);
    Ok(PasswordHash { salt, hash })
}

/// Checks `password` against a stored salt and hash.
///
/// The comparison runs in constant time with respect to the hash contents.
pub fn verify_password(password: &str, salt: &[u8], hash: &[u8]) -> bool {
    digest(salt, password).ct_eq(hash).into()
}

//! Credential entity for administrative accounts.

use crate::utils::password::PasswordHash;

/// A username with its salted password hash.
///
/// `salt` and `password_hash` are always written together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub salt: Vec<u8>,
    pub password_hash: Vec<u8>,
}

impl Credential {
    pub fn new(username: impl Into<String>, hashed: PasswordHash) -> Self {
        Self {
            username: username.into(),
            salt: hashed.salt,
            password_hash: hashed.hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_from_hash() {
        let hashed = PasswordHash {
            salt: vec![1; 16],
            hash: vec![2; 64],
        };
        let credential = Credential::new("alice", hashed);

        assert_eq!(credential.username, "alice");
        assert_eq!(credential.salt, vec![1; 16]);
        assert_eq!(credential.password_hash, vec![2; 64]);
    }
}

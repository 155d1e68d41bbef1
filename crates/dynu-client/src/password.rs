//! Password digest
//!
//! The update API accepts SHA-256(password) in place of the password, so the
//! clear-text value never leaves the process.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of a password
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

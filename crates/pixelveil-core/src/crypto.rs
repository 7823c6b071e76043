//! Password-derived keystream masking.
//!
//! The mask is a repeating-key XOR stream keyed by the SHA-256 digest of the
//! password. It is reversible by construction and explicitly not intended as
//! strong encryption.

use sha2::{Digest, Sha256};

pub const KEY_LEN: usize = 32;

pub type Key = [u8; KEY_LEN];

/// Derives the masking key from a password.
///
/// Deterministic: identical password, identical key.
pub fn derive_key(password: &str) -> Key {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

/// XORs every byte against `key[i % KEY_LEN]`.
///
/// Self-inverse: `mask(mask(data, key), key) == data`.
pub fn mask(data: &[u8], key: &Key) -> Vec<u8> {
    data.iter()
        .enumerate()
        .map(|(i, byte)| byte ^ key[i % KEY_LEN])
        .collect()
}

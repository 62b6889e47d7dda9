//! Digest primitives for the derivation pipeline.
//! SHA-256 and RIPEMD-160 come from the RustCrypto crates; the Bitcoin
//! compositions (double SHA-256 and HASH160) are defined here.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Compute SHA-256 hash
#[must_use]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Double SHA-256 (used for Base58Check checksums)
#[must_use]
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Compute RIPEMD-160 hash
#[must_use]
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// HASH160 = RIPEMD160(SHA256(data)), the public-key hash behind P2PKH
#[must_use]
#[inline]
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

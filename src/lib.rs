//! Bitcoin mainnet identity derivation from a raw private key.
//!
//! Takes a 32-byte secp256k1 private key and produces a compressed public
//! key, a Wallet Import Format (WIF) string and a P2PKH address. The curve
//! arithmetic and Base58 encoding are implemented in this crate; only the
//! digest primitives come from the RustCrypto crates.

pub mod base58;
pub mod curves;
pub mod error;
pub mod hashes;
pub mod hex;
pub mod identity;
pub mod keys;
pub mod secp256k1;

pub use error::{Error, Result};
pub use identity::{derive, Identity};
pub use keys::{PrivateKey, PublicKey};
pub use secp256k1::SECP256K1;

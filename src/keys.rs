//! Private and public keys for the mainnet derivation pipeline.

use crate::base58;
use crate::curves::Point;
use crate::error::{Error, Result};
use crate::hashes::hash160;
use crate::secp256k1::SECP256K1;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::Zero;
use std::fmt;

/// Version byte prepended to a WIF payload (mainnet).
pub const WIF_VERSION: u8 = 0x80;
/// Trailing WIF byte marking a compressed public key.
pub const WIF_COMPRESSED_FLAG: u8 = 0x01;
/// Version byte prepended to a P2PKH address payload (mainnet).
pub const ADDRESS_VERSION: u8 = 0x00;

/// A validated secp256k1 private key: 32 big-endian bytes encoding a scalar
/// in [1, n-1].
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    bytes: [u8; 32],
}

impl PrivateKey {
    /// Accept a raw 32-byte scalar, rejecting zero and anything not below
    /// the group order.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self> {
        let scalar = BigInt::from_bytes_be(Sign::Plus, &bytes);
        if scalar.is_zero() {
            return Err(Error::InvalidKey("scalar is zero".into()));
        }
        if scalar >= SECP256K1.n {
            return Err(Error::InvalidKey(
                "scalar is not below the curve group order".into(),
            ));
        }
        Ok(PrivateKey { bytes })
    }

    /// Parse from a 64-character hex string.
    pub fn from_hex(text: &str) -> Result<Self> {
        Self::from_bytes(crate::hex::decode_key(text)?)
    }

    #[must_use]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.bytes
    }

    pub(crate) fn scalar(&self) -> BigInt {
        BigInt::from_bytes_be(Sign::Plus, &self.bytes)
    }

    /// Export as mainnet WIF for a compressed public key:
    /// Base58Check(0x80 ++ key ++ 0x01).
    #[must_use]
    pub fn to_wif(&self) -> String {
        let mut payload = Vec::with_capacity(34);
        payload.push(WIF_VERSION);
        payload.extend_from_slice(&self.bytes);
        payload.push(WIF_COMPRESSED_FLAG);
        base58::check_encode(&payload)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey([REDACTED])")
    }
}

/// A public key: the affine point sk * G on secp256k1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    x: BigInt,
    y: BigInt,
}

impl PublicKey {
    /// Derive by scalar-multiplying the base point. A validated key can
    /// never land on the identity, so that case surfaces as an internal
    /// error rather than a panic.
    pub fn from_private_key(sk: &PrivateKey) -> Result<Self> {
        let params = &*SECP256K1;
        match params.curve.scalar_mul(&sk.scalar(), &params.g) {
            Point::Affine { x, y } => Ok(PublicKey { x, y }),
            Point::Infinity => Err(Error::InternalComputation(
                "derived public key is the point at infinity".into(),
            )),
        }
    }

    /// SEC compressed encoding: a parity prefix (0x02 for even y, 0x03 for
    /// odd) followed by the 32-byte big-endian x coordinate.
    #[must_use]
    pub fn compress(&self) -> [u8; 33] {
        let mut out = [0u8; 33];
        out[0] = if self.y.is_even() { 0x02 } else { 0x03 };
        out[1..].copy_from_slice(&to_32_bytes(&self.x));
        out
    }

    /// Mainnet P2PKH address: Base58Check(0x00 ++ HASH160(compressed key)).
    #[must_use]
    pub fn address(&self) -> String {
        let pkb_hash = hash160(&self.compress());
        let mut payload = Vec::with_capacity(21);
        payload.push(ADDRESS_VERSION);
        payload.extend_from_slice(&pkb_hash);
        base58::check_encode(&payload)
    }

    /// Get x coordinate
    #[must_use]
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// Get y coordinate
    #[must_use]
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

/// Left-pad a field element to 32 big-endian bytes. Coordinates are reduced
/// mod p < 2^256, so they always fit.
fn to_32_bytes(n: &BigInt) -> [u8; 32] {
    let (_, bytes) = n.to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    out
}

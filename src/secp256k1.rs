//! secp256k1 curve parameters.
//!
//! Bitcoin's curve: y^2 = x^3 + 7 over the prime field with
//! p = 2^256 - 2^32 - 977. See http://www.oid-info.com/get/1.3.132.0.10

use crate::curves::{Curve, Point};
use num_bigint::BigInt;
use std::sync::LazyLock;

/// The secp256k1 group: the curve, its base point G and the order of G.
#[derive(Debug, Clone)]
pub struct Secp256k1 {
    pub curve: Curve,
    pub g: Point,
    pub n: BigInt,
}

fn hex_int(digits: &[u8]) -> BigInt {
    BigInt::parse_bytes(digits, 16).expect("valid curve constant")
}

/// Global secp256k1 parameters, built once on first use.
pub static SECP256K1: LazyLock<Secp256k1> = LazyLock::new(|| {
    let p = hex_int(b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");
    let curve = Curve::new(p, BigInt::from(0), BigInt::from(7));

    let gx = hex_int(b"79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");
    let gy = hex_int(b"483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8");
    let n = hex_int(b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

    Secp256k1 {
        curve,
        g: Point::affine(gx, gy),
        n,
    }
});

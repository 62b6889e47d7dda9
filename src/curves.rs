//! Elliptic-curve point arithmetic over a prime field.
//!
//! Implements the affine group law for short Weierstrass curves
//! y^2 = x^3 + a*x + b (mod p), with an explicit point at infinity, and
//! double-and-add scalar multiplication. This is the narrow arithmetic
//! interface the key-derivation layer sits on, testable on its own.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

/// A short Weierstrass curve over the integers modulo a prime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    pub p: BigInt,
    pub a: BigInt,
    pub b: BigInt,
}

/// A point on a curve: either the group identity or an affine pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Point {
    Infinity,
    Affine { x: BigInt, y: BigInt },
}

impl Point {
    #[must_use]
    pub fn affine(x: BigInt, y: BigInt) -> Self {
        Point::Affine { x, y }
    }

    #[must_use]
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }
}

impl Curve {
    #[must_use]
    pub const fn new(p: BigInt, a: BigInt, b: BigInt) -> Self {
        Curve { p, a, b }
    }

    /// Modular inverse by Fermat's little theorem: n^(p-2) mod p.
    /// Requires p prime and n not a multiple of p.
    fn mod_inv(&self, n: &BigInt) -> BigInt {
        n.modpow(&(&self.p - 2), &self.p)
    }

    /// Whether the point satisfies the curve equation.
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        match point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let lhs = (y * y).mod_floor(&self.p);
                let rhs = (x * x * x + &self.a * x + &self.b).mod_floor(&self.p);
                lhs == rhs
            }
        }
    }

    /// Affine point addition, covering doubling and the identity cases.
    #[must_use]
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Point {
        let (x1, y1, x2, y2) = match (lhs, rhs) {
            (Point::Infinity, q) => return q.clone(),
            (p, Point::Infinity) => return p.clone(),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        // Mirror-image points sum to the identity, as does doubling a
        // point on the x axis (its tangent is vertical).
        if x1 == x2 && (y1 != y2 || y1.is_zero()) {
            return Point::Infinity;
        }

        let slope = if x1 == x2 {
            // tangent: (3x^2 + a) / 2y
            let num = (BigInt::from(3) * x1 * x1 + &self.a).mod_floor(&self.p);
            let den = (BigInt::from(2) * y1).mod_floor(&self.p);
            (num * self.mod_inv(&den)).mod_floor(&self.p)
        } else {
            // chord: (y2 - y1) / (x2 - x1)
            let num = (y2 - y1).mod_floor(&self.p);
            let den = (x2 - x1).mod_floor(&self.p);
            (num * self.mod_inv(&den)).mod_floor(&self.p)
        };

        let x3 = (&slope * &slope - x1 - x2).mod_floor(&self.p);
        let y3 = (slope * (x1 - &x3) - y1).mod_floor(&self.p);
        Point::Affine { x: x3, y: y3 }
    }

    #[must_use]
    #[inline]
    pub fn double(&self, point: &Point) -> Point {
        self.add(point, point)
    }

    /// Double-and-add scalar multiplication: k * point.
    #[must_use]
    pub fn scalar_mul(&self, k: &BigInt, point: &Point) -> Point {
        debug_assert!(*k >= BigInt::zero(), "scalar must be non-negative");

        let mut result = Point::Infinity;
        let mut addend = point.clone();
        let mut k = k.clone();

        while !k.is_zero() {
            if k.is_odd() {
                result = self.add(&result, &addend);
            }
            addend = self.double(&addend);
            k >>= 1;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // y^2 = x^3 + 7 over F_223, a small curve for hand-checkable arithmetic
    fn tiny_curve() -> Curve {
        Curve::new(BigInt::from(223), BigInt::from(0), BigInt::from(7))
    }

    fn pt(x: i32, y: i32) -> Point {
        Point::affine(BigInt::from(x), BigInt::from(y))
    }

    #[test]
    fn test_mod_inv() {
        let curve = Curve::new(BigInt::from(17), BigInt::from(0), BigInt::from(7));
        for n in 1..17 {
            let n = BigInt::from(n);
            let inv = curve.mod_inv(&n);
            assert_eq!((&n * inv).mod_floor(&curve.p), BigInt::from(1));
        }
    }

    #[test]
    fn test_identity_is_neutral() {
        let curve = tiny_curve();
        let p = pt(192, 105);
        assert!(curve.contains(&p));
        assert_eq!(curve.add(&p, &Point::Infinity), p);
        assert_eq!(curve.add(&Point::Infinity, &p), p);
        assert!(Point::Infinity.is_infinity());
    }

    #[test]
    fn test_inverse_points_sum_to_identity() {
        let curve = tiny_curve();
        let p = pt(192, 105);
        let neg = pt(192, 223 - 105);
        assert!(curve.contains(&neg));
        assert!(curve.add(&p, &neg).is_infinity());
    }

    #[test]
    fn test_addition_stays_on_curve() {
        let curve = tiny_curve();
        let p = pt(192, 105);
        let q = pt(17, 56);
        assert!(curve.contains(&q));

        let sum = curve.add(&p, &q);
        assert!(curve.contains(&sum));
        assert!(!sum.is_infinity());

        let doubled = curve.double(&p);
        assert!(curve.contains(&doubled));
    }

    #[test]
    fn test_scalar_mul_matches_repeated_addition() {
        let curve = tiny_curve();
        let p = pt(192, 105);

        let mut acc = Point::Infinity;
        for k in 0..10 {
            assert_eq!(curve.scalar_mul(&BigInt::from(k), &p), acc);
            acc = curve.add(&acc, &p);
        }
    }

    #[test]
    fn test_scalar_mul_zero_is_identity() {
        let curve = tiny_curve();
        let p = pt(192, 105);
        assert!(curve.scalar_mul(&BigInt::from(0), &p).is_infinity());
    }
}

//! Arithmetic in `GF(2^64)`, the binary extension field of order `2^64`.
//!
//! Elements are 64-bit values; addition is XOR, multiplication is carryless
//! polynomial multiplication reduced modulo the fixed irreducible polynomial
//! `M(x) = x^64 + x^4 + x^3 + x + 1`.

use std::fmt;
use std::ops::{Add, BitXor, Div, Mul, Sub};

/// Characteristic of the field (it's `GF(2^64)`, so this is always 2).
pub const CHARACTERISTIC: u32 = 2;

/// Dimension of the field as a vector space over `GF(2)`.
pub const DIMENSION: u32 = 64;

/// Low 64 bits of the modulus polynomial `x^64 + x^4 + x^3 + x + 1`
/// (the `x^64` term is implicit — it's what the reduction step folds back in).
const MODULUS: u64 = 0b1_1011;

/// An element of `GF(2^64)`, represented as a 64-bit bit pattern: bit `i` is
/// the coefficient of `x^i` in `GF(2)[x]` reduced modulo [`MODULUS`].
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element(pub u64);

impl Element {
    /// The additive identity, `0`.
    pub const ZERO: Element = Element(0);

    /// The multiplicative identity, `1`.
    pub const ONE: Element = Element(1);

    /// Adds two elements (`a + b = a XOR b` in characteristic 2).
    #[inline]
    #[must_use]
    pub fn add(self, other: Element) -> Element {
        Element(self.0 ^ other.0)
    }

    /// Subtracts two elements. Identical to [`Element::add`] in characteristic 2.
    #[inline]
    #[must_use]
    pub fn sub(self, other: Element) -> Element {
        self.add(other)
    }

    /// Carryless product of `self` and `other`, reduced modulo [`MODULUS`].
    ///
    /// Constant-time with respect to operand values: every step runs the
    /// same bitwise operations regardless of the bits of `self`/`other`, with
    /// branches replaced by mask selection (`0u64.wrapping_sub(bit)` yields
    /// an all-ones or all-zero mask).
    #[inline]
    #[must_use]
    pub fn mul(self, other: Element) -> Element {
        let mut a = self.0;
        let mut b = other.0;
        let mut product: u64 = 0;

        for _ in 0..DIMENSION {
            let low_bit_mask = 0u64.wrapping_sub(b & 1);
            product ^= a & low_bit_mask;

            let high_bit_mask = 0u64.wrapping_sub(a >> (DIMENSION - 1));
            a = (a << 1) ^ (MODULUS & high_bit_mask);
            b >>= 1;
        }

        Element(product)
    }

    /// Squares `self`, i.e. `self.mul(self)`. Equivalent to `self.exp(2)` but
    /// skips the general square-and-multiply loop since there's nothing to
    /// multiply by — [`crate::poly::Poly::sqr`] and [`crate::poly::trace`]
    /// call this in their hot loop.
    #[inline]
    #[must_use]
    pub fn square(self) -> Element {
        self.mul(self)
    }

    /// Multiplicative inverse, computed as `self^(2^64 - 2)` via 63
    /// squarings and 63 multiplications (`a^2 * a^4 * a^8 * ... * a^(2^63)`).
    ///
    /// `inv(0) = 0` by convention; callers that depend on invertibility must
    /// check for zero themselves.
    #[inline]
    #[must_use]
    pub fn inv(self) -> Element {
        if self == Element::ZERO {
            return Element::ZERO;
        }

        let mut a = self;
        let mut p = Element::ONE;

        for _ in 0..DIMENSION - 1 {
            a = a.square();
            p = p.mul(a);
        }

        p
    }

    /// `self` divided by `other`, i.e. `self.mul(other.inv())`.
    ///
    /// Dividing by zero is undefined at the algebraic level; this
    /// implementation deterministically returns zero (since `inv(0) = 0`).
    #[inline]
    #[must_use]
    pub fn div(self, other: Element) -> Element {
        self.mul(other.inv())
    }

    /// Raises `self` to the power `exponent` by right-to-left
    /// square-and-multiply. `exp(a, 0) == 1` for all `a`, including `a == 0`.
    #[must_use]
    pub fn exp(self, mut exponent: u64) -> Element {
        let mut base = self;
        let mut result = Element::ONE;

        while exponent != 0 {
            if exponent & 1 == 1 {
                result = result.mul(base);
            }
            base = base.square();
            exponent >>= 1;
        }

        result
    }

    /// Square root: since `x -> x^2` (the Frobenius endomorphism) has order
    /// 64 on this field, `sqrt(a) = a^(2^63)`, computed by 63 squarings.
    #[must_use]
    pub fn sqrt(self) -> Element {
        let mut a = self;
        for _ in 0..DIMENSION - 1 {
            a = a.square();
        }
        a
    }
}

impl Add for Element {
    type Output = Element;
    #[inline]
    fn add(self, rhs: Element) -> Element {
        Element::add(self, rhs)
    }
}

impl Sub for Element {
    type Output = Element;
    #[inline]
    fn sub(self, rhs: Element) -> Element {
        Element::sub(self, rhs)
    }
}

impl BitXor for Element {
    type Output = Element;
    #[inline]
    fn bitxor(self, rhs: Element) -> Element {
        Element::add(self, rhs)
    }
}

impl Mul for Element {
    type Output = Element;
    #[inline]
    fn mul(self, rhs: Element) -> Element {
        Element::mul(self, rhs)
    }
}

impl Div for Element {
    type Output = Element;
    #[inline]
    fn div(self, rhs: Element) -> Element {
        Element::div(self, rhs)
    }
}

impl From<u64> for Element {
    #[inline]
    fn from(value: u64) -> Element {
        Element(value)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Element({:#018x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_xor() {
        let a = Element(0b1010);
        let b = Element(0b0110);
        assert_eq!(a.add(b), Element(0b1100));
        assert_eq!(a.add(b), a.sub(b));
    }

    #[test]
    fn mul_identity_and_zero() {
        let a = Element(123_456_789);
        assert_eq!(a.mul(Element::ONE), a);
        assert_eq!(a.mul(Element::ZERO), Element::ZERO);
    }

    #[test]
    fn exp_zero_is_one() {
        assert_eq!(Element(42).exp(0), Element::ONE);
        assert_eq!(Element::ZERO.exp(0), Element::ONE);
    }

    #[test]
    fn inv_of_zero_is_zero() {
        assert_eq!(Element::ZERO.inv(), Element::ZERO);
    }

    #[test]
    fn inv_round_trips_nonzero() {
        for raw in [1u64, 2, 3, 42, 1_000_003, u64::MAX] {
            let a = Element(raw);
            assert_eq!(a.mul(a.inv()), Element::ONE, "a = {raw:#x}");
        }
    }

    #[test]
    fn sqrt_of_square_is_identity() {
        for raw in [1u64, 2, 3, 42, 1_000_003, u64::MAX] {
            let a = Element(raw);
            assert_eq!(a.square().sqrt(), a, "a = {raw:#x}");
        }
    }

    #[test]
    fn mul_matches_exp_two() {
        for raw in [0u64, 1, 2, 42, 7, u64::MAX] {
            let a = Element(raw);
            assert_eq!(a.mul(a), a.exp(2));
        }
    }

    impl quickcheck::Arbitrary for Element {
        fn arbitrary(g: &mut quickcheck::Gen) -> Element {
            Element(u64::arbitrary(g))
        }
    }

    // Property 1 from the design doc: field axioms, for all nonzero `a`.
    #[quickcheck_macros::quickcheck]
    fn prop_mul_self_matches_exp_two(a: Element) -> bool {
        a.mul(a) == a.exp(2)
    }

    #[quickcheck_macros::quickcheck]
    fn prop_exp_two_div_a_is_a(a: Element) -> bool {
        if a == Element::ZERO {
            return true;
        }
        a.exp(2).div(a) == a
    }

    #[quickcheck_macros::quickcheck]
    fn prop_sqrt_of_square_is_identity(a: Element) -> bool {
        a.square().sqrt() == a
    }

    #[quickcheck_macros::quickcheck]
    fn prop_inv_is_multiplicative_identity(a: Element) -> bool {
        if a == Element::ZERO {
            return true;
        }
        a.mul(a.inv()) == Element::ONE
    }
}

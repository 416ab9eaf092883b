//! Polynomials over [`Element`], stored as coefficients in **ascending**
//! degree order (index 0 is the constant term).
//!
//! Every `Poly` returned by an operation in this module is normalized: it is
//! either empty (the zero polynomial) or its last coefficient is nonzero.
//! Operations are all-pure — they take `&Poly`/`Poly` and return a new
//! `Poly` — except [`Poly::monic`], which is documented as mutating in
//! place, matching §4.2 of the design.

use std::ops::{Deref, DerefMut};

use crate::field::Element;

/// A polynomial over `GF(2^64)`, coefficients in ascending degree order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Poly(pub Vec<Element>);

impl Poly {
    /// The zero polynomial (empty coefficient list).
    #[must_use]
    pub fn zero() -> Poly {
        Poly(Vec::new())
    }

    /// Builds a `Poly` from coefficients, stripping any trailing zeros so
    /// the normalization invariant holds.
    #[must_use]
    pub fn from_coeffs(mut coeffs: Vec<Element>) -> Poly {
        strip_trailing_zeros(&mut coeffs);
        Poly(coeffs)
    }

    /// Degree of the polynomial, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.len() - 1)
        }
    }

    /// `true` if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts an arbitrary nonzero polynomial into a monic one in place:
    /// divides every coefficient by the leading coefficient, setting the
    /// leading coefficient to 1. A no-op on the zero polynomial.
    pub fn monic(&mut self) {
        let Some(last) = self.0.last().copied() else {
            return;
        };
        if last == Element::ONE {
            return;
        }

        let inv = last.inv();
        let end = self.0.len() - 1;
        for coeff in &mut self.0[..end] {
            *coeff = coeff.mul(inv);
        }
        self.0[end] = Element::ONE;
    }

    /// Remainder of dividing `self` by `modulus`. `modulus` must be nonempty
    /// and is expected monic by callers (the reduction step divides by its
    /// leading coefficient implicitly by assuming it's 1).
    #[must_use]
    pub fn rem(&self, modulus: &Poly) -> Poly {
        self.div_rem(modulus).1
    }

    /// Quotient and remainder of dividing `self` by `modulus`.
    ///
    /// The quotient has length `len(self) - len(modulus) + 1` when division
    /// actually reduces anything, empty otherwise. `modulus` must be
    /// nonempty and is expected monic.
    #[must_use]
    pub fn div_rem(&self, modulus: &Poly) -> (Poly, Poly) {
        debug_assert!(!modulus.0.is_empty(), "division by the zero polynomial");

        let mut value = self.0.clone();
        if value.len() < modulus.0.len() {
            return (Poly::zero(), Poly(value));
        }

        let mut quotient = vec![Element::ZERO; value.len() - modulus.0.len() + 1];

        while value.len() >= modulus.0.len() {
            let term = value.pop().expect("checked len above");
            let shift = value.len() + 1 - modulus.0.len();
            quotient[shift] = term;

            if term != Element::ZERO {
                for (i, &m) in modulus.0[..modulus.0.len() - 1].iter().enumerate() {
                    value[shift + i] = value[shift + i].add(term.mul(m));
                }
            }
        }

        strip_trailing_zeros(&mut value);
        (Poly(quotient), Poly(value))
    }

    /// Squares the polynomial. Over characteristic 2, squaring is the
    /// "freshman's dream": `(sum a_i x^i)^2 = sum a_i^2 x^(2i)`. Output
    /// length is `2*len(self) - 1` (empty if `self` is empty); odd-indexed
    /// coefficients are zero.
    #[must_use]
    pub fn sqr(&self) -> Poly {
        if self.0.is_empty() {
            return Poly::zero();
        }

        let mut out = vec![Element::ZERO; self.0.len() * 2 - 1];
        for (i, &coeff) in self.0.iter().enumerate() {
            out[2 * i] = coeff.square();
        }

        Poly(out)
    }
}

/// Strips trailing zero coefficients so the last coefficient is nonzero (or
/// the vector is empty).
fn strip_trailing_zeros(coeffs: &mut Vec<Element>) {
    while matches!(coeffs.last(), Some(&Element::ZERO)) {
        coeffs.pop();
    }
}

impl Deref for Poly {
    type Target = [Element];
    fn deref(&self) -> &[Element] {
        &self.0
    }
}

impl DerefMut for Poly {
    fn deref_mut(&mut self) -> &mut [Element] {
        &mut self.0
    }
}

impl From<Vec<Element>> for Poly {
    fn from(coeffs: Vec<Element>) -> Poly {
        Poly::from_coeffs(coeffs)
    }
}

impl FromIterator<Element> for Poly {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Poly {
        Poly::from_coeffs(iter.into_iter().collect())
    }
}

/// Computes `T_a(x) = sum_{i=0}^{63} (a*x)^(2^i) mod modulus(x)`, the trace
/// polynomial used by [`crate::roots::find_roots`] to split factors.
///
/// Starts from `{0, a}` (i.e. `a*x`) and repeats 63 times: square, ensure
/// the result has at least two coefficients (padding with a zero constant
/// term if squaring shortened it to a single term), force coefficient 1
/// back to `a` (re-adding the `a*x` term the squaring step loses), then
/// reduce modulo `modulus`.
#[must_use]
pub fn trace(a: Element, modulus: &Poly) -> Poly {
    let mut out = Poly(vec![Element::ZERO, a]);

    for _ in 0..crate::field::DIMENSION - 1 {
        out = out.sqr();

        if out.0.len() < 2 {
            out.0.resize(2, Element::ZERO);
        }
        out.0[1] = a;

        out = out.rem(modulus);
    }

    out
}

/// Greatest common divisor of two polynomials via the Euclidean algorithm.
///
/// If either input is the zero polynomial, the other is the GCD. Returns a
/// monic polynomial, or the unit `{1}` when the two polynomials are
/// coprime (i.e. their GCD is a nonzero constant).
#[must_use]
pub fn gcd(a: &Poly, b: &Poly) -> Poly {
    let (mut a, mut b) = if a.0.len() >= b.0.len() {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    };

    while !b.0.is_empty() {
        if b.0.len() == 1 {
            return Poly(vec![Element::ONE]);
        }

        b.monic();
        let remainder = a.rem(&b);
        a = b;
        b = remainder;
    }

    a
}

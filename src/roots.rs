//! Berlekamp Trace factorization: finds the roots of a squarefree,
//! fully-splitting polynomial over `GF(2^64)`.
//!
//! Used by [`crate::sketch::Sketch::decode`] to turn the locator polynomial
//! produced by [`crate::bma::berlekamp_massey`] back into the set of
//! toggled elements.

use log::trace;

use crate::field::{Element, DIMENSION};
use crate::poly::{self, Poly};

/// Finds the roots of `polynomial`, a monic polynomial over `GF(2^64)`
/// assumed to be a product of distinct linear factors.
///
/// Returns the (unordered) multiset of roots, or an empty vector if
/// `polynomial` is detectably not a product of distinct linear factors, or
/// if the recursion's depth guard trips before splitting completes (see
/// [`find_roots_at`]).
#[must_use]
pub fn find_roots(polynomial: Poly) -> Vec<Element> {
    find_roots_at(polynomial, false, 0, Element(1))
}

/// One node of the Berlekamp Trace recursion.
///
/// `factorizable` is `true` once the splittability check (the `T^2 + T mod
/// P` test) has passed somewhere above this call — it is performed at most
/// once per subtree, never on the very first splitting attempt (a split
/// found immediately needs no verification). `depth` counts splitting
/// attempts across the *whole* recursion, not just this subtree, and
/// bounds the work the depth guard allows.
fn find_roots_at(
    polynomial: Poly,
    mut factorizable: bool,
    mut depth: u32,
    mut a: Element,
) -> Vec<Element> {
    if polynomial.0.len() == 2 {
        // P = x + c (monic), so its unique root is c.
        return vec![polynomial.0[0]];
    }

    let mut attempt: u32 = 0;

    loop {
        let t = poly::trace(a, &polynomial);

        if attempt >= 1 && !factorizable {
            // T^2 + T mod P == 0 iff P is a product of distinct linear
            // factors; abort the whole subtree otherwise.
            let residual = t.sqr().add_poly(&t).rem(&polynomial);
            if !residual.is_zero() {
                trace!("find_roots: splittability check failed, not fully splitting");
                return Vec::new();
            }
            factorizable = true;
        }

        if factorizable {
            debug_assert!(
                depth <= DIMENSION,
                "find_roots recursion depth exceeded field dimension"
            );
            // degree(P) - 1 == len(P) - 2.
            let degree_minus_one = (polynomial.0.len() - 2) as u64;
            let shift = DIMENSION - depth.min(DIMENSION);
            let shifted = if shift >= 64 { 0 } else { degree_minus_one >> shift };
            if shifted != 0 {
                trace!("find_roots: depth guard tripped at depth={depth}");
                return Vec::new();
            }
        }

        a = a.mul(Element(2));

        let candidate = poly::gcd(&t, &polynomial);

        if candidate.0.len() != polynomial.0.len() && candidate.0.len() > 1 {
            let mut split = candidate;
            split.monic();

            let (quotient, _) = polynomial.div_rem(&split);

            // Quotient keeps the subtree's current `factorizable` (it may
            // still need its own splittability check, if this split was
            // found on the very first attempt); the split factor itself is
            // taken as already verified.
            let mut roots = find_roots_at(quotient, factorizable, depth, a);
            roots.extend(find_roots_at(split, true, depth, a));
            return roots;
        }

        attempt += 1;
        depth += 1;
    }
}

impl Poly {
    /// Plain polynomial addition (no reduction), used only by the
    /// splittability check above — `Poly` otherwise never needs unreduced
    /// addition, since every other caller adds as part of a modular
    /// reduction step.
    fn add_poly(&self, other: &Poly) -> Poly {
        let n = self.0.len().max(other.0.len());
        let mut out = vec![Element::ZERO; n];
        for (i, slot) in out.iter_mut().enumerate() {
            let a = self.0.get(i).copied().unwrap_or(Element::ZERO);
            let b = other.0.get(i).copied().unwrap_or(Element::ZERO);
            *slot = a.add(b);
        }
        Poly::from_coeffs(out)
    }
}

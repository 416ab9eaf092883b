//! Berlekamp–Massey: recovers the minimal linear recurrence satisfied by a
//! sequence of syndromes over `GF(2^64)`.
//!
//! Used to solve for the error/locator polynomial in BCH-style codes: fed
//! the full syndrome sequence from [`crate::frobenius::frobenius`], it
//! returns the polynomial whose roots (via [`crate::roots::find_roots`])
//! are the toggled set elements.

use log::trace;

use crate::field::Element;
use crate::poly::Poly;

/// Yields the coefficients (ascending power order, constant term 1) of the
/// minimal polynomial of the linear recurrence satisfied by `syndromes`.
/// Returns `{1}` if the sequence is identically zero.
///
/// Maintains, at each iteration `n`:
/// - `current`: the shortest LFSR generating `syndromes[0..n]` so far.
/// - `prev`: the previous-best LFSR, from before the last length change.
/// - `discrepancy`/`discrepancy_inv`: the discrepancy that triggered the
///   last length change, and its inverse, computed lazily (a flag tracks
///   whether the cached inverse is still current — purely a performance
///   optimization, observably equivalent to recomputing it eagerly).
#[must_use]
pub fn berlekamp_massey(syndromes: &[Element]) -> Poly {
    let mut current = Poly(vec![Element::ONE]);
    let mut prev = Poly(vec![Element::ONE]);

    let mut discrepancy = Element::ONE;
    let mut discrepancy_inv = Element::ONE;
    let mut discrepancy_inv_fresh = true;

    for n in 0..syndromes.len() {
        let mut delta = syndromes[n];
        for i in 1..current.0.len() {
            delta = delta.add(current.0[i].mul(syndromes[n - i]));
        }

        if delta == Element::ZERO {
            continue;
        }

        let shift = n + 1 - (current.0.len() - 1) - (prev.0.len() - 1);

        if !discrepancy_inv_fresh {
            discrepancy_inv = discrepancy.inv();
            discrepancy_inv_fresh = true;
        }

        let length_changes = 2 * (current.0.len() - 1) <= n;

        // `stashed_current` holds the pre-resize `current`, which becomes
        // the new `prev` only *after* the update loop below has used the
        // still-old `prev` — the resize must not disturb this iteration's
        // update.
        let stashed_current = if length_changes {
            let mut resized = vec![Element::ZERO; prev.0.len() + shift];
            resized[..current.0.len()].copy_from_slice(&current.0);
            Some(std::mem::replace(&mut current, Poly(resized)))
        } else {
            None
        };

        let multiplier = delta.mul(discrepancy_inv);
        for (i, &prev_coeff) in prev.0.iter().enumerate() {
            current.0[i + shift] = current.0[i + shift].add(prev_coeff.mul(multiplier));
        }

        if let Some(old_current) = stashed_current {
            prev = old_current;
            discrepancy = delta;
            discrepancy_inv_fresh = false;
            trace!(
                "bma: length change at n={n}, new degree={}",
                current.0.len() - 1
            );
        }
    }

    current
}

//! Frobenius expansion: recovers the full power-sum (syndrome) sequence
//! from its odd-indexed half.
//!
//! In characteristic 2, `(sum e^k)^2 = sum e^(2k)` — the Frobenius
//! endomorphism `x -> x^2` turns an odd syndrome into the even syndrome at
//! twice its index. A [`crate::sketch::Sketch`] only ever transmits odd
//! syndromes; the receiver expands them back to the full sequence before
//! running Berlekamp–Massey.

use log::trace;

use crate::field::Element;

/// Given `c` odd-indexed syndromes `S_1, S_3, ..., S_(2c-1)` (at positions
/// `0..c` of `odd_syndromes`), returns the full sequence
/// `S_1, S_2, S_3, ..., S_(2c)` of length `2c`, stored at array positions
/// `0..2c`.
///
/// `S_1, S_2, ...` alternate parity with every other array position: array
/// index `i` is even exactly when it holds an odd-numbered syndrome (`S_1`
/// at index 0, `S_3` at index 2, ...), copied straight from
/// `odd_syndromes`; odd array indices hold even-numbered syndromes,
/// computed by squaring the already-filled entry at half the index (`S_2 =
/// S_1^2` at index 1, `S_4 = S_2^2` at index 3, ...). Built in ascending
/// index order so each squared entry can read the already-filled entry at
/// half its index.
#[must_use]
pub fn frobenius(odd_syndromes: &[Element]) -> Vec<Element> {
    let mut result = vec![Element::ZERO; odd_syndromes.len() * 2];

    for i in 0..result.len() {
        result[i] = if i % 2 == 0 {
            odd_syndromes[i / 2]
        } else {
            result[i / 2].square()
        };
    }

    trace!(
        "frobenius: expanded {} odd syndromes into {} total",
        odd_syndromes.len(),
        result.len()
    );

    result
}

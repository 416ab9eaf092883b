//! Sketches: fixed-capacity summaries of a multiset of [`Element`]s that
//! support merging and decoding the symmetric difference of two sets.
//!
//! Ties the rest of the pipeline together: [`Sketch::decode`] runs
//! [`crate::frobenius::frobenius`] → [`crate::bma::berlekamp_massey`] →
//! [`crate::roots::find_roots`] in sequence.

use log::debug;

use crate::bma::berlekamp_massey;
use crate::field::Element;
use crate::frobenius::frobenius;
use crate::poly::Poly;
use crate::roots::find_roots;

/// A fixed-capacity sketch of a multiset of [`Element`]s.
///
/// Index `i` holds the partial power-sum `sum_{e in S} e^(2i+1)` over the
/// multiset `S` of toggled elements — only odd powers, since the receiver
/// can reconstruct the even ones via [`frobenius`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sketch {
    syndromes: Vec<Element>,
}

impl Sketch {
    /// Allocates a new, empty sketch with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Sketch {
        Sketch {
            syndromes: vec![Element::ZERO; capacity],
        }
    }

    /// The sketch's capacity: the largest symmetric difference it is
    /// guaranteed able to decode.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.syndromes.len()
    }

    /// Toggles a single element into the sketch in place. Toggling the same
    /// element twice cancels it back out (characteristic 2) — a sketch
    /// tracks the *symmetric difference* of everything ever toggled into
    /// it, not a plain union.
    ///
    /// Maintains a running `p = e^(2i+1)` incrementally: `p` starts at `e`
    /// and is multiplied by the constant `e^2` after each position, since
    /// `e^(2(i+1)+1) = e^(2i+1) * e^2`.
    pub fn add_one(&mut self, element: Element) {
        let mut power = element;
        let square = element.mul(element);

        for slot in &mut self.syndromes {
            *slot = slot.add(power);
            power = power.mul(square);
        }
    }

    /// Toggles each element of `items` into the sketch in place.
    pub fn add<I: IntoIterator<Item = Element>>(&mut self, items: I) {
        for item in items {
            self.add_one(item);
        }
    }

    /// Merges `self` with `other`, returning a new sketch whose capacity is
    /// the smaller of the two input capacities and whose syndromes are the
    /// elementwise XOR of the two inputs up to that capacity.
    ///
    /// Since toggling is additive in `GF(2^64)`,
    /// `merge(encode(A), encode(B)) == encode(A Δ B)`. Pure: neither `self`
    /// nor `other` is modified.
    #[must_use]
    pub fn merge(&self, other: &Sketch) -> Sketch {
        let capacity = self.capacity().min(other.capacity());
        let syndromes = (0..capacity)
            .map(|i| self.syndromes[i].add(other.syndromes[i]))
            .collect();

        Sketch { syndromes }
    }

    /// Decodes the sketch into the multiset of elements that produced it
    /// (assuming their count does not exceed the sketch's capacity).
    ///
    /// Runs [`frobenius`] to expand the stored odd syndromes into the full
    /// syndrome sequence, [`berlekamp_massey`] to recover the locator
    /// polynomial, then [`find_roots`] to factor it. Returns an empty
    /// vector if decoding fails for any reason — empty sketch, degenerate
    /// locator, or a locator that does not fully split (over-capacity
    /// input, most likely).
    #[must_use]
    pub fn decode(&self) -> Vec<Element> {
        let full_syndromes = frobenius(&self.syndromes);
        let mut locator = berlekamp_massey(&full_syndromes);

        if locator.len() <= 1 {
            debug!("sketch decode: degenerate locator, no items");
            return Vec::new();
        }

        // BMA emits coefficients with the constant term first; find_roots
        // expects ascending-degree order with the constant term of the
        // *root* polynomial first. The two conventions are mirror images
        // of each other, so the reversal is load-bearing, not cosmetic.
        locator.0.reverse();

        let items = find_roots(locator);
        debug!("sketch decode: recovered {} item(s)", items.len());
        items
    }

    /// Re-encodes `items` at this sketch's capacity and checks whether the
    /// result matches `self`. Callers that need certainty a decoded result
    /// is actually correct — rather than merely plausible — should use
    /// this after [`Sketch::decode`], since decoding an over-capacity
    /// sketch can silently return a wrong, non-empty answer.
    #[must_use]
    pub fn verify(&self, items: &[Element]) -> bool {
        let mut reencoded = Sketch::new(self.capacity());
        reencoded.add(items.iter().copied());
        reencoded == *self
    }

    /// Serializes the sketch to its wire format: capacity * 8 bytes,
    /// little-endian per element, ascending index order, no envelope or
    /// version byte (capacity is negotiated out of band by callers).
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.syndromes.len() * 8);
        for element in &self.syndromes {
            out.extend_from_slice(&element.0.to_le_bytes());
        }
        out
    }

    /// Deserializes a sketch from its wire format (see [`Sketch::to_bytes`]).
    /// Returns `None` if `bytes` is not a whole multiple of 8.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Sketch> {
        if bytes.len() % 8 != 0 {
            return None;
        }

        let syndromes = bytes
            .chunks_exact(8)
            .map(|chunk| {
                let mut buf = [0u8; 8];
                buf.copy_from_slice(chunk);
                Element(u64::from_le_bytes(buf))
            })
            .collect();

        Some(Sketch { syndromes })
    }
}

impl From<Vec<Element>> for Sketch {
    fn from(syndromes: Vec<Element>) -> Sketch {
        Sketch { syndromes }
    }
}

impl From<Sketch> for Poly {
    fn from(sketch: Sketch) -> Poly {
        Poly(sketch.syndromes)
    }
}

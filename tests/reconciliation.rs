// Integration smoke tests: exercise the public API only, the way two
// independent peers reconciling sets actually would.

use pinsketch::prelude::*;

fn elements(raw: &[u64]) -> Vec<Element> {
    raw.iter().copied().map(Element).collect()
}

fn sorted(mut items: Vec<Element>) -> Vec<u64> {
    items.sort_unstable();
    items.into_iter().map(|e| e.0).collect()
}

#[test]
fn two_peers_reconcile_their_symmetric_difference() {
    let alice_items = elements(&[2000, 4000, 5000]);
    let bob_items = elements(&[4000, 5000, 1000]);

    let mut alice = Sketch::new(6);
    alice.add(alice_items);
    let mut bob = Sketch::new(6);
    bob.add(bob_items);

    let diff = sorted(bob.merge(&alice).decode());
    assert_eq!(diff, vec![1000, 2000]);
}

#[test]
fn peers_with_different_capacities_still_reconcile() {
    let alice_items = elements(&[2000, 4000, 5000]);
    let bob_items = elements(&[4000, 5000, 1000]);

    let mut alice = Sketch::new(4);
    alice.add(alice_items.clone());
    let mut bob = Sketch::new(12);
    bob.add(bob_items.clone());

    assert_eq!(sorted(alice.decode()), sorted(alice_items));
    assert_eq!(sorted(bob.decode()), sorted(bob_items));

    let diff = sorted(bob.merge(&alice).decode());
    assert_eq!(diff, vec![1000, 2000]);
}

#[test]
fn identical_sets_reconcile_to_empty() {
    let items = elements(&[7, 11, 13]);

    let mut alice = Sketch::new(5);
    alice.add(items.clone());
    let mut bob = Sketch::new(5);
    bob.add(items);

    assert!(alice.merge(&bob).decode().is_empty());
}

#[test]
fn empty_sketch_decodes_to_empty_set() {
    assert!(Sketch::new(8).decode().is_empty());
}

#[test]
fn zero_capacity_sketch_is_always_empty() {
    let mut sketch = Sketch::new(0);
    sketch.add(elements(&[1, 2, 3]));
    assert!(sketch.decode().is_empty());
}

#[test]
fn verify_confirms_a_correct_decode_and_rejects_a_wrong_one() {
    let mut sketch = Sketch::new(4);
    sketch.add(elements(&[10, 20, 30]));

    let decoded = sketch.decode();
    assert!(sketch.verify(&decoded));
    assert!(!sketch.verify(&elements(&[10, 20])));
}

#[test]
fn wire_format_round_trips_across_a_merge() {
    let mut alice = Sketch::new(4);
    alice.add(elements(&[100, 200]));
    let mut bob = Sketch::new(4);
    bob.add(elements(&[200, 300]));

    let merged = alice.merge(&bob);
    let bytes = merged.to_bytes();
    let restored = Sketch::from_bytes(&bytes).expect("well-formed bytes");

    assert_eq!(sorted(restored.decode()), vec![100, 300]);
}

#[test]
fn over_capacity_sketch_never_panics_and_verify_rejects_a_wrong_guess() {
    // Six toggled elements into a sketch that can only certify four: the
    // capacity guarantee no longer holds, but decoding still must not
    // panic, and verify must still reject an answer that is plainly wrong.
    let mut sketch = Sketch::new(4);
    sketch.add(elements(&[1, 2, 3, 4, 5, 6]));

    let _ = sketch.decode();
    assert!(!sketch.verify(&elements(&[999])));
}

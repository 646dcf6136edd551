//! The algebra over arena-backed descriptors.

use bumpalo::Bump;
use pretty_assertions::assert_eq;
use tyseq::types::{ArenaBuilder, BoxBuilder, TyDisplay, TypeBuilder, convert_ty, types_equal};
use tyseq::{Algebra, Case, ToPointer};

#[test]
fn arena_results_match_box_results() {
    let arena = Bump::new();
    let ab = ArenaBuilder::new(&arena);
    let bb = BoxBuilder::new();
    let arena_algebra = Algebra::new(ab);
    let box_algebra = Algebra::new(bb);

    let arena_seq = ab.sequence([ab.int(), ab.named("Point"), ab.int(), ab.char()]);
    let box_seq = convert_ty(arena_seq, ab, bb);

    let arena_out = arena_algebra.consolidate(&arena_seq).unwrap();
    let box_out = box_algebra.consolidate(&box_seq).unwrap();
    assert!(types_equal(arena_out, ab, box_out, bb));
    assert_eq!(arena_out.display(ab), "([int; 2], Point, char)");
}

#[test]
fn arena_pipeline() {
    let arena = Bump::new();
    let b = ArenaBuilder::new(&arena);
    let algebra = Algebra::new(b);

    let joined = algebra
        .join(&[b.sequence([b.int(), b.double()]), b.bool()])
        .unwrap();
    let tail = algebra.split(1, &joined).unwrap().after;
    let pointers = algebra.map(ToPointer, &tail).unwrap();
    assert_eq!(pointers.display(b), "(double*, bool*)");

    let selection = algebra.select(&[Case::new(false, joined), Case::new(true, pointers)]);
    assert!(selection.matched);
    assert_eq!(selection.ty, pointers);
}

//! Tests for cross-builder operations (comparison, conversion).

use bumpalo::Bump;
use tyseq_types::{
    ArenaBuilder, BoxBuilder, TypeBuilder, TyDisplay, convert_ty, types_cmp, types_equal,
};
use std::cmp::Ordering;

#[test]
fn test_types_equal_scalars() {
    let arena = Bump::new();
    let arena_b = ArenaBuilder::new(&arena);
    let box_b = BoxBuilder::new();

    assert!(types_equal(arena_b.int(), arena_b, box_b.int(), box_b));
    assert!(!types_equal(arena_b.int(), arena_b, box_b.char(), box_b));
}

#[test]
fn test_types_equal_sequences() {
    let arena = Bump::new();
    let arena_b = ArenaBuilder::new(&arena);
    let box_b = BoxBuilder::new();

    let seq1 = arena_b.sequence([arena_b.int(), arena_b.named("Point")]);
    let seq2 = box_b.sequence([box_b.int(), box_b.named("Point")]);
    let shorter = box_b.sequence([box_b.int()]);
    let swapped = box_b.sequence([box_b.named("Point"), box_b.int()]);

    assert!(types_equal(seq1, arena_b, seq2, box_b));
    assert!(!types_equal(seq1, arena_b, shorter, box_b));
    assert!(!types_equal(seq1, arena_b, swapped, box_b));
}

#[test]
fn test_types_equal_groups_compare_count() {
    let arena = Bump::new();
    let arena_b = ArenaBuilder::new(&arena);
    let box_b = BoxBuilder::new();

    let g1 = arena_b.group(arena_b.int(), 3);
    assert!(types_equal(g1, arena_b, box_b.group(box_b.int(), 3), box_b));
    assert!(!types_equal(g1, arena_b, box_b.group(box_b.int(), 2), box_b));
}

#[test]
fn test_types_cmp_kind_order() {
    let builder = BoxBuilder::new();

    let int = builder.int();
    let named = builder.named("A");
    let ptr = builder.pointer(builder.int());
    let seq = builder.sequence([builder.int()]);

    assert_eq!(types_cmp(int.clone(), builder, named.clone(), builder), Ordering::Less);
    assert_eq!(types_cmp(named, builder, ptr.clone(), builder), Ordering::Less);
    assert_eq!(types_cmp(ptr, builder, seq.clone(), builder), Ordering::Less);
    assert_eq!(types_cmp(seq.clone(), builder, seq, builder), Ordering::Equal);
    assert_eq!(types_cmp(int.clone(), builder, int, builder), Ordering::Equal);
}

#[test]
fn test_types_cmp_sequences_lexicographic() {
    let builder = BoxBuilder::new();

    let a = builder.sequence([builder.bool(), builder.int()]);
    let b = builder.sequence([builder.bool(), builder.double()]);
    let prefix = builder.sequence([builder.bool()]);

    assert_eq!(types_cmp(a.clone(), builder, b, builder), Ordering::Less);
    assert_eq!(types_cmp(prefix, builder, a, builder), Ordering::Less);
}

#[test]
fn test_convert_round_trip() {
    let arena = Bump::new();
    let arena_b = ArenaBuilder::new(&arena);
    let box_b = BoxBuilder::new();

    let original = arena_b.sequence([
        arena_b.reference(arena_b.named("Widget")),
        arena_b.group(arena_b.long(), 2),
        arena_b.empty_sequence(),
    ]);

    let boxed = convert_ty(original, arena_b, box_b);
    assert!(types_equal(original, arena_b, boxed.clone(), box_b));
    assert_eq!(boxed.display(box_b), "(Widget&, [long; 2], ())");

    let back = convert_ty(boxed, box_b, arena_b);
    assert_eq!(back, original);
}

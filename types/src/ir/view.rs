//! Cross-builder operations for descriptors.
//!
//! This module provides functions for:
//! - Structural comparison of descriptors across different builders
//! - Conversion between builder representations
//! - Descriptor ordering across builders
//!
//! These work by recursively traversing descriptor structures and
//! comparing/converting them independently of the builder used.

use super::{Ty, TyData, TypeBuilder, TypeKind};
use alloc::vec::Vec;
use core::cmp::Ordering;

/// Structurally compare two descriptors from potentially different builders.
///
/// Returns `true` if the descriptors are identical, regardless of which
/// builders were used to create them.
///
/// # Example
///
/// ```
/// use tyseq_types::{types_equal, ArenaBuilder, BoxBuilder, TypeBuilder};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let arena_b = ArenaBuilder::new(&arena);
/// let box_b = BoxBuilder::new();
///
/// let seq1 = arena_b.sequence([arena_b.int(), arena_b.char()]);
/// let seq2 = box_b.sequence([box_b.int(), box_b.char()]);
///
/// assert!(types_equal(seq1, arena_b, seq2, box_b));
/// ```
pub fn types_equal<I1: TypeBuilder, I2: TypeBuilder>(
    ty1: I1::TypeView,
    builder1: I1,
    ty2: I2::TypeView,
    builder2: I2,
) -> bool {
    match (ty1.view(builder1), ty2.view(builder2)) {
        (TypeKind::Scalar(s1), TypeKind::Scalar(s2)) => s1 == s2,
        (TypeKind::Named(n1), TypeKind::Named(n2)) => n1.as_ref() == n2.as_ref(),

        (TypeKind::Pointer(e1), TypeKind::Pointer(e2))
        | (TypeKind::Reference(e1), TypeKind::Reference(e2)) => {
            types_equal(e1.clone(), builder1, e2.clone(), builder2)
        }

        (
            TypeKind::Group {
                elem: e1,
                count: c1,
            },
            TypeKind::Group {
                elem: e2,
                count: c2,
            },
        ) => c1 == c2 && types_equal(e1.clone(), builder1, e2.clone(), builder2),

        (TypeKind::Sequence(t1), TypeKind::Sequence(t2)) => {
            let elems1 = builder1.types_data(t1);
            let elems2 = builder2.types_data(t2);

            elems1.len() == elems2.len()
                && elems1
                    .iter()
                    .zip(elems2.iter())
                    .all(|(a, b)| types_equal(a.clone(), builder1, b.clone(), builder2))
        }

        _ => false,
    }
}

/// Structurally compare two descriptors and return an ordering.
///
/// The ordering is defined as:
/// 1. Compare kinds (Scalar < Named < Pointer < Reference < Group < Sequence)
/// 2. Within same kind, compare recursively (sequences lexicographically)
pub fn types_cmp<I1: TypeBuilder, I2: TypeBuilder>(
    ty1: I1::TypeView,
    builder1: I1,
    ty2: I2::TypeView,
    builder2: I2,
) -> Ordering {
    fn discriminant<B: TypeBuilder>(kind: &TypeKind<B>) -> u8 {
        match kind {
            TypeKind::Scalar(_) => 0,
            TypeKind::Named(_) => 1,
            TypeKind::Pointer(_) => 2,
            TypeKind::Reference(_) => 3,
            TypeKind::Group { .. } => 4,
            TypeKind::Sequence(_) => 5,
        }
    }

    let kind1 = ty1.view(builder1);
    let kind2 = ty2.view(builder2);

    match discriminant(kind1).cmp(&discriminant(kind2)) {
        Ordering::Equal => match (kind1, kind2) {
            (TypeKind::Scalar(s1), TypeKind::Scalar(s2)) => s1.cmp(s2),
            (TypeKind::Named(n1), TypeKind::Named(n2)) => n1.as_ref().cmp(n2.as_ref()),

            (TypeKind::Pointer(e1), TypeKind::Pointer(e2))
            | (TypeKind::Reference(e1), TypeKind::Reference(e2)) => {
                types_cmp(e1.clone(), builder1, e2.clone(), builder2)
            }

            (
                TypeKind::Group {
                    elem: e1,
                    count: c1,
                },
                TypeKind::Group {
                    elem: e2,
                    count: c2,
                },
            ) => match types_cmp(e1.clone(), builder1, e2.clone(), builder2) {
                Ordering::Equal => c1.cmp(c2),
                ord => ord,
            },

            (TypeKind::Sequence(t1), TypeKind::Sequence(t2)) => {
                let elems1 = builder1.types_data(t1);
                let elems2 = builder2.types_data(t2);

                for (a, b) in elems1.iter().zip(elems2.iter()) {
                    match types_cmp(a.clone(), builder1, b.clone(), builder2) {
                        Ordering::Equal => continue,
                        ord => return ord,
                    }
                }
                elems1.len().cmp(&elems2.len())
            }

            _ => unreachable!("discriminants matched but kinds don't"),
        },
        ord => ord,
    }
}

/// Convert a descriptor from one builder to another.
///
/// Creates a structurally identical descriptor in the target builder by
/// traversing the source and reconstructing it.
pub fn convert_ty<I1: TypeBuilder, I2: TypeBuilder>(
    ty: I1::TypeView,
    from_builder: I1,
    to_builder: I2,
) -> I2::TypeView {
    match ty.view(from_builder) {
        TypeKind::Scalar(s) => to_builder.scalar(*s),
        TypeKind::Named(name) => to_builder.named(name.as_ref()),

        TypeKind::Pointer(elem) => {
            to_builder.pointer(convert_ty(elem.clone(), from_builder, to_builder))
        }

        TypeKind::Reference(elem) => {
            to_builder.reference(convert_ty(elem.clone(), from_builder, to_builder))
        }

        TypeKind::Group { elem, count } => {
            to_builder.group(convert_ty(elem.clone(), from_builder, to_builder), *count)
        }

        TypeKind::Sequence(types) => {
            let elems = from_builder
                .types_data(types)
                .iter()
                .map(|elem| convert_ty(elem.clone(), from_builder, to_builder))
                .collect::<Vec<_>>();
            to_builder.sequence(elems)
        }
    }
}

/// TypeView trait for viewing descriptors uniformly across builders.
pub trait TypeView<B: TypeBuilder>: Sized + Clone {
    /// View the structure of this descriptor.
    fn view(&self, builder: B) -> &TypeKind<B>;

    /// Get the full descriptor data including flags.
    fn data(&self, builder: B) -> &TyData<B>;

    /// The elements, when this descriptor is a sequence.
    fn elements<'a>(&'a self, builder: B) -> Option<&'a [B::TypeView]>
    where
        B: 'a,
    {
        match self.view(builder) {
            TypeKind::Sequence(types) => Some(builder.types_data(types)),
            _ => None,
        }
    }
}

impl<B: TypeBuilder> TypeView<B> for Ty<B> {
    fn view(&self, builder: B) -> &TypeKind<B> {
        self.kind(builder)
    }

    fn data(&self, builder: B) -> &TyData<B> {
        self.data(builder)
    }
}

//! TypeBuilder trait - unified descriptor construction and storage abstraction.
//!
//! This trait combines:
//! - High-level constructors (int(), pointer(), group(), sequence(), etc.)
//! - Low-level storage management (interning)
//! - Pluggable storage strategies (arena, RC, etc.)

use crate::{Scalar, Ty, TyData, TypeKind};
use core::fmt::Debug;
use core::hash::Hash;

/// Abstraction over descriptor construction and storage.
///
/// The builder pattern separates:
/// - **What a descriptor is** (`TypeKind<B>`) - the logical structure
/// - **How descriptors are stored** (`B::InternedTy`) - the representation
/// - **How to construct descriptors** (`B::int()`, `B::sequence()`, etc.) - the API
///
/// Builders must be `Copy` so they can be passed around cheaply.
///
/// # Example
///
/// ```
/// use tyseq_types::{TypeBuilder, ArenaBuilder};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let builder = ArenaBuilder::new(&arena);
///
/// let int_ty = builder.int();
/// let seq = builder.sequence([int_ty, builder.char()]);
/// assert!(seq.is_sequence(builder));
/// ```
pub trait TypeBuilder: Copy + Clone + Debug + Eq {
    /// The descriptor handle returned by this builder.
    ///
    /// Could be `Ty<Self>` wrapping `&'arena TyData` (arena) or
    /// `Rc<TyData>` (RC-based).
    type TypeView: crate::TypeView<Self> + From<Ty<Self>> + Clone + Debug + Eq + Hash;

    /// The internal interned representation of a descriptor.
    type InternedTy: Clone + Debug + Eq + Hash;

    /// The interned representation of a string (descriptor names).
    type InternedStr: Clone + Debug + Eq + Hash + AsRef<str> + core::fmt::Display;

    /// Interned list of descriptors (sequence elements).
    type InternedTypes: Clone + Debug + Eq + Hash;

    // ========================================================================
    // High-level constructors
    // ========================================================================

    /// Construct a scalar descriptor.
    fn scalar(self, scalar: Scalar) -> Self::TypeView {
        TypeKind::Scalar(scalar).intern(self).into()
    }

    /// Construct `void`.
    fn void(self) -> Self::TypeView {
        self.scalar(Scalar::Void)
    }

    /// Construct `bool`.
    fn bool(self) -> Self::TypeView {
        self.scalar(Scalar::Bool)
    }

    /// Construct `char`.
    fn char(self) -> Self::TypeView {
        self.scalar(Scalar::Char)
    }

    /// Construct `int`.
    fn int(self) -> Self::TypeView {
        self.scalar(Scalar::Int)
    }

    /// Construct `long`.
    fn long(self) -> Self::TypeView {
        self.scalar(Scalar::Long)
    }

    /// Construct `float`.
    fn float(self) -> Self::TypeView {
        self.scalar(Scalar::Float)
    }

    /// Construct `double`.
    fn double(self) -> Self::TypeView {
        self.scalar(Scalar::Double)
    }

    /// Construct `str`.
    fn str(self) -> Self::TypeView {
        self.scalar(Scalar::Str)
    }

    /// Construct `bytes`.
    fn bytes(self) -> Self::TypeView {
        self.scalar(Scalar::Bytes)
    }

    /// Construct an opaque named descriptor.
    fn named(self, name: impl AsRef<str>) -> Self::TypeView {
        TypeKind::Named(self.intern_str(name)).intern(self).into()
    }

    /// Construct a pointer to `elem`.
    fn pointer(self, elem: Self::TypeView) -> Self::TypeView {
        TypeKind::Pointer(elem).intern(self).into()
    }

    /// Construct a reference to `elem`.
    fn reference(self, elem: Self::TypeView) -> Self::TypeView {
        TypeKind::Reference(elem).intern(self).into()
    }

    /// Construct a grouping descriptor: `elem` repeated `count` times.
    fn group(self, elem: Self::TypeView, count: usize) -> Self::TypeView {
        TypeKind::Group { elem, count }.intern(self).into()
    }

    /// Construct a sequence from its elements, in order.
    fn sequence(self, elems: impl IntoIterator<Item = Self::TypeView>) -> Self::TypeView {
        TypeKind::Sequence(self.intern_types(elems)).intern(self).into()
    }

    /// Construct the empty sequence.
    fn empty_sequence(self) -> Self::TypeView {
        self.sequence(core::iter::empty())
    }

    // ========================================================================
    // Low-level internals
    // ========================================================================

    /// Intern a kind, returning a handle.
    ///
    /// The implementation is responsible for:
    /// 1. Computing the flags via `kind.compute_flags(self)`
    /// 2. Wrapping the kind in `TyData { kind, flags }`
    /// 3. Storing the `TyData` and returning a handle
    fn intern_ty(self, kind: TypeKind<Self>) -> Self::InternedTy;

    /// Retrieve the descriptor data (kind + flags) for an interned handle.
    fn ty_data(self, ty: &Self::InternedTy) -> &TyData<Self>;

    /// Intern a descriptor name.
    fn intern_str(self, s: impl AsRef<str>) -> Self::InternedStr;

    /// Intern a list of descriptors, preserving order.
    fn intern_types<E>(self, data: impl IntoIterator<Item = E>) -> Self::InternedTypes
    where
        E: Into<Self::TypeView>;

    /// Retrieve the interned descriptor list.
    fn types_data(self, types: &Self::InternedTypes) -> &[Self::TypeView];
}

use super::{Scalar, TypeBuilder};
use crate::TypeView;
use core::fmt;

use bitflags::bitflags;

bitflags! {
    /// Flags indicating structural properties of a descriptor.
    ///
    /// These flags are computed once when a descriptor is interned and cached,
    /// so queries such as "does this contain a grouping" never re-walk
    /// the structure.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct TypeFlags: u16 {
        /// A grouping descriptor occurs at or below this node.
        const HAS_GROUP = 1;
        /// A sequence occurs at or below this node.
        const HAS_SEQUENCE = 1 << 1;
        /// A pointer or reference occurs at or below this node.
        const HAS_INDIRECTION = 1 << 2;
    }
}

/// Data for a descriptor: kind + cached flags.
///
/// This separates the descriptor structure (kind) from cached metadata
/// (flags). The builder computes flags once during interning.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TyData<B: TypeBuilder> {
    /// The actual descriptor structure
    pub kind: TypeKind<B>,

    /// Cached properties for efficient queries
    pub flags: TypeFlags,
}

/// Logical structure of a type descriptor.
///
/// Generic over the `TypeBuilder` so the same kind works with different
/// storage strategies. Two descriptors are either identical or distinct;
/// there is no ordering beyond the structural one in `types_cmp`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind<B: TypeBuilder> {
    /// Primitive descriptors (void, bool, char, int, ...)
    Scalar(Scalar),

    /// Opaque user-defined descriptor, identified by name only.
    Named(B::InternedStr),

    /// Pointer to the element descriptor.
    Pointer(B::TypeView),

    /// Reference to the element descriptor.
    Reference(B::TypeView),

    /// Grouping descriptor: `elem` repeated `count` times.
    ///
    /// Produced by consolidation with `count >= 2`. Every other operation
    /// treats it as just another opaque descriptor.
    Group { elem: B::TypeView, count: usize },

    /// Ordered, fixed-length sequence of descriptors.
    Sequence(B::InternedTypes),
}

impl<B: TypeBuilder> TypeKind<B> {
    /// Compute type flags for this kind.
    ///
    /// Called by the builder during interning to build the `TyData`.
    pub fn compute_flags(&self, builder: B) -> TypeFlags {
        match self {
            TypeKind::Scalar(_) | TypeKind::Named(_) => TypeFlags::empty(),

            TypeKind::Pointer(elem) | TypeKind::Reference(elem) => {
                TypeFlags::HAS_INDIRECTION | elem.data(builder).flags
            }

            TypeKind::Group { elem, .. } => TypeFlags::HAS_GROUP | elem.data(builder).flags,

            TypeKind::Sequence(types) => {
                let mut flags = TypeFlags::HAS_SEQUENCE;
                for elem in builder.types_data(types) {
                    flags |= elem.data(builder).flags;
                }
                flags
            }
        }
    }

    /// Intern this kind into a `Ty` handle.
    pub fn intern(self, builder: B) -> Ty<B> {
        Ty::new(builder.intern_ty(self))
    }
}

/// Handle to an interned descriptor.
///
/// A lightweight wrapper around the builder's representation. It can be
/// cloned freely and used to retrieve the full descriptor data.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ty<B: TypeBuilder> {
    interned: B::InternedTy,
}

// Copy when InternedTy is Copy (e.g., for ArenaBuilder)
impl<B: TypeBuilder> Copy for Ty<B> where B::InternedTy: Copy {}

impl<B: TypeBuilder> Ty<B> {
    /// Create a new descriptor from an interned handle.
    pub fn new(interned: B::InternedTy) -> Self {
        Self { interned }
    }

    /// Get the interned representation (for internal use).
    pub fn interned(&self) -> &B::InternedTy {
        &self.interned
    }

    /// Get the full descriptor data (kind + flags).
    pub fn data(&self, builder: B) -> &TyData<B> {
        builder.ty_data(&self.interned)
    }

    /// Get the descriptor kind.
    pub fn kind(&self, builder: B) -> &TypeKind<B> {
        &self.data(builder).kind
    }

    /// Check if this is a sequence.
    pub fn is_sequence(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Sequence(_))
    }

    /// Check if this is a grouping descriptor.
    pub fn is_group(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Group { .. })
    }

    /// Check if this is `void`.
    pub fn is_void(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Scalar(Scalar::Void))
    }

    /// Check if this is `int`.
    pub fn is_int(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Scalar(Scalar::Int))
    }

    /// Check if this is `bool`.
    pub fn is_bool(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Scalar(Scalar::Bool))
    }

    /// Check if this is `double`.
    pub fn is_double(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Scalar(Scalar::Double))
    }

    /// Whether a grouping descriptor occurs anywhere inside.
    pub fn has_group(&self, builder: B) -> bool {
        self.data(builder).flags.contains(TypeFlags::HAS_GROUP)
    }

    /// Whether a sequence occurs anywhere inside (including self).
    pub fn has_sequence(&self, builder: B) -> bool {
        self.data(builder).flags.contains(TypeFlags::HAS_SEQUENCE)
    }
}

impl<B: TypeBuilder> fmt::Debug for Ty<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ty({:?})", self.interned)
    }
}

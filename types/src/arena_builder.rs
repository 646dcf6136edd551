use crate::ir::{TyData, TypeBuilder, TypeKind};
use alloc::vec::Vec;
use bumpalo::Bump;

/// Builder that uses arena allocation.
///
/// Descriptors are allocated in a `Bump` arena and handles are plain
/// references, so `Ty<ArenaBuilder>` is `Copy`. Nothing is deduplicated;
/// equality is structural either way.
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
/// let grouped = builder.group(int_ty, 3);
/// assert!(grouped.is_group(builder));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ArenaBuilder<'arena> {
    arena: &'arena Bump,
}

// Bump doesn't implement PartialEq/Eq/Hash: two builders are equal if they
// point to the same arena
impl<'arena> PartialEq for ArenaBuilder<'arena> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.arena, other.arena)
    }
}

impl<'arena> Eq for ArenaBuilder<'arena> {}

impl<'arena> core::hash::Hash for ArenaBuilder<'arena> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        core::ptr::hash(self.arena, state)
    }
}

impl<'arena> ArenaBuilder<'arena> {
    /// Create a new arena builder.
    pub fn new(arena: &'arena Bump) -> Self {
        Self { arena }
    }
}

impl<'arena> TypeBuilder for ArenaBuilder<'arena> {
    type TypeView = crate::Ty<Self>;
    type InternedTy = &'arena TyData<Self>;
    type InternedStr = &'arena str;
    type InternedTypes = &'arena [crate::Ty<Self>];

    fn intern_ty(self, kind: TypeKind<Self>) -> Self::InternedTy {
        let flags = kind.compute_flags(self);
        self.arena.alloc(TyData { kind, flags })
    }

    fn ty_data(self, ty: &Self::InternedTy) -> &TyData<Self> {
        ty
    }

    fn intern_str(self, s: impl AsRef<str>) -> Self::InternedStr {
        self.arena.alloc_str(s.as_ref())
    }

    fn intern_types<E>(self, data: impl IntoIterator<Item = E>) -> Self::InternedTypes
    where
        E: Into<crate::Ty<Self>>,
    {
        let types: Vec<_> = data.into_iter().map(|e| e.into()).collect();
        self.arena.alloc_slice_copy(&types)
    }

    fn types_data(self, types: &Self::InternedTypes) -> &[crate::Ty<Self>] {
        types
    }
}

use crate::ir::{TyData, TypeBuilder, TypeKind};
use alloc::rc::Rc;
use alloc::vec::Vec;

/// Builder that uses reference counting (no deduplication).
///
/// Descriptors are allocated with `Rc` and no interning is performed.
/// Useful for tests and for short-lived registration passes where an arena
/// would outlive its usefulness.
///
/// Flags are computed during interning and stored next to the kind.
///
/// # Example
///
/// ```
/// use tyseq_types::{TypeBuilder, BoxBuilder};
///
/// let builder = BoxBuilder::new();
/// let seq = builder.sequence([builder.int(), builder.pointer(builder.char())]);
/// assert!(seq.is_sequence(builder));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoxBuilder;

impl BoxBuilder {
    /// Create a new box builder.
    pub fn new() -> Self {
        Self
    }
}

impl TypeBuilder for BoxBuilder {
    type TypeView = crate::Ty<Self>;
    type InternedTy = Rc<TyData<Self>>;
    type InternedStr = Rc<str>;
    type InternedTypes = Rc<[crate::Ty<Self>]>;

    fn intern_ty(self, kind: TypeKind<Self>) -> Self::InternedTy {
        let flags = kind.compute_flags(self);
        Rc::new(TyData { kind, flags })
    }

    fn ty_data(self, ty: &Self::InternedTy) -> &TyData<Self> {
        ty
    }

    fn intern_str(self, s: impl AsRef<str>) -> Self::InternedStr {
        Rc::from(s.as_ref())
    }

    fn intern_types<E>(self, data: impl IntoIterator<Item = E>) -> Self::InternedTypes
    where
        E: Into<crate::Ty<Self>>,
    {
        let types: Vec<_> = data.into_iter().map(|e| e.into()).collect();
        types.into()
    }

    fn types_data(self, types: &Self::InternedTypes) -> &[crate::Ty<Self>] {
        types
    }
}

use super::Algebra;
use crate::error::Result;
use tracing::trace;
use tyseq_types::{TypeBuilder, TypeFolder, TypeKind, TypeView};

/// A unary rewrite of one descriptor.
///
/// Implemented by the unit transforms in this module, by [`Compose`], and by
/// any `FnMut(B::TypeView, B) -> B::TypeView` closure.
pub trait Transform<B: TypeBuilder> {
    fn apply(&mut self, ty: B::TypeView, builder: B) -> B::TypeView;
}

impl<B, F> Transform<B> for F
where
    B: TypeBuilder,
    F: FnMut(B::TypeView, B) -> B::TypeView,
{
    fn apply(&mut self, ty: B::TypeView, builder: B) -> B::TypeView {
        self(ty, builder)
    }
}

/// Leaves the descriptor unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<B: TypeBuilder> Transform<B> for Identity {
    fn apply(&mut self, ty: B::TypeView, _builder: B) -> B::TypeView {
        ty
    }
}

/// `T*`, dropping one existing pointer level first, so `int*` stays `int*`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToPointer;

impl<B: TypeBuilder> Transform<B> for ToPointer {
    fn apply(&mut self, ty: B::TypeView, builder: B) -> B::TypeView {
        let pointee = match ty.view(builder) {
            TypeKind::Pointer(elem) => elem.clone(),
            _ => ty,
        };
        builder.pointer(pointee)
    }
}

/// `T&`, dropping an existing reference first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToReference;

impl<B: TypeBuilder> Transform<B> for ToReference {
    fn apply(&mut self, ty: B::TypeView, builder: B) -> B::TypeView {
        let referent = match ty.view(builder) {
            TypeKind::Reference(elem) => elem.clone(),
            _ => ty,
        };
        builder.reference(referent)
    }
}

/// `outer(inner(T))`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Compose<F, G> {
    pub outer: F,
    pub inner: G,
}

impl<F, G> Compose<F, G> {
    pub fn new(outer: F, inner: G) -> Self {
        Self { outer, inner }
    }
}

impl<B: TypeBuilder, F: Transform<B>, G: Transform<B>> Transform<B> for Compose<F, G> {
    fn apply(&mut self, ty: B::TypeView, builder: B) -> B::TypeView {
        let ty = self.inner.apply(ty, builder);
        self.outer.apply(ty, builder)
    }
}

/// Compose transforms with the right-most applied first.
///
/// `wrap_all!(X, Y, Z)` applies as `X(Y(Z(T)))`; `wrap_all!()` is
/// [`Identity`].
///
/// ```
/// use tyseq_core::{wrap_all, Algebra, ToPointer, ToReference};
/// use tyseq_types::{BoxBuilder, TyDisplay, TypeBuilder};
///
/// let b = BoxBuilder::new();
/// let algebra = Algebra::new(b);
/// let seq = b.sequence([b.int(), b.reference(b.char())]);
///
/// let mapped = algebra.map(wrap_all!(ToReference, ToPointer), &seq).unwrap();
/// assert_eq!(mapped.display(b), "(int*&, char&*&)");
/// ```
#[macro_export]
macro_rules! wrap_all {
    () => {
        $crate::Identity
    };
    ($only:expr $(,)?) => {
        $only
    };
    ($outer:expr, $($rest:expr),+ $(,)?) => {
        $crate::Compose::new($outer, $crate::wrap_all!($($rest),+))
    };
}

impl<B: TypeBuilder> Algebra<B> {
    /// Apply `transform` to every element, preserving length and order.
    pub fn map<T: Transform<B>>(
        &self,
        mut transform: T,
        seq: &B::TypeView,
    ) -> Result<B::TypeView> {
        let elems = self.elements(seq)?;
        trace!(len = elems.len(), "map");
        let mapped = elems
            .iter()
            .map(|elem| transform.apply(elem.clone(), self.builder));
        Ok(self.make(mapped))
    }

    /// Like [`map`](Self::map), but each element is rewritten by a
    /// `TypeFolder`, which reaches nested descriptors too.
    pub fn map_deep<F: TypeFolder<B>>(
        &self,
        folder: &mut F,
        seq: &B::TypeView,
    ) -> Result<B::TypeView> {
        let elems = self.elements(seq)?;
        trace!(len = elems.len(), "map_deep");
        Ok(self.make(elems.iter().map(|elem| folder.fold_ty(elem.clone()))))
    }

    /// `n` copies of `ty`. `n == 0` is the empty sequence.
    pub fn repeat(&self, ty: &B::TypeView, n: usize) -> Result<B::TypeView> {
        self.check_len(n)?;
        Ok(self.builder.sequence(core::iter::repeat_n(ty.clone(), n)))
    }
}

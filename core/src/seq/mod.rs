//! The algebra over interned descriptor sequences.
//!
//! A sequence is a descriptor of kind `TypeKind::Sequence`. Every operation
//! is a method on [`Algebra`], which pairs a `TypeBuilder` with the
//! [`AlgebraOptions`] that bound it. Operations never mutate their inputs;
//! each result is a freshly interned descriptor.
//!
//! Operations are grouped by concern:
//!
//! - `normalize` / `join`: building sequences from argument lists
//! - `access`: element lookup
//! - `count`: membership counting and count-and-remove
//! - `split`: split and subsequence
//! - `consolidate`: grouping repeated descriptors
//! - `homogeneous`: equality across a whole sequence
//! - `select`: first-match conditional selection
//! - `transform`: element-wise mapping and repetition

mod access;
mod consolidate;
mod count;
mod homogeneous;
mod join;
mod normalize;
mod select;
mod split;
mod transform;

pub use count::Removal;
pub use select::{Case, Selection};
pub use split::Split;
pub use transform::{Compose, Identity, ToPointer, ToReference, Transform};

use crate::error::{Result, SeqError};
use crate::options::AlgebraOptions;
use smallvec::SmallVec;
use tracing::warn;
use tyseq_types::{TypeBuilder, TypeFormatter, TypeView};

/// Scratch buffer for building results before they are interned.
pub(crate) type Elems<B> = SmallVec<[<B as TypeBuilder>::TypeView; 8]>;

/// Evaluates sequence operations against one builder.
///
/// # Example
///
/// ```
/// use tyseq_core::Algebra;
/// use tyseq_types::{BoxBuilder, TyDisplay, TypeBuilder};
///
/// let b = BoxBuilder::new();
/// let algebra = Algebra::new(b);
///
/// let joined = algebra
///     .join(&[b.sequence([b.int(), b.char()]), b.sequence([b.double()]), b.bool()])
///     .unwrap();
/// assert_eq!(joined.display(b), "(int, char, double, bool)");
/// ```
#[derive(Debug, Clone)]
pub struct Algebra<B: TypeBuilder> {
    builder: B,
    options: AlgebraOptions,
}

impl<B: TypeBuilder> Algebra<B> {
    /// Create an algebra with default options.
    pub fn new(builder: B) -> Self {
        Self::with_options(builder, AlgebraOptions::default())
    }

    /// Create an algebra with explicit options.
    pub fn with_options(builder: B, options: AlgebraOptions) -> Self {
        Self { builder, options }
    }

    /// The builder results are interned with.
    pub fn builder(&self) -> B {
        self.builder
    }

    pub fn options(&self) -> &AlgebraOptions {
        &self.options
    }

    /// Number of elements in `seq`.
    pub fn len(&self, seq: &B::TypeView) -> Result<usize> {
        self.elements(seq).map(<[_]>::len)
    }

    /// The elements of `seq`, or `NotASequence` for a bare descriptor.
    pub fn elements<'s>(&self, seq: &'s B::TypeView) -> Result<&'s [B::TypeView]>
    where
        B: 's,
    {
        seq.elements(self.builder)
            .ok_or_else(|| SeqError::NotASequence {
                found: TypeFormatter::format(seq.clone(), self.builder),
            })
    }

    /// Intern `elems` as a sequence.
    pub(crate) fn make(&self, elems: impl IntoIterator<Item = B::TypeView>) -> B::TypeView {
        self.builder.sequence(elems)
    }

    /// Intern `elems` as a sequence, enforcing `max_len`.
    pub(crate) fn make_bounded(
        &self,
        elems: impl IntoIterator<Item = B::TypeView>,
    ) -> Result<B::TypeView> {
        let elems: Elems<B> = elems.into_iter().collect();
        self.check_len(elems.len())?;
        Ok(self.builder.sequence(elems))
    }

    pub(crate) fn check_len(&self, len: usize) -> Result<()> {
        let max = self.options.max_len;
        if len > max {
            warn!(len, max, "sequence length limit exceeded");
            return Err(SeqError::LengthLimit { len, max });
        }
        Ok(())
    }

    pub(crate) fn is_sequence(&self, ty: &B::TypeView) -> bool {
        ty.elements(self.builder).is_some()
    }
}

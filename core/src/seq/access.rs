use super::Algebra;
use crate::error::{Result, SeqError};
use tyseq_types::TypeBuilder;

impl<B: TypeBuilder> Algebra<B> {
    /// The element at `index`; index 0 is the first element.
    ///
    /// Fails with `IndexOutOfRange` when `index >= len`.
    pub fn type_at(&self, index: usize, seq: &B::TypeView) -> Result<B::TypeView> {
        let elems = self.elements(seq)?;
        elems
            .get(index)
            .cloned()
            .ok_or(SeqError::IndexOutOfRange {
                index,
                len: elems.len(),
            })
    }

    /// The first element, or `Empty` on an empty sequence.
    pub fn first(&self, seq: &B::TypeView) -> Result<B::TypeView> {
        self.elements(seq)?.first().cloned().ok_or(SeqError::Empty)
    }
}

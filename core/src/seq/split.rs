use super::Algebra;
use crate::error::{Result, SeqError};
use tracing::trace;
use tyseq_types::TypeBuilder;

/// The two halves produced by [`Algebra::split`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<B: TypeBuilder> {
    /// Elements `[0, index)`.
    pub before: B::TypeView,
    /// Elements `[index, len)`.
    pub after: B::TypeView,
}

impl<B: TypeBuilder> Algebra<B> {
    /// Split `seq` at `index`; `0 <= index <= len`.
    ///
    /// `join(before, after)` reproduces the input.
    pub fn split(&self, index: usize, seq: &B::TypeView) -> Result<Split<B>> {
        let elems = self.elements(seq)?;
        if index > elems.len() {
            return Err(SeqError::SplitOutOfRange {
                index,
                len: elems.len(),
            });
        }
        trace!(index, len = elems.len(), "split");

        let (before, after) = elems.split_at(index);
        Ok(Split {
            before: self.make(before.iter().cloned()),
            after: self.make(after.iter().cloned()),
        })
    }

    /// Elements `[start, end)` of `seq`.
    ///
    /// Requires `start <= end <= len`; `start == end` yields the empty sequence.
    pub fn subsequence(&self, start: usize, end: usize, seq: &B::TypeView) -> Result<B::TypeView> {
        let elems = self.elements(seq)?;
        if start > end || end > elems.len() {
            return Err(SeqError::InvalidRange {
                start,
                end,
                len: elems.len(),
            });
        }
        Ok(self.make(elems[start..end].iter().cloned()))
    }
}

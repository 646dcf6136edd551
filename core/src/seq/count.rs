use super::{Algebra, Elems};
use crate::error::Result;
use tracing::trace;
use tyseq_types::TypeBuilder;

/// Result of [`Algebra::count_and_remove`].
///
/// `count == len(input) - len(remainder)` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal<B: TypeBuilder> {
    /// Number of elements equal to the target.
    pub count: usize,
    /// The input without those elements, relative order preserved.
    pub remainder: B::TypeView,
}

/// Single pass partitioning `elems` into matches (counted) and the rest.
pub(crate) fn partition_out<B: TypeBuilder>(
    target: &B::TypeView,
    elems: &[B::TypeView],
) -> (usize, Elems<B>) {
    let mut kept = Elems::<B>::new();
    let mut count = 0;
    for elem in elems {
        if elem == target {
            count += 1;
        } else {
            kept.push(elem.clone());
        }
    }
    (count, kept)
}

impl<B: TypeBuilder> Algebra<B> {
    /// Number of elements identical to `target`.
    pub fn count(&self, target: &B::TypeView, seq: &B::TypeView) -> Result<usize> {
        let elems = self.elements(seq)?;
        Ok(elems.iter().filter(|elem| *elem == target).count())
    }

    /// Count the elements identical to `target` and drop them.
    pub fn count_and_remove(&self, target: &B::TypeView, seq: &B::TypeView) -> Result<Removal<B>> {
        let elems = self.elements(seq)?;
        let (count, kept) = partition_out::<B>(target, elems);
        trace!(len = elems.len(), count, "count_and_remove");
        Ok(Removal {
            count,
            remainder: self.make(kept),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::Algebra;
    use pretty_assertions::assert_eq;
    use tyseq_types::{BoxBuilder, TyDisplay, TypeBuilder};

    #[test]
    fn test_count() {
        let b = BoxBuilder::new();
        let algebra = Algebra::new(b);
        let seq = b.sequence([b.int(), b.char(), b.int(), b.int(), b.double()]);

        assert_eq!(algebra.count(&b.int(), &seq).unwrap(), 3);
        assert_eq!(algebra.count(&b.bool(), &seq).unwrap(), 0);
        assert_eq!(algebra.count(&b.int(), &b.empty_sequence()).unwrap(), 0);
    }

    #[test]
    fn test_count_is_exact_identity() {
        let b = BoxBuilder::new();
        let algebra = Algebra::new(b);
        let seq = b.sequence([b.pointer(b.int()), b.reference(b.int()), b.group(b.int(), 2)]);

        assert_eq!(algebra.count(&b.int(), &seq).unwrap(), 0);
        assert_eq!(algebra.count(&b.pointer(b.int()), &seq).unwrap(), 1);
    }

    #[test]
    fn test_count_and_remove() {
        let b = BoxBuilder::new();
        let algebra = Algebra::new(b);
        let seq = b.sequence([b.int(), b.char(), b.int(), b.int(), b.double()]);

        let removal = algebra.count_and_remove(&b.int(), &seq).unwrap();
        assert_eq!(removal.count, 3);
        assert_eq!(removal.remainder.display(b), "(char, double)");
    }

    #[test]
    fn test_count_and_remove_no_match_keeps_everything() {
        let b = BoxBuilder::new();
        let algebra = Algebra::new(b);
        let seq = b.sequence([b.char(), b.double()]);

        let removal = algebra.count_and_remove(&b.int(), &seq).unwrap();
        assert_eq!(removal.count, 0);
        assert_eq!(removal.remainder, seq);
    }
}

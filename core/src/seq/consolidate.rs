use super::count::partition_out;
use super::{Algebra, Elems};
use crate::error::Result;
use tracing::{debug, trace};
use tyseq_types::{TypeBuilder, TypeKind, TypeView};

impl<B: TypeBuilder> Algebra<B> {
    /// Replace repeated descriptors with grouping descriptors.
    ///
    /// Walks left to right. The first occurrence of each descriptor absorbs
    /// every later occurrence and becomes `[T; k]` once the total count `k`
    /// reaches `group_threshold`. Otherwise the head is kept as is and the
    /// walk resumes on the tail.
    ///
    /// Groups already present are opaque, so consolidating twice changes
    /// nothing.
    pub fn consolidate(&self, seq: &B::TypeView) -> Result<B::TypeView> {
        let elems = self.elements(seq)?;
        let threshold = self.options.effective_group_threshold();

        let mut rest: Elems<B> = elems.iter().cloned().collect();
        let mut out = Elems::<B>::new();
        while !rest.is_empty() {
            let head = rest.remove(0);
            let (later, remainder) = partition_out::<B>(&head, &rest);
            let total = later + 1;
            if total >= threshold {
                debug!(count = total, "consolidated repeated descriptor");
                out.push(self.builder.group(head, total));
                rest = remainder;
            } else {
                out.push(head);
            }
        }

        trace!(input = elems.len(), output = out.len(), "consolidate");
        Ok(self.make(out))
    }

    /// `(elem, count)` of a grouping descriptor, `None` for anything else.
    pub fn unwrap_group(&self, ty: &B::TypeView) -> Option<(B::TypeView, usize)> {
        match ty.view(self.builder) {
            TypeKind::Group { elem, count } => Some((elem.clone(), *count)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Algebra, AlgebraOptions};
    use pretty_assertions::assert_eq;
    use tyseq_types::{BoxBuilder, TyDisplay, TypeBuilder};

    #[test]
    fn test_consolidate_groups_first_occurrence() {
        crate::test_utils::init_test_logging();

        let b = BoxBuilder::new();
        let algebra = Algebra::new(b);
        let seq = b.sequence([b.int(), b.int(), b.char(), b.int()]);

        let consolidated = algebra.consolidate(&seq).unwrap();
        assert_eq!(consolidated.display(b), "([int; 3], char)");
    }

    #[test]
    fn test_consolidate_is_idempotent() {
        let b = BoxBuilder::new();
        let algebra = Algebra::new(b);
        let seq = b.sequence([b.char(), b.double(), b.char(), b.bool(), b.double()]);

        let once = algebra.consolidate(&seq).unwrap();
        assert_eq!(once.display(b), "([char; 2], [double; 2], bool)");
        assert_eq!(algebra.consolidate(&once).unwrap(), once);
    }

    #[test]
    fn test_consolidate_without_repeats() {
        let b = BoxBuilder::new();
        let algebra = Algebra::new(b);

        let seq = b.sequence([b.int(), b.char(), b.pointer(b.int())]);
        assert_eq!(algebra.consolidate(&seq).unwrap(), seq);
        assert_eq!(
            algebra.consolidate(&b.empty_sequence()).unwrap(),
            b.empty_sequence()
        );
    }

    #[test]
    fn test_consolidate_respects_threshold() {
        let b = BoxBuilder::new();
        let options = AlgebraOptions::default().with_group_threshold(3);
        let algebra = Algebra::with_options(b, options);
        let seq = b.sequence([b.int(), b.char(), b.int(), b.char(), b.char()]);

        let consolidated = algebra.consolidate(&seq).unwrap();
        assert_eq!(consolidated.display(b), "(int, [char; 3], int)");
    }

    #[test]
    fn test_threshold_below_two_is_clamped() {
        let b = BoxBuilder::new();
        let options = AlgebraOptions::default().with_group_threshold(0);
        let algebra = Algebra::with_options(b, options);
        let seq = b.sequence([b.int(), b.char()]);

        assert_eq!(algebra.consolidate(&seq).unwrap(), seq);
    }

    #[test]
    fn test_unwrap_group() {
        let b = BoxBuilder::new();
        let algebra = Algebra::new(b);

        assert_eq!(
            algebra.unwrap_group(&b.group(b.named("Point"), 4)),
            Some((b.named("Point"), 4))
        );
        assert_eq!(algebra.unwrap_group(&b.int()), None);
    }
}

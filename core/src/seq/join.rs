use super::{Algebra, Elems};
use crate::error::Result;
use tracing::trace;
use tyseq_types::{TypeBuilder, TypeView};

impl<B: TypeBuilder> Algebra<B> {
    /// Concatenate items into one sequence.
    ///
    /// Each item that is a sequence contributes its elements in order; a
    /// bare descriptor contributes itself. Only the top level is unwrapped:
    /// a sequence nested inside an item stays a single element.
    pub fn join(&self, items: &[B::TypeView]) -> Result<B::TypeView> {
        let mut out = Elems::<B>::new();
        for item in items {
            match item.elements(self.builder) {
                Some(elems) => out.extend(elems.iter().cloned()),
                None => out.push(item.clone()),
            }
        }
        trace!(items = items.len(), len = out.len(), "join");
        self.make_bounded(out)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Algebra, AlgebraOptions, SeqError};
    use pretty_assertions::assert_eq;
    use tyseq_types::{BoxBuilder, TyDisplay, TypeBuilder};

    #[test]
    fn test_join_mixed_items() {
        let b = BoxBuilder::new();
        let algebra = Algebra::new(b);

        let joined = algebra
            .join(&[
                b.sequence([b.int(), b.char()]),
                b.sequence([b.double()]),
                b.bool(),
            ])
            .unwrap();
        assert_eq!(joined.display(b), "(int, char, double, bool)");
    }

    #[test]
    fn test_join_nothing_is_empty() {
        let b = BoxBuilder::new();
        let algebra = Algebra::new(b);

        assert_eq!(algebra.join(&[]).unwrap(), b.empty_sequence());
        assert_eq!(
            algebra.join(&[b.empty_sequence(), b.empty_sequence()]).unwrap(),
            b.empty_sequence()
        );
    }

    #[test]
    fn test_join_flattens_one_level_only() {
        let b = BoxBuilder::new();
        let algebra = Algebra::new(b);

        let nested = b.sequence([b.sequence([b.int(), b.char()]), b.bool()]);
        let joined = algebra.join(&[nested, b.long()]).unwrap();
        assert_eq!(joined.display(b), "((int, char), bool, long)");
    }

    #[test]
    fn test_join_respects_length_limit() {
        let b = BoxBuilder::new();
        let algebra = Algebra::with_options(b, AlgebraOptions::default().with_max_len(3));

        let pair = b.sequence([b.int(), b.int()]);
        assert_eq!(
            algebra.join(&[pair.clone(), pair]),
            Err(SeqError::LengthLimit { len: 4, max: 3 })
        );
    }
}

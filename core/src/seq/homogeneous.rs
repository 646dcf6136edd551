use super::Algebra;
use crate::error::Result;
use alloc::vec::Vec;
use tyseq_types::TypeBuilder;

impl<B: TypeBuilder> Algebra<B> {
    /// Whether every element equals the first. Empty and singleton
    /// sequences are homogeneous.
    pub fn is_homogeneous(&self, seq: &B::TypeView) -> Result<bool> {
        let elems = self.elements(seq)?;
        Ok(elems.windows(2).all(|pair| pair[0] == pair[1]))
    }

    /// Whether every element equals `ty`. Vacuously true when empty.
    pub fn all_same_as(&self, seq: &B::TypeView, ty: &B::TypeView) -> Result<bool> {
        Ok(self.elements(seq)?.iter().all(|elem| elem == ty))
    }

    /// For a sequence of sequences: either every inner sequence is empty, or
    /// every inner sequence is non-empty and all inner elements are equal.
    ///
    /// An outer element that is not a sequence makes the answer `false`.
    pub fn inner_elements_one_type(&self, seq: &B::TypeView) -> Result<bool> {
        let outer = self.elements(seq)?;

        let mut inners = Vec::with_capacity(outer.len());
        for elem in outer {
            match self.elements(elem) {
                Ok(inner) => inners.push(inner),
                Err(_) => return Ok(false),
            }
        }

        if inners.iter().all(|inner| inner.is_empty()) {
            return Ok(true);
        }
        if inners.iter().any(|inner| inner.is_empty()) {
            return Ok(false);
        }

        let first = &inners[0][0];
        Ok(inners.iter().flat_map(|inner| inner.iter()).all(|elem| elem == first))
    }
}

#[cfg(test)]
mod tests {
    use crate::Algebra;
    use tyseq_types::{BoxBuilder, TypeBuilder};

    #[test]
    fn test_is_homogeneous() {
        let b = BoxBuilder::new();
        let algebra = Algebra::new(b);

        assert!(algebra.is_homogeneous(&b.empty_sequence()).unwrap());
        assert!(algebra.is_homogeneous(&b.sequence([b.int()])).unwrap());
        assert!(
            algebra
                .is_homogeneous(&b.sequence([b.int(), b.int(), b.int()]))
                .unwrap()
        );
        assert!(
            !algebra
                .is_homogeneous(&b.sequence([b.int(), b.char()]))
                .unwrap()
        );
        assert!(
            !algebra
                .is_homogeneous(&b.sequence([b.int(), b.int(), b.pointer(b.int())]))
                .unwrap()
        );
    }

    #[test]
    fn test_all_same_as() {
        let b = BoxBuilder::new();
        let algebra = Algebra::new(b);

        let seq = b.sequence([b.double(), b.double()]);
        assert!(algebra.all_same_as(&seq, &b.double()).unwrap());
        assert!(!algebra.all_same_as(&seq, &b.float()).unwrap());
        assert!(algebra.all_same_as(&b.empty_sequence(), &b.float()).unwrap());
    }

    #[test]
    fn test_inner_elements_one_type() {
        let b = BoxBuilder::new();
        let algebra = Algebra::new(b);

        let uniform = b.sequence([
            b.sequence([b.int(), b.int()]),
            b.sequence([b.int()]),
        ]);
        assert!(algebra.inner_elements_one_type(&uniform).unwrap());

        let all_empty = b.sequence([b.empty_sequence(), b.empty_sequence()]);
        assert!(algebra.inner_elements_one_type(&all_empty).unwrap());
        assert!(algebra.inner_elements_one_type(&b.empty_sequence()).unwrap());

        let mixed = b.sequence([b.sequence([b.int()]), b.sequence([b.char()])]);
        assert!(!algebra.inner_elements_one_type(&mixed).unwrap());

        let partly_empty = b.sequence([b.sequence([b.int()]), b.empty_sequence()]);
        assert!(!algebra.inner_elements_one_type(&partly_empty).unwrap());

        let not_nested = b.sequence([b.int(), b.sequence([b.int()])]);
        assert!(!algebra.inner_elements_one_type(&not_nested).unwrap());
    }
}

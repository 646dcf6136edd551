use super::Algebra;
use tracing::trace;
use tyseq_types::TypeBuilder;

/// One `(condition, descriptor)` pair for [`Algebra::select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case<B: TypeBuilder> {
    pub condition: bool,
    pub ty: B::TypeView,
}

impl<B: TypeBuilder> Case<B> {
    pub fn new(condition: bool, ty: B::TypeView) -> Self {
        Self { condition, ty }
    }
}

/// Outcome of [`Algebra::select`].
///
/// When nothing matched, `ty` is the `void` scalar and `matched` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<B: TypeBuilder> {
    pub ty: B::TypeView,
    pub matched: bool,
}

impl<B: TypeBuilder> Algebra<B> {
    /// The descriptor of the first case whose condition holds.
    ///
    /// Later true cases are ignored. With no true case the result is
    /// `void` with `matched == false`.
    pub fn select(&self, cases: &[Case<B>]) -> Selection<B> {
        match cases.iter().position(|case| case.condition) {
            Some(index) => {
                trace!(index, cases = cases.len(), "select matched");
                Selection {
                    ty: cases[index].ty.clone(),
                    matched: true,
                }
            }
            None => Selection {
                ty: self.builder.void(),
                matched: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Algebra, Case};
    use pretty_assertions::assert_eq;
    use tyseq_types::{BoxBuilder, TypeBuilder};

    #[test]
    fn test_first_true_wins() {
        let b = BoxBuilder::new();
        let algebra = Algebra::new(b);

        let selection = algebra.select(&[
            Case::new(false, b.int()),
            Case::new(false, b.char()),
            Case::new(true, b.double()),
            Case::new(true, b.bool()),
        ]);
        assert!(selection.matched);
        assert_eq!(selection.ty, b.double());
    }

    #[test]
    fn test_no_match_yields_void() {
        let b = BoxBuilder::new();
        let algebra = Algebra::new(b);

        let selection = algebra.select(&[Case::new(false, b.int())]);
        assert!(!selection.matched);
        assert!(selection.ty.is_void(b));

        let empty = algebra.select(&[]);
        assert!(!empty.matched);
        assert_eq!(empty.ty, b.void());
    }
}

use super::Algebra;
use crate::error::Result;
use tracing::trace;
use tyseq_types::TypeBuilder;

impl<B: TypeBuilder> Algebra<B> {
    /// Coerce an argument list into a sequence.
    ///
    /// A single argument that is already a sequence is returned unchanged;
    /// anything else is wrapped as given. Sequence arguments are never
    /// flattened; see [`join`](Self::join).
    pub fn normalize(&self, args: &[B::TypeView]) -> Result<B::TypeView> {
        trace!(args = args.len(), "normalize");
        match args {
            [single] if self.is_sequence(single) => Ok(single.clone()),
            _ => self.make_bounded(args.iter().cloned()),
        }
    }

    /// True iff exactly one argument is supplied and it is a sequence.
    pub fn is_single_sequence(&self, args: &[B::TypeView]) -> bool {
        matches!(args, [single] if self.is_sequence(single))
    }
}

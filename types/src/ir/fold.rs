use super::{TypeBuilder, TypeKind};
use crate::TypeView;
use alloc::vec::Vec;

/// Trait for rebuilding descriptors.
///
/// Implement this trait to create new descriptors based on existing ones.
/// The default implementation handles recursion automatically, so an
/// override only needs to handle the nodes it cares about.
///
/// # Example
///
/// ```
/// use tyseq_types::{BoxBuilder, Scalar, TypeBuilder, TypeFolder, TypeKind, TypeView};
///
/// // Replace every int with long
/// struct Widen {
///     builder: BoxBuilder,
/// }
///
/// impl TypeFolder<BoxBuilder> for Widen {
///     fn builder(&self) -> BoxBuilder {
///         self.builder
///     }
///
///     fn fold_ty(&mut self, ty: tyseq_types::Ty<BoxBuilder>) -> tyseq_types::Ty<BoxBuilder> {
///         match ty.view(self.builder) {
///             TypeKind::Scalar(Scalar::Int) => self.builder.long(),
///             _ => self.super_fold_ty(ty),
///         }
///     }
/// }
///
/// let builder = BoxBuilder::new();
/// let ptr_int = builder.pointer(builder.int());
///
/// let result = Widen { builder }.fold_ty(ptr_int);
/// assert_eq!(result, builder.pointer(builder.long()));
/// ```
pub trait TypeFolder<B: TypeBuilder> {
    /// Get the builder for creating new descriptors.
    fn builder(&self) -> B;

    /// Transform a descriptor.
    ///
    /// Override this to customize behavior for all descriptors.
    /// Call `super_fold_ty` to recurse into nested descriptors.
    fn fold_ty(&mut self, ty: B::TypeView) -> B::TypeView {
        self.super_fold_ty(ty)
    }

    /// Default recursion into nested descriptors.
    ///
    /// Override `fold_ty` instead of this method.
    fn super_fold_ty(&mut self, ty: B::TypeView) -> B::TypeView {
        let builder = self.builder();

        match ty.view(builder) {
            // Leaves are returned as-is
            TypeKind::Scalar(_) | TypeKind::Named(_) => ty.clone(),

            TypeKind::Pointer(elem) => {
                let elem = elem.clone();
                let new_elem = self.fold_ty(elem);
                builder.pointer(new_elem)
            }

            TypeKind::Reference(elem) => {
                let elem = elem.clone();
                let new_elem = self.fold_ty(elem);
                builder.reference(new_elem)
            }

            TypeKind::Group { elem, count } => {
                let (elem, count) = (elem.clone(), *count);
                let new_elem = self.fold_ty(elem);
                builder.group(new_elem, count)
            }

            TypeKind::Sequence(types) => {
                // Own the elements before folding, the folder needs &mut self
                let elems: Vec<B::TypeView> = builder.types_data(types).to_vec();
                let folded: Vec<B::TypeView> =
                    elems.into_iter().map(|elem| self.fold_ty(elem)).collect();
                builder.sequence(folded)
            }
        }
    }
}

use super::{TypeBuilder, TypeKind};
use crate::TypeView;

/// Trait for visiting descriptors.
///
/// Implement this trait to traverse descriptors without rebuilding them.
/// The default implementation handles recursion automatically.
///
/// # Example
///
/// ```
/// use tyseq_types::{TypeBuilder, TypeVisitor, BoxBuilder};
///
/// struct DepthCalculator {
///     max_depth: usize,
///     current_depth: usize,
/// }
///
/// impl<B: TypeBuilder> TypeVisitor<B> for DepthCalculator {
///     fn visit_ty(&mut self, ty: B::TypeView, builder: B) {
///         self.current_depth += 1;
///         self.max_depth = self.max_depth.max(self.current_depth);
///
///         self.super_visit_ty(ty, builder);
///
///         self.current_depth -= 1;
///     }
/// }
///
/// let builder = BoxBuilder::new();
/// let nested = builder.sequence([builder.pointer(builder.int())]);
///
/// let mut calc = DepthCalculator { max_depth: 0, current_depth: 0 };
/// calc.visit_ty(nested, builder);
/// assert_eq!(calc.max_depth, 3); // Sequence -> Pointer -> Int
/// ```
pub trait TypeVisitor<B: TypeBuilder> {
    /// Visit a descriptor.
    ///
    /// Override this to customize behavior for all descriptors.
    /// Call `super_visit_ty` to recurse into nested descriptors.
    fn visit_ty(&mut self, ty: B::TypeView, builder: B) {
        self.super_visit_ty(ty, builder)
    }

    /// Default recursion into nested descriptors.
    ///
    /// Override `visit_ty` instead of this method.
    fn super_visit_ty(&mut self, ty: B::TypeView, builder: B) {
        match ty.view(builder) {
            TypeKind::Scalar(_) | TypeKind::Named(_) => {}

            TypeKind::Pointer(elem) | TypeKind::Reference(elem) => {
                self.visit_ty(elem.clone(), builder);
            }

            TypeKind::Group { elem, .. } => {
                self.visit_ty(elem.clone(), builder);
            }

            TypeKind::Sequence(types) => {
                for elem in builder.types_data(types) {
                    self.visit_ty(elem.clone(), builder);
                }
            }
        }
    }
}

/// Visitor driven by a closure, called once per descriptor (pre-order).
///
/// # Example
///
/// ```
/// use tyseq_types::{BoxBuilder, ClosureVisitor, TypeBuilder, TypeVisitor};
///
/// let builder = BoxBuilder::new();
/// let seq = builder.sequence([builder.int(), builder.pointer(builder.int())]);
///
/// let mut ints = 0;
/// ClosureVisitor::new(|ty: tyseq_types::Ty<BoxBuilder>, b| {
///     if ty.is_int(b) {
///         ints += 1;
///     }
/// })
/// .visit_ty(seq, builder);
/// assert_eq!(ints, 2);
/// ```
pub struct ClosureVisitor<F> {
    callback: F,
}

impl<F> ClosureVisitor<F> {
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<B, F> TypeVisitor<B> for ClosureVisitor<F>
where
    B: TypeBuilder,
    F: FnMut(B::TypeView, B),
{
    fn visit_ty(&mut self, ty: B::TypeView, builder: B) {
        (self.callback)(ty.clone(), builder);
        self.super_visit_ty(ty, builder);
    }
}

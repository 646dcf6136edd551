use super::{TypeBuilder, TypeKind, TypeVisitor};
use crate::TypeView;
use alloc::string::String;
use core::fmt::Write;

/// Visitor that formats descriptors into strings.
///
/// Rendering is C-like: `int*`, `char&`, `[double; 3]`, and sequences as
/// tuples, `(int, char)`. A one-element sequence keeps its trailing comma,
/// `(int,)`, so it never reads as a bare descriptor.
pub struct TypeFormatter {
    output: String,
}

impl TypeFormatter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    pub fn format<B: TypeBuilder>(ty: B::TypeView, builder: B) -> String {
        let mut formatter = Self::new();
        formatter.visit_ty(ty, builder);
        formatter.output
    }
}

impl Default for TypeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: TypeBuilder> TypeVisitor<B> for TypeFormatter {
    fn visit_ty(&mut self, ty: B::TypeView, builder: B) {
        match ty.view(builder) {
            TypeKind::Scalar(scalar) => {
                self.output.push_str(scalar.name());
            }
            TypeKind::Named(name) => {
                let _ = write!(self.output, "{}", name);
            }
            TypeKind::Pointer(elem) => {
                self.visit_ty(elem.clone(), builder);
                self.output.push('*');
            }
            TypeKind::Reference(elem) => {
                self.visit_ty(elem.clone(), builder);
                self.output.push('&');
            }
            TypeKind::Group { elem, count } => {
                self.output.push('[');
                self.visit_ty(elem.clone(), builder);
                let _ = write!(self.output, "; {}]", count);
            }
            TypeKind::Sequence(types) => {
                let elems = builder.types_data(types);
                self.output.push('(');
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.visit_ty(elem.clone(), builder);
                }
                if elems.len() == 1 {
                    self.output.push(',');
                }
                self.output.push(')');
            }
        }
    }
}

/// Extension trait to add display methods to TypeKind.
pub trait TypeKindDisplay<B: TypeBuilder> {
    fn display(&self, builder: B) -> String;
}

impl<B: TypeBuilder> TypeKindDisplay<B> for TypeKind<B> {
    fn display(&self, builder: B) -> String {
        TypeFormatter::format::<B>(self.clone().intern(builder).into(), builder)
    }
}

/// Extension trait to add display methods to descriptor handles.
pub trait TyDisplay<B: TypeBuilder> {
    fn display(&self, builder: B) -> String;
}

impl<B: TypeBuilder> TyDisplay<B> for crate::Ty<B> {
    fn display(&self, builder: B) -> String {
        TypeFormatter::format::<B>(self.clone().into(), builder)
    }
}

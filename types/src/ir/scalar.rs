//! Scalar descriptor variants.
//!
//! Primitive descriptors are consolidated into a single `Scalar` enum rather
//! than one `TypeKind` variant each.

/// Primitive type descriptors.
///
/// `Void` doubles as the "no match" result of conditional selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scalar {
    /// The empty type (`void`, `()`).
    Void,

    /// Boolean type
    Bool,

    /// Single character
    Char,

    /// Machine integer
    Int,

    /// Wide integer
    Long,

    /// Single-precision floating point
    Float,

    /// Double-precision floating point
    Double,

    /// String type
    Str,

    /// Bytes type
    Bytes,
}

impl Scalar {
    /// C-like spelling used by the formatter.
    pub fn name(&self) -> &'static str {
        match self {
            Scalar::Void => "void",
            Scalar::Bool => "bool",
            Scalar::Char => "char",
            Scalar::Int => "int",
            Scalar::Long => "long",
            Scalar::Float => "float",
            Scalar::Double => "double",
            Scalar::Str => "str",
            Scalar::Bytes => "bytes",
        }
    }
}

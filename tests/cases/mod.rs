//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use tyseq::types::{BoxBuilder, Ty, TyDisplay, TypeBuilder};
use tyseq::{Algebra, AlgebraOptions};

pub type B = BoxBuilder;
pub type T = Ty<BoxBuilder>;

pub fn algebra() -> (B, Algebra<B>) {
    let b = BoxBuilder::new();
    (b, Algebra::new(b))
}

pub fn algebra_with(options: AlgebraOptions) -> (B, Algebra<B>) {
    let b = BoxBuilder::new();
    (b, Algebra::with_options(b, options))
}

/// Descriptor for a short name: `int`, `char`, `double`, `bool`, `long`,
/// `float`, `void`, `str`, `bytes`, a trailing `*` or `&`, or anything else
/// as an opaque named type.
pub fn ty(b: B, name: &str) -> T {
    if let Some(inner) = name.strip_suffix('*') {
        return b.pointer(ty(b, inner));
    }
    if let Some(inner) = name.strip_suffix('&') {
        return b.reference(ty(b, inner));
    }
    match name {
        "void" => b.void(),
        "bool" => b.bool(),
        "char" => b.char(),
        "int" => b.int(),
        "long" => b.long(),
        "float" => b.float(),
        "double" => b.double(),
        "str" => b.str(),
        "bytes" => b.bytes(),
        other => b.named(other),
    }
}

/// Sequence of [`ty`] descriptors.
pub fn seq(b: B, names: &[&str]) -> T {
    b.sequence(names.iter().map(|name| ty(b, name)))
}

pub fn show(b: B, ty: &T) -> String {
    ty.display(b)
}

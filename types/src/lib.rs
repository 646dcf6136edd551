//! Type descriptors with pluggable builders.
//!
//! This crate provides the descriptor representation consumed by the
//! sequence algebra in `tyseq-core`. Descriptors are opaque tokens: two
//! descriptors are either identical or distinct. Storage is pluggable
//! (arena or RC-based).
//!
//! # Example
//!
//! ```
//! use tyseq_types::{TypeBuilder, ArenaBuilder, TyDisplay};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let builder = ArenaBuilder::new(&arena);
//!
//! let seq = builder.sequence([builder.int(), builder.group(builder.char(), 2)]);
//! assert_eq!(seq.display(builder), "(int, [char; 2])");
//! ```

#![no_std]
extern crate alloc;

// Intermediate Representation - generic descriptor system
pub mod ir;

// Concrete builder implementations
pub mod arena_builder;
pub mod box_builder;

pub use ir::{
    ClosureVisitor, Scalar, Ty, TyData, TyDisplay, TypeBuilder, TypeFlags, TypeFolder,
    TypeFormatter, TypeKind, TypeKindDisplay, TypeView, TypeVisitor, convert_ty, types_cmp,
    types_equal,
};

pub use arena_builder::ArenaBuilder;
pub use box_builder::BoxBuilder;

//! tyseq - an algebra over sequences of types
//!
//! # Overview
//!
//! tyseq treats an ordered list of types as a value and provides the list
//! algorithms you would expect over it: join, element access, counting and
//! removal, split and subsequence, homogeneity, consolidation of repeated
//! types into groups, first-match conditional selection, and element-wise
//! mapping.
//!
//! Two evaluation layers share one vocabulary:
//!
//! - **Descriptors** ([`types`], [`Algebra`]): types are interned descriptors
//!   built with a [`TypeBuilder`](types::TypeBuilder). Operations run when
//!   descriptors are registered and report precondition failures as
//!   [`SeqError`].
//! - **Static lists** ([`hlist`](mod@hlist)): sequences are `HCons`/`HNil` types resolved
//!   by the compiler. Indexing past the end does not compile.
//!
//! [`Describe`](hlist::Describe) lowers a static list into a descriptor so the
//! identity-based operations (count, consolidate, homogeneity) are available
//! for it too.
//!
//! # Quick Start
//!
//! ```
//! use tyseq::hlist::Describe;
//! use tyseq::types::{BoxBuilder, TyDisplay, TypeBuilder};
//! use tyseq::{Algebra, HList};
//!
//! let b = BoxBuilder::new();
//! let algebra = Algebra::new(b);
//!
//! let joined = algebra
//!     .join(&[b.sequence([b.int(), b.char()]), b.sequence([b.double()]), b.bool()])
//!     .unwrap();
//! assert_eq!(joined.display(b), "(int, char, double, bool)");
//!
//! let seq = <HList![i32, i32, char, i32]>::describe(b);
//! assert_eq!(algebra.consolidate(&seq).unwrap().display(b), "([int; 3], char)");
//! ```
//!
//! # Configuration
//!
//! [`AlgebraOptions`] bounds result length and tunes consolidation:
//!
//! ```
//! use tyseq::types::{BoxBuilder, TypeBuilder};
//! use tyseq::{Algebra, AlgebraOptions, SeqError};
//!
//! let b = BoxBuilder::new();
//! let algebra = Algebra::with_options(b, AlgebraOptions::default().with_max_len(2));
//!
//! assert_eq!(
//!     algebra.repeat(&b.int(), 3),
//!     Err(SeqError::LengthLimit { len: 3, max: 2 })
//! );
//! ```

pub use tyseq_core::*;

/// Descriptor representation and builders.
pub use tyseq_types as types;

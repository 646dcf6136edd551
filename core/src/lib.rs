//! Type-sequence algebra.
//!
//! Pure transformations over ordered, fixed-length sequences of type
//! descriptors: join, element access, counting and removal, splitting,
//! homogeneity, consolidation into groups, conditional selection and
//! element-wise mapping.
//!
//! The algebra exists at two levels:
//!
//! - [`seq`]: over interned descriptors from `tyseq-types`, evaluated when
//!   descriptors are registered. Precondition failures are `SeqError`s.
//! - [`hlist`](mod@hlist): over inductive type-level lists, resolved by the compiler.
//!   Out-of-range indices do not compile.
//!
//! # Example
//!
//! ```
//! use tyseq_core::Algebra;
//! use tyseq_types::{BoxBuilder, TyDisplay, TypeBuilder};
//!
//! let b = BoxBuilder::new();
//! let algebra = Algebra::new(b);
//!
//! let seq = b.sequence([b.int(), b.int(), b.char(), b.int()]);
//! let consolidated = algebra.consolidate(&seq).unwrap();
//! assert_eq!(consolidated.display(b), "([int; 3], char)");
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

pub mod error;
pub mod hlist;
pub mod options;
pub mod seq;

pub use error::{Result, SeqError};
pub use options::AlgebraOptions;
pub use seq::{
    Algebra, Case, Compose, Identity, Removal, Selection, Split, ToPointer, ToReference, Transform,
};

#[doc(hidden)]
pub mod __private {
    pub use tyseq_types::TypeBuilder;
}

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}

//! Intermediate Representation (IR) for type descriptors.
//!
//! This module contains the generic, builder-agnostic representation of
//! descriptors. The IR is parameterized by the `TypeBuilder` trait, which lets
//! implementations choose how descriptors are built and stored in memory.
//!
//! ## Structure
//!
//! - **Core types**: `TypeKind`, `Ty` - the logical structure of descriptors
//! - **TypeBuilder trait**: construction and storage
//! - **TypeView trait**: unified view over descriptors from different builders
//! - **Generic algorithms**: visitor and folder patterns
//! - **Display**: C-like pretty-printing

pub mod builder;
pub mod display;
pub mod fold;
pub mod scalar;
pub mod ty;
pub mod view;
pub mod visit;

pub use builder::TypeBuilder;
pub use display::{TyDisplay, TypeFormatter, TypeKindDisplay};
pub use fold::TypeFolder;
pub use scalar::Scalar;
pub use ty::{Ty, TyData, TypeFlags, TypeKind};
pub use view::{TypeView, convert_ty, types_cmp, types_equal};
pub use visit::{ClosureVisitor, TypeVisitor};

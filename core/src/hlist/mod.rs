//! Type-level sequences resolved by the compiler.
//!
//! A sequence is an inductive list: [`HNil`] or [`HCons<H, T>`]. Indices are
//! unary naturals ([`Z`], [`S<N>`], aliased `I0`..`I15`), so an index past
//! the end has no trait impl and the program does not compile.
//!
//! Only the structural operations live here. Anything that needs type
//! identity goes through [`Describe`] to the descriptor algebra.
//!
//! ```
//! use tyseq_core::hlist::{HList, Join, value_at, I2};
//! use tyseq_core::{hlist, HList};
//!
//! let joined: HList![i32, char, f64, bool] =
//!     hlist![hlist![1i32, 'a'], hlist![2.5f64], true].join();
//!
//! assert_eq!(joined.len(), 4);
//! assert_eq!(*value_at::<I2, _>(&joined), 2.5);
//! ```

mod access;
mod describe;
mod map;
mod ops;
mod select;
mod tuple;

pub use access::{At, First, TypeAt, value_at};
pub use describe::{Describe, DescribeElems};
pub use map::{
    AddPointer, Boxed, MapTypes, MapValues, Mapped, Nest, Optional, TypeMapper, Unchanged,
    ValueMapper,
};
pub use ops::{
    Atom, Concat, IntoSeq, Join, Normalize, Repeat, Repeated, SplitAt, Subsequence, repeat,
};
pub use select::{Select, Selected, When};
pub use tuple::{Apply, FromTuple, IntoHList, IntoTuple};

use core::marker::PhantomData;

/// The empty sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HNil;

/// A head element followed by the rest of the sequence.
///
/// A value of an `HCons` type is a realized instance of the sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HCons<H, T> {
    pub head: H,
    pub tail: T,
}

/// Implemented by [`HNil`] and every [`HCons`] ending in one.
pub trait HList: Sized {
    /// Length as a unary natural.
    type Length: Nat;

    const LEN: usize = <Self::Length as Nat>::VALUE;

    fn len(&self) -> usize {
        Self::LEN
    }

    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }

    fn prepend<H>(self, head: H) -> HCons<H, Self> {
        HCons { head, tail: self }
    }
}

impl HList for HNil {
    type Length = Z;
}

impl<H, T: HList> HList for HCons<H, T> {
    type Length = S<T::Length>;
}

/// Zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Z;

/// Successor of `N`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct S<N>(PhantomData<N>);

/// A type-level natural number.
pub trait Nat {
    const VALUE: usize;
}

impl Nat for Z {
    const VALUE: usize = 0;
}

impl<N: Nat> Nat for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

pub type I0 = Z;
pub type I1 = S<I0>;
pub type I2 = S<I1>;
pub type I3 = S<I2>;
pub type I4 = S<I3>;
pub type I5 = S<I4>;
pub type I6 = S<I5>;
pub type I7 = S<I6>;
pub type I8 = S<I7>;
pub type I9 = S<I8>;
pub type I10 = S<I9>;
pub type I11 = S<I10>;
pub type I12 = S<I11>;
pub type I13 = S<I12>;
pub type I14 = S<I13>;
pub type I15 = S<I14>;

/// Length of `L` as a unary natural, usable as a split index.
pub type Len<L> = <L as HList>::Length;

/// Build a realized sequence: `hlist![1, 'a', true]`.
#[macro_export]
macro_rules! hlist {
    () => {
        $crate::hlist::HNil
    };
    ($head:expr $(, $rest:expr)* $(,)?) => {
        $crate::hlist::HCons {
            head: $head,
            tail: $crate::hlist!($($rest),*),
        }
    };
}

/// Spell a sequence type: `HList![i32, char, bool]`.
#[macro_export]
macro_rules! HList {
    () => {
        $crate::hlist::HNil
    };
    ($head:ty $(, $rest:ty)* $(,)?) => {
        $crate::hlist::HCons<$head, $crate::HList!($($rest),*)>
    };
}

use super::{HCons, HList, HNil, Nat, S, Z};
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

/// Append `Rhs` after `Self`.
pub trait Concat<Rhs: HList>: HList {
    type Output: HList;

    fn concat(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs: HList> Concat<Rhs> for HNil {
    type Output = Rhs;

    fn concat(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<H, T, Rhs> Concat<Rhs> for HCons<H, T>
where
    T: Concat<Rhs>,
    Rhs: HList,
{
    type Output = HCons<H, <T as Concat<Rhs>>::Output>;

    fn concat(self, rhs: Rhs) -> Self::Output {
        HCons {
            head: self.head,
            tail: <T as Concat<Rhs>>::concat(self.tail, rhs),
        }
    }
}

/// How one argument contributes to a join.
///
/// A sequence contributes its elements; a plain element contributes itself
/// as a one-element sequence. Implemented for the primitive and standard
/// library types; wrap anything else in [`Atom`].
pub trait IntoSeq {
    type Seq: HList;

    fn into_seq(self) -> Self::Seq;
}

impl IntoSeq for HNil {
    type Seq = HNil;

    fn into_seq(self) -> HNil {
        self
    }
}

impl<H, T: HList> IntoSeq for HCons<H, T> {
    type Seq = Self;

    fn into_seq(self) -> Self {
        self
    }
}

/// Marks a value as a single element, whatever its type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Atom<T>(pub T);

impl<T> IntoSeq for Atom<T> {
    type Seq = HCons<T, HNil>;

    fn into_seq(self) -> Self::Seq {
        HCons {
            head: self.0,
            tail: HNil,
        }
    }
}

macro_rules! impl_into_seq_single {
    ($([$($generics:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($generics)*> IntoSeq for $ty {
                type Seq = HCons<$ty, HNil>;

                fn into_seq(self) -> Self::Seq {
                    HCons {
                        head: self,
                        tail: HNil,
                    }
                }
            }
        )*
    };
}

impl_into_seq_single!(
    [] (),
    [] bool,
    [] char,
    [] i8,
    [] i16,
    [] i32,
    [] i64,
    [] i128,
    [] isize,
    [] u8,
    [] u16,
    [] u32,
    [] u64,
    [] u128,
    [] usize,
    [] f32,
    [] f64,
    [] String,
    ['a, T: ?Sized] &'a T,
    ['a, T: ?Sized] &'a mut T,
    [T: ?Sized] *const T,
    [T: ?Sized] *mut T,
    [T: ?Sized] Box<T>,
    [T] Option<T>,
    [T] Vec<T>,
    [T, const N: usize] [T; N],
);

/// An argument list viewed as one sequence.
///
/// A lone sequence argument is returned as is; anything else is wrapped
/// into a sequence of the arguments.
///
/// A lone argument goes through [`IntoSeq`], so a single user type has to
/// be wrapped in [`Atom`]:
///
/// ```
/// use tyseq_core::hlist::{Atom, Normalize};
/// use tyseq_core::hlist;
///
/// #[derive(Debug, PartialEq)]
/// struct Meters(f64);
///
/// assert_eq!(hlist![Atom(Meters(2.0))].normalize(), hlist![Meters(2.0)]);
/// ```
pub trait Normalize: HList {
    type Output: HList;

    fn normalize(self) -> Self::Output;
}

impl Normalize for HNil {
    type Output = HNil;

    fn normalize(self) -> HNil {
        self
    }
}

impl<H: IntoSeq> Normalize for HCons<H, HNil> {
    type Output = H::Seq;

    fn normalize(self) -> Self::Output {
        self.head.into_seq()
    }
}

impl<A, B, T: HList> Normalize for HCons<A, HCons<B, T>> {
    type Output = Self;

    fn normalize(self) -> Self {
        self
    }
}

/// Flatten an argument list one level and concatenate.
///
/// Every argument must implement [`IntoSeq`]; wrap user types in [`Atom`].
pub trait Join: HList {
    type Output: HList;

    fn join(self) -> Self::Output;
}

impl Join for HNil {
    type Output = HNil;

    fn join(self) -> HNil {
        self
    }
}

impl<H, T> Join for HCons<H, T>
where
    H: IntoSeq,
    T: Join,
    H::Seq: Concat<<T as Join>::Output>,
{
    type Output = <H::Seq as Concat<<T as Join>::Output>>::Output;

    fn join(self) -> Self::Output {
        let rest = <T as Join>::join(self.tail);
        <H::Seq as Concat<_>>::concat(self.head.into_seq(), rest)
    }
}

/// `N` copies of `T`.
///
/// The length is a unary natural, so `Repeated<T, I3>` is
/// `HList![T, T, T]`.
pub trait Repeat<T>: Nat {
    type Output: HList;

    fn repeat(value: T) -> Self::Output
    where
        T: Clone;
}

impl<T> Repeat<T> for Z {
    type Output = HNil;

    fn repeat(_value: T) -> HNil
    where
        T: Clone,
    {
        HNil
    }
}

impl<T, N: Repeat<T>> Repeat<T> for S<N> {
    type Output = HCons<T, <N as Repeat<T>>::Output>;

    fn repeat(value: T) -> Self::Output
    where
        T: Clone,
    {
        HCons {
            head: value.clone(),
            tail: <N as Repeat<T>>::repeat(value),
        }
    }
}

/// The sequence of `N` copies of `T`.
pub type Repeated<T, N> = <N as Repeat<T>>::Output;

/// Realize `N` copies of `value`.
pub fn repeat<N: Repeat<T>, T: Clone>(value: T) -> Repeated<T, N> {
    <N as Repeat<T>>::repeat(value)
}

/// Split into the first `N` elements and the rest.
///
/// Splitting past the end does not compile.
pub trait SplitAt<N>: HList {
    type Before: HList;
    type After: HList;

    fn split_at(self) -> (Self::Before, Self::After);
}

impl<L: HList> SplitAt<Z> for L {
    type Before = HNil;
    type After = L;

    fn split_at(self) -> (HNil, L) {
        (HNil, self)
    }
}

impl<H, T, N> SplitAt<S<N>> for HCons<H, T>
where
    T: SplitAt<N>,
{
    type Before = HCons<H, <T as SplitAt<N>>::Before>;
    type After = <T as SplitAt<N>>::After;

    fn split_at(self) -> (Self::Before, Self::After) {
        let (before, after) = <T as SplitAt<N>>::split_at(self.tail);
        (
            HCons {
                head: self.head,
                tail: before,
            },
            after,
        )
    }
}

/// Elements `[Start, End)`.
pub trait Subsequence<Start, End>: HList {
    type Output: HList;

    fn subsequence(self) -> Self::Output;
}

impl<L, Start, End> Subsequence<Start, End> for L
where
    L: SplitAt<End>,
    <L as SplitAt<End>>::Before: SplitAt<Start>,
{
    type Output = <<L as SplitAt<End>>::Before as SplitAt<Start>>::After;

    fn subsequence(self) -> Self::Output {
        let (before, _) = <L as SplitAt<End>>::split_at(self);
        <<L as SplitAt<End>>::Before as SplitAt<Start>>::split_at(before).1
    }
}

use super::{HCons, HList, HNil};
use core::marker::PhantomData;

/// A `(condition, type)` pair: `When<{ size_of::<usize>() == 8 }, u64>`.
pub struct When<const C: bool, T>(PhantomData<T>);

/// First-match selection over a sequence of [`When`] pairs.
///
/// Every pair must be a `When`, even those after the match. With no true
/// condition the output is `()` and `MATCHED` is false.
pub trait Select: HList {
    type Output;
    const MATCHED: bool;
}

impl Select for HNil {
    type Output = ();
    const MATCHED: bool = false;
}

impl<T, Rest: Select> Select for HCons<When<true, T>, Rest> {
    type Output = T;
    const MATCHED: bool = true;
}

impl<T, Rest: Select> Select for HCons<When<false, T>, Rest> {
    type Output = Rest::Output;
    const MATCHED: bool = Rest::MATCHED;
}

/// The selected type of `L`.
pub type Selected<L> = <L as Select>::Output;

use super::{HCons, HList, HNil};

/// Call a function with the elements of a realized sequence as its
/// arguments, in order.
///
/// ```
/// use tyseq_core::hlist::Apply;
/// use tyseq_core::hlist;
///
/// let total = hlist![2i32, 3u8, 0.5f64]
///     .apply(|a: i32, b: u8, c: f64| f64::from(a + i32::from(b)) * c);
/// assert_eq!(total, 2.5);
/// ```
pub trait Apply<F>: HList {
    type Output;

    fn apply(self, f: F) -> Self::Output;
}

/// Conversion from a tuple into the sequence of its fields.
pub trait IntoHList {
    type Output: HList;

    fn into_hlist(self) -> Self::Output;
}

/// Conversion from a sequence into a tuple of its elements.
pub trait IntoTuple: HList {
    type Tuple;

    fn into_tuple(self) -> Self::Tuple;
}

/// The sequence type of a tuple type.
pub type FromTuple<T> = <T as IntoHList>::Output;

macro_rules! hlist_pat {
    () => {
        HNil
    };
    ($head:ident $(, $rest:ident)*) => {
        HCons {
            head: $head,
            tail: hlist_pat!($($rest),*),
        }
    };
}

macro_rules! impl_tuple_bridge {
    ($($elem:ident),*) => {
        impl<Func, Ret $(, $elem)*> Apply<Func> for crate::HList![$($elem),*]
        where
            Func: FnOnce($($elem),*) -> Ret,
        {
            type Output = Ret;

            #[allow(non_snake_case)]
            fn apply(self, f: Func) -> Ret {
                let hlist_pat!($($elem),*) = self;
                f($($elem),*)
            }
        }

        impl<$($elem),*> IntoHList for ($($elem,)*) {
            type Output = crate::HList![$($elem),*];

            #[allow(non_snake_case)]
            fn into_hlist(self) -> Self::Output {
                let ($($elem,)*) = self;
                hlist_pat!($($elem),*)
            }
        }

        impl<$($elem),*> IntoTuple for crate::HList![$($elem),*] {
            type Tuple = ($($elem,)*);

            #[allow(non_snake_case)]
            fn into_tuple(self) -> Self::Tuple {
                let hlist_pat!($($elem),*) = self;
                ($($elem,)*)
            }
        }
    };
}

impl_tuple_bridge!();
impl_tuple_bridge!(A);
impl_tuple_bridge!(A, B);
impl_tuple_bridge!(A, B, C);
impl_tuple_bridge!(A, B, C, D);
impl_tuple_bridge!(A, B, C, D, E);
impl_tuple_bridge!(A, B, C, D, E, G);
impl_tuple_bridge!(A, B, C, D, E, G, H);
impl_tuple_bridge!(A, B, C, D, E, G, H, I);
impl_tuple_bridge!(A, B, C, D, E, G, H, I, J);
impl_tuple_bridge!(A, B, C, D, E, G, H, I, J, K);
impl_tuple_bridge!(A, B, C, D, E, G, H, I, J, K, L);
impl_tuple_bridge!(A, B, C, D, E, G, H, I, J, K, L, M);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hlist::{I1, Join, SplitAt};
    use crate::{HList, hlist};
    use alloc::string::String;
    use pretty_assertions::assert_eq;
    use static_assertions::{assert_impl_all, assert_type_eq_all};

    assert_type_eq_all!(FromTuple<(i32, char)>, HList![i32, char]);
    assert_type_eq_all!(FromTuple<()>, HNil);
    assert_type_eq_all!(<HList![u8, bool] as IntoTuple>::Tuple, (u8, bool));
    assert_impl_all!(HList![i32, char]: Apply<fn(i32, char) -> bool>);

    #[test]
    fn test_apply_passes_elements_in_order() {
        let list = hlist![String::from("ab"), 3usize, 'z'];
        let out = list.apply(|s: String, n: usize, c: char| {
            let mut out = s.repeat(n);
            out.push(c);
            out
        });
        assert_eq!(out, "abababz");
    }

    #[test]
    fn test_apply_empty_and_single() {
        assert_eq!(HNil.apply(|| 7), 7);
        assert_eq!(hlist![4u8].apply(|x: u8| x * 2), 8);
    }

    #[test]
    fn test_tuple_round_trip_through_join() {
        let joined = hlist![(1i32, 'a').into_hlist(), (true,).into_hlist()].join();
        assert_eq!(joined.into_tuple(), (1, 'a', true));

        let (before, after) = SplitAt::<I1>::split_at((1u8, 2u16, 3u32).into_hlist());
        assert_eq!(before.into_tuple(), (1u8,));
        assert_eq!(after.into_tuple(), (2u16, 3u32));
    }
}

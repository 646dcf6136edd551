//! The compile-time layer, checked both statically and through `Describe`.

mod cases;

use cases::*;
use pretty_assertions::assert_eq;
use static_assertions::{assert_not_impl_any, assert_type_eq_all, const_assert, const_assert_eq};
use tyseq::hlist::{
    At, Atom, Concat, Describe, HList, HNil, I0, I1, I2, I3, I4, Join, Len, MapValues, Mapped,
    Normalize, Optional, S, Select, Selected, SplitAt, Subsequence, TypeAt, When, value_at,
};
use tyseq::types::TypeBuilder;
use tyseq::{HList, describe_named, hlist};

struct Point;
describe_named!(Point);

type Args = HList![HList![i32, char], HList![f64], bool];
type Joined = <Args as Join>::Output;

assert_type_eq_all!(Joined, HList![i32, char, f64, bool]);
assert_type_eq_all!(At<Joined, I2>, f64);
assert_type_eq_all!(<Joined as SplitAt<I1>>::After, HList![char, f64, bool]);
assert_type_eq_all!(<Joined as Subsequence<I1, I3>>::Output, HList![char, f64]);
assert_type_eq_all!(<HList![HList![u8]] as Normalize>::Output, HList![u8]);
assert_type_eq_all!(Len<Joined>, I4);
assert_type_eq_all!(Mapped<HList![i32], Optional>, HList![Option<i32>]);
assert_type_eq_all!(
    Selected<HList![When<false, i8>, When<true, i16>, When<true, i32>]>,
    i16
);
const_assert!(!<HList![When<false, i8>] as Select>::MATCHED);
const_assert_eq!(<Joined as HList>::LEN, 4);
assert_not_impl_any!(Joined: TypeAt<I4>);
assert_not_impl_any!(Joined: SplitAt<S<I4>>);

#[test]
fn join_realized_instances() {
    let joined = hlist![hlist![1i32, 'c'], hlist![0.5f64], true].join();
    assert_eq!(joined, hlist![1, 'c', 0.5, true]);
    assert_eq!(*value_at::<I0, _>(&joined), 1);
    assert_eq!(*value_at::<I3, _>(&joined), true);

    let (before, after) = SplitAt::<I2>::split_at(joined);
    assert_eq!(before.concat(after), joined);
}

#[test]
fn atoms_and_mapping() {
    let joined = hlist![Atom(hlist![1u8]), 2u16].join();
    assert_eq!(joined, hlist![hlist![1u8], 2u16]);
    assert_eq!(joined.map_values(&mut Optional), hlist![Some(hlist![1u8]), Some(2u16)]);
}

#[test]
fn describe_bridges_to_descriptors() {
    let (b, algebra) = algebra();

    let described = algebra.describe::<Joined>();
    assert_eq!(described, seq(b, &["int", "char", "double", "bool"]));

    let repeated = <HList![i32, *const Point, i32, *const Point, i32]>::describe(b);
    assert_eq!(
        show(b, &algebra.consolidate(&repeated).unwrap()),
        "([int; 3], [Point*; 2])"
    );
    assert!(!algebra.is_homogeneous(&repeated).unwrap());
    assert!(algebra.is_homogeneous(&<HList![char, char]>::describe(b)).unwrap());
    assert_eq!(HNil::describe(b), b.empty_sequence());
}

#[test]
fn both_layers_agree_on_split() {
    let (_, algebra) = algebra();

    let described = algebra.describe::<Joined>();
    let split = algebra.split(1, &described).unwrap();
    assert_eq!(split.before, algebra.describe::<<Joined as SplitAt<I1>>::Before>());
    assert_eq!(split.after, algebra.describe::<<Joined as SplitAt<I1>>::After>());
}


use super::{HCons, HList, HNil};
use crate::seq::Algebra;
use alloc::vec::Vec;
use tyseq_types::{Scalar, TypeBuilder};

/// Lower a Rust type to a descriptor.
///
/// Implemented for the scalars, pointers, references, and sequences. Use
/// [`describe_named!`](crate::describe_named) for opaque user types.
pub trait Describe {
    fn describe<B: TypeBuilder>(builder: B) -> B::TypeView;
}

/// Element-wise lowering of a sequence, in order.
pub trait DescribeElems: HList {
    fn describe_elems<B: TypeBuilder>(builder: B, out: &mut Vec<B::TypeView>);
}

impl DescribeElems for HNil {
    fn describe_elems<B: TypeBuilder>(_builder: B, _out: &mut Vec<B::TypeView>) {}
}

impl<H: Describe, T: DescribeElems> DescribeElems for HCons<H, T> {
    fn describe_elems<B: TypeBuilder>(builder: B, out: &mut Vec<B::TypeView>) {
        out.push(H::describe(builder));
        T::describe_elems(builder, out);
    }
}

impl Describe for HNil {
    fn describe<B: TypeBuilder>(builder: B) -> B::TypeView {
        builder.empty_sequence()
    }
}

impl<H: Describe, T: DescribeElems> Describe for HCons<H, T> {
    fn describe<B: TypeBuilder>(builder: B) -> B::TypeView {
        let mut elems = Vec::with_capacity(Self::LEN);
        Self::describe_elems(builder, &mut elems);
        builder.sequence(elems)
    }
}

macro_rules! impl_describe_scalar {
    ($($ty:ty => $scalar:ident),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe<B: TypeBuilder>(builder: B) -> B::TypeView {
                    builder.scalar(Scalar::$scalar)
                }
            }
        )*
    };
}

impl_describe_scalar!(
    () => Void,
    bool => Bool,
    char => Char,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    str => Str,
    [u8] => Bytes,
);

/// Implement [`Describe`] as an opaque named descriptor, named after the type.
///
/// ```
/// use tyseq_core::describe_named;
/// use tyseq_core::hlist::Describe;
/// use tyseq_types::{BoxBuilder, TyDisplay};
///
/// struct Point;
/// describe_named!(Point);
///
/// let b = BoxBuilder::new();
/// assert_eq!(<*const Point>::describe(b).display(b), "Point*");
/// ```
#[macro_export]
macro_rules! describe_named {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::hlist::Describe for $ty {
                fn describe<B: $crate::__private::TypeBuilder>(builder: B) -> B::TypeView {
                    $crate::__private::TypeBuilder::named(builder, stringify!($ty))
                }
            }
        )+
    };
}

describe_named!(i8, i16, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Describe + ?Sized> Describe for *const T {
    fn describe<B: TypeBuilder>(builder: B) -> B::TypeView {
        builder.pointer(T::describe(builder))
    }
}

impl<T: Describe + ?Sized> Describe for *mut T {
    fn describe<B: TypeBuilder>(builder: B) -> B::TypeView {
        builder.pointer(T::describe(builder))
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe<B: TypeBuilder>(builder: B) -> B::TypeView {
        builder.reference(T::describe(builder))
    }
}

impl<T: Describe + ?Sized> Describe for &mut T {
    fn describe<B: TypeBuilder>(builder: B) -> B::TypeView {
        builder.reference(T::describe(builder))
    }
}

impl<B: TypeBuilder> Algebra<B> {
    /// The descriptor of the static type `T`.
    pub fn describe<T: Describe + ?Sized>(&self) -> B::TypeView {
        T::describe(self.builder())
    }
}

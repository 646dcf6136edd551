use super::{HCons, HList, S, Z};

/// Element access by a unary index.
///
/// Only `HCons` implements it, so indexing past the end is a compile error:
///
/// ```compile_fail
/// use tyseq_core::hlist::{TypeAt, I2};
/// use tyseq_core::hlist;
///
/// let pair = hlist![1i32, 'a'];
/// let _ = TypeAt::<I2>::get(&pair);
/// ```
pub trait TypeAt<N>: HList {
    type Output;

    fn get(&self) -> &Self::Output;

    fn get_mut(&mut self) -> &mut Self::Output;

    fn into_at(self) -> Self::Output;
}

impl<H, T: HList> TypeAt<Z> for HCons<H, T> {
    type Output = H;

    fn get(&self) -> &H {
        &self.head
    }

    fn get_mut(&mut self) -> &mut H {
        &mut self.head
    }

    fn into_at(self) -> H {
        self.head
    }
}

impl<H, T, N> TypeAt<S<N>> for HCons<H, T>
where
    T: TypeAt<N>,
{
    type Output = <T as TypeAt<N>>::Output;

    fn get(&self) -> &Self::Output {
        <T as TypeAt<N>>::get(&self.tail)
    }

    fn get_mut(&mut self) -> &mut Self::Output {
        <T as TypeAt<N>>::get_mut(&mut self.tail)
    }

    fn into_at(self) -> Self::Output {
        <T as TypeAt<N>>::into_at(self.tail)
    }
}

/// The element type at index `N` of `L`.
pub type At<L, N> = <L as TypeAt<N>>::Output;

/// The first element type of `L`.
pub type First<L> = At<L, Z>;

/// Borrow the runtime value at index `N`.
pub fn value_at<N, L: TypeAt<N>>(list: &L) -> &L::Output {
    <L as TypeAt<N>>::get(list)
}

use super::{HCons, HList, HNil};
use alloc::boxed::Box;

/// A unary rule from one element type to another.
pub trait TypeMapper {
    type Output<T>;
}

/// A [`TypeMapper`] that can also convert values.
pub trait ValueMapper: TypeMapper {
    fn map_value<T>(&mut self, value: T) -> Self::Output<T>;
}

/// `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unchanged;

impl TypeMapper for Unchanged {
    type Output<T> = T;
}

impl ValueMapper for Unchanged {
    fn map_value<T>(&mut self, value: T) -> T {
        value
    }
}

/// `*const T`. Types only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddPointer;

impl TypeMapper for AddPointer {
    type Output<T> = *const T;
}

/// `Box<T>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Boxed;

impl TypeMapper for Boxed {
    type Output<T> = Box<T>;
}

impl ValueMapper for Boxed {
    fn map_value<T>(&mut self, value: T) -> Box<T> {
        Box::new(value)
    }
}

/// `Option<T>`, values wrapped in `Some`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Optional;

impl TypeMapper for Optional {
    type Output<T> = Option<T>;
}

impl ValueMapper for Optional {
    fn map_value<T>(&mut self, value: T) -> Option<T> {
        Some(value)
    }
}

/// `F` applied over `G`: `Nest<Optional, Boxed>` maps `T` to `Option<Box<T>>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nest<F, G>(pub F, pub G);

impl<F: TypeMapper, G: TypeMapper> TypeMapper for Nest<F, G> {
    type Output<T> = F::Output<G::Output<T>>;
}

impl<F: ValueMapper, G: ValueMapper> ValueMapper for Nest<F, G> {
    fn map_value<T>(&mut self, value: T) -> Self::Output<T> {
        let inner = self.1.map_value(value);
        self.0.map_value(inner)
    }
}

/// Apply `F` to every element type, keeping length and order.
pub trait MapTypes<F: TypeMapper>: HList {
    type Output: HList;
}

impl<F: TypeMapper> MapTypes<F> for HNil {
    type Output = HNil;
}

impl<F: TypeMapper, H, T: MapTypes<F>> MapTypes<F> for HCons<H, T> {
    type Output = HCons<F::Output<H>, <T as MapTypes<F>>::Output>;
}

/// `L` with every element type mapped by `F`.
pub type Mapped<L, F> = <L as MapTypes<F>>::Output;

/// Value-level counterpart of [`MapTypes`].
pub trait MapValues<F: ValueMapper>: MapTypes<F> {
    fn map_values(self, mapper: &mut F) -> <Self as MapTypes<F>>::Output;
}

impl<F: ValueMapper> MapValues<F> for HNil {
    fn map_values(self, _mapper: &mut F) -> HNil {
        HNil
    }
}

impl<F: ValueMapper, H, T: MapValues<F>> MapValues<F> for HCons<H, T> {
    fn map_values(self, mapper: &mut F) -> <Self as MapTypes<F>>::Output {
        HCons {
            head: mapper.map_value(self.head),
            tail: self.tail.map_values(mapper),
        }
    }
}

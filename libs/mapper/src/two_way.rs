use crate::one_way::{Mapper, MapperWith};

/// Mapper that can map in both directions:
/// forward from `T` to `R`, backward from `R` to `T`.
///
/// Nothing requires `backward` to invert `forward`. Round-trip fidelity is up
/// to whoever builds the pair.
pub trait TwoWayMapper<T, R> {
    type Forward: Mapper<T, R>;
    type Backward: Mapper<R, T>;

    fn forward(&self) -> &Self::Forward;

    fn backward(&self) -> &Self::Backward;

    fn map_forward(&self, source: T) -> R {
        self.forward().map(source)
    }

    fn map_backward(&self, source: R) -> T {
        self.backward().map(source)
    }
}

/// A forward and a backward mapper kept together.
///
/// Implements [`TwoWayMapper`] when both sides are plain [`Mapper`]s. Sides
/// with extra parameters are reached through [`TwoWay::map_forward_with`] and
/// [`TwoWay::map_backward_with`], and the two sides may use different shapes.
#[derive(Debug, Clone, Copy)]
pub struct TwoWay<F, B> {
    forward: F,
    backward: B,
}

impl<F, B> TwoWay<F, B> {
    pub fn new(forward: F, backward: B) -> Self {
        Self { forward, backward }
    }

    pub fn forward(&self) -> &F {
        &self.forward
    }

    pub fn backward(&self) -> &B {
        &self.backward
    }

    pub fn map_forward_with<T, R, P>(&self, source: T, params: P) -> R
    where
        F: MapperWith<T, R, P>,
    {
        self.forward.map_with(source, params)
    }

    pub fn map_backward_with<T, R, P>(&self, source: R, params: P) -> T
    where
        B: MapperWith<R, T, P>,
    {
        self.backward.map_with(source, params)
    }

    pub fn into_parts(self) -> (F, B) {
        (self.forward, self.backward)
    }
}

impl<T, R, F, B> TwoWayMapper<T, R> for TwoWay<F, B>
where
    F: Mapper<T, R>,
    B: Mapper<R, T>,
{
    type Forward = F;
    type Backward = B;

    fn forward(&self) -> &F {
        &self.forward
    }

    fn backward(&self) -> &B {
        &self.backward
    }
}

/// Builds a [`TwoWay`] from two plain functions.
pub fn two_way_mapper<T, R>(
    forward: impl Fn(T) -> R,
    backward: impl Fn(R) -> T,
) -> TwoWay<impl Fn(T) -> R, impl Fn(R) -> T> {
    TwoWay::new(forward, backward)
}

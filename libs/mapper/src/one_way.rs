/// One-way mapper: converts a `T` into an `R`.
///
/// Every `Fn(T) -> R` is a mapper, so closures and plain functions can be
/// passed wherever a `Mapper` is expected.
pub trait Mapper<T, R> {
    fn map(&self, source: T) -> R;
}

impl<T, R, F> Mapper<T, R> for F
where
    F: Fn(T) -> R,
{
    fn map(&self, source: T) -> R {
        self(source)
    }
}

/// One-way mapper taking extra call-time parameters.
///
/// `P` is a tuple with one element per parameter: `()`, `(P1,)`, `(P1, P2)`,
/// and so on up to five. Each arity is a distinct shape, so one type may
/// implement several of them, usually with the shorter forms delegating to
/// the longest one with fixed arguments.
///
/// Closures `Fn(T, P1, .., Pn) -> R` implement the shape of their arity, and
/// every [`Mapper`] implements the empty shape.
pub trait MapperWith<T, R, P> {
    fn map_with(&self, source: T, params: P) -> R;
}

impl<T, R, M> MapperWith<T, R, ()> for M
where
    M: Mapper<T, R>,
{
    fn map_with(&self, source: T, (): ()) -> R {
        self.map(source)
    }
}

macro_rules! impl_mapper_with_fn {
    ( $( ( $($p:ident),+ ) ),+ $(,)? ) => {
        $(
            impl<T, R, F, $($p),+> MapperWith<T, R, ($($p,)+)> for F
            where
                F: Fn(T, $($p),+) -> R,
            {
                #[allow(non_snake_case)]
                fn map_with(&self, source: T, ($($p,)+): ($($p,)+)) -> R {
                    self(source, $($p),+)
                }
            }
        )+
    };
}

impl_mapper_with_fn!(
    (P1),
    (P1, P2),
    (P1, P2, P3),
    (P1, P2, P3, P4),
    (P1, P2, P3, P4, P5),
);

/// Wraps a plain function into a [`Mapper`].
pub fn mapper<T, R>(map: impl Fn(T) -> R) -> impl Mapper<T, R> {
    map
}

/// Wraps a function taking extra parameters into a [`MapperWith`].
///
/// Closure parameter types must be annotated, the arity selects the shape.
pub fn mapper_with<T, R, P>(map: impl MapperWith<T, R, P>) -> impl MapperWith<T, R, P> {
    map
}

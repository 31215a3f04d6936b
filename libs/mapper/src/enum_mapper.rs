use crate::enumerable::Enumerable;
use crate::error::MapperError;
use crate::one_way::Mapper;
use crate::two_way::TwoWayMapper;

/// Two-way mapper between an enum and some value type.
///
/// Forward mapping calls the association function. Backward mapping scans
/// the association table, built once at construction, and returns the first
/// member (in the order the members were given) whose associated value equals
/// the input. When no member matches, the backward side returns
/// [`EnumMapper::default`] instead of failing.
#[derive(Debug, Clone)]
pub struct EnumMapper<E, R, A> {
    associate: A,
    reverse: ReverseLookup<E, R>,
}

/// Backward side of an [`EnumMapper`].
#[derive(Debug, Clone)]
pub struct ReverseLookup<E, R> {
    associations: Vec<(E, R)>,
    default: E,
}

impl<E, R> ReverseLookup<E, R>
where
    E: Clone,
    R: PartialEq,
{
    /// First member associated with `value`, if any.
    pub fn find(&self, value: &R) -> Option<&E> {
        self.associations
            .iter()
            .find(|(_, associated)| associated == value)
            .map(|(member, _)| member)
    }

    /// First member associated with `value`, or the default.
    pub fn resolve(&self, value: &R) -> E {
        match self.find(value) {
            Some(member) => member.clone(),
            None => {
                tracing::trace!("no member associated with value, using default");
                self.default.clone()
            }
        }
    }
}

impl<E, R> Mapper<R, E> for ReverseLookup<E, R>
where
    E: Clone,
    R: PartialEq,
{
    fn map(&self, source: R) -> E {
        self.resolve(&source)
    }
}

impl<E, R, A> EnumMapper<E, R, A>
where
    E: Clone + PartialEq,
    R: PartialEq,
    A: Fn(E) -> R,
{
    /// Builds the mapper from an explicit member list.
    ///
    /// `entries` should hold every member of `E`; a member listed twice is
    /// kept at its first position. The list is not checked against the enum.
    pub fn new(default: E, entries: impl IntoIterator<Item = E>, associate: A) -> Self {
        let mut associations: Vec<(E, R)> = Vec::new();
        let mut shadowed = 0usize;

        for member in entries {
            if associations.iter().any(|(known, _)| *known == member) {
                continue;
            }
            let value = associate(member.clone());
            if associations.iter().any(|(_, known)| *known == value) {
                shadowed += 1;
            }
            associations.push((member, value));
        }

        tracing::debug!(
            members = associations.len(),
            shadowed,
            "enum association table built"
        );

        Self {
            associate,
            reverse: ReverseLookup {
                associations,
                default,
            },
        }
    }

    /// Fallback member for values no member is associated with.
    pub fn default(&self) -> &E {
        &self.reverse.default
    }

    /// `(member, value)` pairs in member order.
    pub fn associations(&self) -> impl Iterator<Item = (&E, &R)> {
        self.reverse
            .associations
            .iter()
            .map(|(member, value)| (member, value))
    }

    /// First member associated with `value`. Unlike `map_backward`, a miss
    /// gives `None` rather than the default.
    pub fn lookup(&self, value: &R) -> Option<&E> {
        self.reverse.find(value)
    }

    /// Like [`TwoWayMapper::map_backward`], but reports a miss instead of
    /// falling back to the default.
    pub fn try_map_backward(&self, value: &R) -> crate::Result<E> {
        self.lookup(value)
            .cloned()
            .ok_or(MapperError::Unassociated)
    }
}

impl<E, R, A> EnumMapper<E, R, A>
where
    E: Enumerable + Clone + PartialEq,
    R: PartialEq,
    A: Fn(E) -> R,
{
    /// Builds the mapper over every member of `E`.
    pub fn from_enum(default: E, associate: A) -> Self {
        Self::new(default, E::ENTRIES.iter().cloned(), associate)
    }
}

impl<E, R, A> TwoWayMapper<E, R> for EnumMapper<E, R, A>
where
    E: Clone + PartialEq,
    R: PartialEq,
    A: Fn(E) -> R,
{
    type Forward = A;
    type Backward = ReverseLookup<E, R>;

    fn forward(&self) -> &A {
        &self.associate
    }

    fn backward(&self) -> &ReverseLookup<E, R> {
        &self.reverse
    }
}

/// Creates an [`EnumMapper`] for the given members.
pub fn enum_mapper<E, R>(
    default: E,
    entries: impl IntoIterator<Item = E>,
    associate: impl Fn(E) -> R,
) -> EnumMapper<E, R, impl Fn(E) -> R>
where
    E: Clone + PartialEq,
    R: PartialEq,
{
    EnumMapper::new(default, entries, associate)
}

/// Creates an [`EnumMapper`] for every member of `E`.
pub fn enum_mapper_all<E, R>(
    default: E,
    associate: impl Fn(E) -> R,
) -> EnumMapper<E, R, impl Fn(E) -> R>
where
    E: Enumerable + Clone + PartialEq,
    R: PartialEq,
{
    EnumMapper::from_enum(default, associate)
}

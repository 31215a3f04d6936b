/// Enum type that can list all of its members.
///
/// Usually implemented with `#[derive(Enumerable)]`, which only accepts
/// fieldless enums.
pub trait Enumerable: Sized + 'static {
    /// Every member, in declaration order.
    const ENTRIES: &'static [Self];
}

use std::num::ParseIntError;

/// Errors produced by the mappers shipped with this crate.
///
/// Mappers supplied by the caller never go through this type: a fallible
/// mapper returns its own `Result` as the mapped value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapperError {
    #[error("radix {0} is out of range (expected 2..=36)")]
    InvalidRadix(u32),

    #[error("cannot parse '{input}' in radix {radix}: {source}")]
    Parse {
        input: String,
        radix: u32,
        #[source]
        source: ParseIntError,
    },

    #[error("no enum member is associated with the given value")]
    Unassociated,
}

pub type Result<T> = core::result::Result<T, MapperError>;

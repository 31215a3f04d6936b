//! Typed function objects that convert values from one type to another,
//! optionally in both directions.
//!
//! - [`Mapper`] / [`MapperWith`] — one-way conversion, with 0–5 extra call-time parameters.
//! - [`TwoWay`] / [`TwoWayMapper`] — a forward and a backward mapper kept together.
//! - [`EnumMapper`] — a two-way mapper derived from a single enum association rule.

pub mod enum_mapper;
pub mod enumerable;
pub mod error;
pub mod one_way;
pub mod radix;
pub mod two_way;

pub use enum_mapper::{EnumMapper, ReverseLookup, enum_mapper, enum_mapper_all};
pub use enumerable::Enumerable;
pub use error::{MapperError, Result};
pub use one_way::{Mapper, MapperWith, mapper, mapper_with};
pub use radix::{FormatRadix, ParseRadix, Radix, RadixFormat, radix_mapper};
pub use two_way::{TwoWay, TwoWayMapper, two_way_mapper};

#[cfg(feature = "derive")]
pub use mapper_derive::Enumerable;

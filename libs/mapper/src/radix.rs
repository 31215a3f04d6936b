//! Integer ↔ string mappers with a radix parameter.
//!
//! Both sides take their options as extra parameters, so the pair built by
//! [`radix_mapper`] is driven through [`TwoWay::map_forward_with`] and
//! [`TwoWay::map_backward_with`]:
//!
//! - forward: `(&str, (Radix,)) -> Result<i64>`
//! - backward: `(i64, (Radix, bool)) -> String`, the flag selects uppercase digits
//!
//! The parameterless forms use radix 10.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MapperError;
use crate::one_way::{Mapper, MapperWith};
use crate::two_way::TwoWay;

/// Integer base in `2..=36`.
///
/// Every digit below the base has a `char::from_digit` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Radix(u32);

impl Radix {
    pub const BINARY: Radix = Radix(2);
    pub const OCTAL: Radix = Radix(8);
    pub const DECIMAL: Radix = Radix(10);
    pub const HEX: Radix = Radix(16);

    pub fn new(value: u32) -> crate::Result<Self> {
        if (2..=36).contains(&value) {
            Ok(Self(value))
        } else {
            Err(MapperError::InvalidRadix(value))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Radix {
    fn default() -> Self {
        Self::DECIMAL
    }
}

impl TryFrom<u32> for Radix {
    type Error = MapperError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.0
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Output options for [`FormatRadix`], loadable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadixFormat {
    pub radix: Radix,
    pub uppercase: bool,
}

impl RadixFormat {
    pub fn params(self) -> (Radix, bool) {
        (self.radix, self.uppercase)
    }
}

/// Parses a signed integer written in a given radix.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseRadix;

impl<'a> MapperWith<&'a str, crate::Result<i64>, (Radix,)> for ParseRadix {
    fn map_with(&self, source: &'a str, (radix,): (Radix,)) -> crate::Result<i64> {
        i64::from_str_radix(source, radix.get()).map_err(|source_err| MapperError::Parse {
            input: source.to_owned(),
            radix: radix.get(),
            source: source_err,
        })
    }
}

impl<'a> Mapper<&'a str, crate::Result<i64>> for ParseRadix {
    fn map(&self, source: &'a str) -> crate::Result<i64> {
        self.map_with(source, (Radix::DECIMAL,))
    }
}

/// Writes a signed integer in a given radix.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatRadix;

impl MapperWith<i64, String, (Radix, bool)> for FormatRadix {
    fn map_with(&self, source: i64, (radix, uppercase): (Radix, bool)) -> String {
        let base = u64::from(radix.get());
        let mut magnitude = source.unsigned_abs();
        let mut digits = Vec::new();

        loop {
            let digit = char::from_digit((magnitude % base) as u32, radix.get()).unwrap_or('?');
            digits.push(if uppercase {
                digit.to_ascii_uppercase()
            } else {
                digit
            });
            magnitude /= base;
            if magnitude == 0 {
                break;
            }
        }

        if source < 0 {
            digits.push('-');
        }
        digits.iter().rev().collect()
    }
}

impl MapperWith<i64, String, (Radix,)> for FormatRadix {
    fn map_with(&self, source: i64, (radix,): (Radix,)) -> String {
        self.map_with(source, (radix, false))
    }
}

impl Mapper<i64, String> for FormatRadix {
    fn map(&self, source: i64) -> String {
        self.map_with(source, (Radix::DECIMAL, false))
    }
}

/// Two-way mapper between radix strings and `i64`.
pub fn radix_mapper() -> TwoWay<ParseRadix, FormatRadix> {
    TwoWay::new(ParseRadix, FormatRadix)
}

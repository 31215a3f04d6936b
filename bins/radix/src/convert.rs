use mapper::{Radix, radix_mapper};

use crate::config::{Effective, LetterCase};
use crate::error::RadixError;

/// Re-encode one value from `eff.from` to `eff.to`.
pub fn run(eff: &Effective, value: &str) -> Result<String, RadixError> {
    let mapper = radix_mapper();
    let number = mapper.map_forward_with(value.trim(), (eff.from,))?;
    let uppercase = eff.case == LetterCase::Upper;
    tracing::debug!(%value, number, from = %eff.from, to = %eff.to, "converted");
    Ok(mapper.map_backward_with(number, (eff.to, uppercase)))
}

/// Radix from a CLI or config integer.
pub fn radix(value: u32) -> Result<Radix, RadixError> {
    Ok(Radix::new(value)?)
}

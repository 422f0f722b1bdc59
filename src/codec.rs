//! Bit-exact transport encoding for `f64` coordinates.
//!
//! Coordinates cross process and language boundaries as a string of 64
//! binary digits, most-significant bit first, matching the IEEE-754
//! layout of the value. Decimal text is never used: parsing decimals
//! rounds differently across runtimes, while reinterpreting the raw
//! bits reproduces every value exactly, including signed zero,
//! subnormals and NaN payloads.

use crate::error::FormatError;

/// Render the raw bits of `value` as 64 binary digits, MSB first.
#[inline]
pub fn encode(value: f64) -> String {
    format!("{:064b}", value.to_bits())
}

/// Reinterpret 64 binary digits as an `f64`.
///
/// Whitespace anywhere in `s` is ignored. After stripping it, the
/// residue must be exactly 64 characters of `'0'` and `'1'`; anything
/// else is a [`FormatError`]. The digits are folded into a `u64`
/// (first character is the most significant bit) and transmuted via
/// [`f64::from_bits`].
pub fn decode(s: &str) -> Result<f64, FormatError> {
    let mut bits = 0u64;
    let mut len = 0usize;
    for c in s.chars() {
        if c.is_whitespace() {
            continue;
        }
        let bit = match c {
            '0' => 0,
            '1' => 1,
            other => return Err(FormatError::BadDigit(other)),
        };
        bits = (bits << 1) | bit;
        len += 1;
    }
    if len != 64 {
        return Err(FormatError::BadLength(len));
    }
    Ok(f64::from_bits(bits))
}

use super::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`](crate::to_eq_bits) to normalize the two
/// floating point numbers by zeroing out not-a-numbers, reducing resolution,
/// and dropping the sign of negative zeros and then compares the resulting bit
/// strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Normalize the floating point number into comparable bits.
///
/// This function replaces not-a-numbers with positive zero, drops the least
/// significant digits by scaled rounding, replaces negative zero with positive
/// zero, and finally converts to bits. The result is suitable for equality
/// testing and hashing.
pub fn to_eq_bits(value: Float) -> Bits {
    let value = if value.is_nan() { 0.0 } else { value };
    let value = (value * Float::ROUNDING_FACTOR).round() / Float::ROUNDING_FACTOR;
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_bits()
}

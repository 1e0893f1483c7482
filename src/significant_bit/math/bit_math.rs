use alloy::primitives::U256;

use super::super::errors::BitMathError;

/// Shift widths for the bisection, largest first. Each one halves the window that can still
/// hold the top set bit, so 256 bits take log2(256) = 8 steps.
const HALVING_STEPS: [usize; 8] = [128, 64, 32, 16, 8, 4, 2, 1];

/// @notice Returns the index of the most significant bit of the number,
///     where the least significant bit is at index 0 and the most significant bit is at index 255
/// @dev The function satisfies the property:
///     x >= 2**mostSignificantBit(x) and x < 2**(mostSignificantBit(x)+1)
///     Runs a fixed 8 shift/compare steps regardless of the input
/// @param x the value for which to compute the most significant bit, must be greater than 0
/// @return r the index of the most significant bit
pub fn most_significant_bit (x: U256) -> Result<u8, BitMathError> {
    if x.is_zero() {
        return Err(BitMathError::InvalidInput)
    }

    let mut x = x;
    let mut r: u8 = 0;

    for step in HALVING_STEPS {
        let shifted = x >> step;
        if !shifted.is_zero() {
            r += step as u8;
            x = shifted;
        }
    }

    Ok(r)
}

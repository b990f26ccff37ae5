//! Modular exponentiation.

use super::monty::MontyParams;
use crate::{Int, Result};

/// Computes `base ^ exp mod modulus` for an odd modulus.
///
/// Fails with [`crate::Error::InvalidArgument`] when the modulus is even
/// (which includes zero).
///
/// The exponent is scanned from its least significant bit upward: multiply
/// into the accumulator when the current bit is set, then shift the
/// exponent down and square the running power.
pub fn fast_odd_exp_mod(base: &Int, exp: &Int, modulus: &Int) -> Result<Int> {
    let params = MontyParams::new(modulus)?;
    let mut power = params.transform(base)?;
    let mut result = params.one().clone();
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.bit_test(0) {
            result = params.montmul(&result, &power);
        }
        exp >>= 1;
        power = params.montmul(&power, &power);
    }

    Ok(params.reduce(&result))
}

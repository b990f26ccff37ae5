//! Random digit-string and random-value generation.

use crate::{Int, Limb, Word};
use rand_core::CryptoRngCore;

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Random `0x`-prefixed hex string of exactly `digits` digits.
///
/// The first digit is drawn from `[8, f]`, so the parsed value occupies
/// exactly `4 * digits` bits.
pub fn random_hex_string(rng: &mut impl CryptoRngCore, digits: usize) -> String {
    debug_assert!(digits > 0);
    let mut out = String::with_capacity(2 + digits);
    out.push_str("0x");

    for i in 0..digits {
        let index = if i == 0 {
            8 + (rng.next_u32() % 8) as usize
        } else {
            (rng.next_u32() % 16) as usize
        };
        out.push(HEX_CHARS[index] as char);
    }

    out
}

/// Random decimal string of exactly `digits` digits, first digit non-zero.
///
/// Kept for compatibility with decimal tooling; the kernel itself consumes
/// only the hex form.
pub fn random_decimal_string(rng: &mut impl CryptoRngCore, digits: usize) -> String {
    debug_assert!(digits > 0);
    let mut out = String::with_capacity(digits);

    out.push((b'1' + (rng.next_u32() % 9) as u8) as char);
    for _ in 1..digits {
        out.push((b'0' + (rng.next_u32() % 10) as u8) as char);
    }

    out
}

#[cfg(target_pointer_width = "32")]
fn random_word(rng: &mut impl CryptoRngCore) -> Word {
    rng.next_u32()
}

#[cfg(target_pointer_width = "64")]
fn random_word(rng: &mut impl CryptoRngCore) -> Word {
    rng.next_u64()
}

/// Uniform random [`Int`] below `2^bits`.
pub(crate) fn random_bits(rng: &mut impl CryptoRngCore, bits: usize) -> Int {
    debug_assert!(bits > 0);
    let nlimbs = bits.div_ceil(Limb::BITS as usize);
    let mut limbs = Vec::with_capacity(nlimbs);

    for _ in 0..nlimbs {
        limbs.push(Limb(random_word(rng)));
    }

    let rem = bits % Limb::BITS as usize;
    if rem != 0 {
        let last = nlimbs - 1;
        limbs[last] = Limb(limbs[last].0 >> (Limb::BITS as usize - rem));
    }

    Int::from_limbs(limbs)
}

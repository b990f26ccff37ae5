//! Miller-Rabin probabilistic primality testing.

use crate::modular::fast_odd_exp_mod;
use crate::{int::rand::random_bits, Int, Limb, Result};
use rand_core::{CryptoRngCore, OsRng};

/// Runs `rounds` Miller-Rabin iterations against an odd `candidate > 3`.
pub(crate) fn pass_miller_rabin(candidate: &Int, rounds: usize) -> Result<bool> {
    pass_miller_rabin_with_rng(&mut OsRng, candidate, rounds)
}

pub(crate) fn pass_miller_rabin_with_rng(
    rng: &mut impl CryptoRngCore,
    candidate: &Int,
    rounds: usize,
) -> Result<bool> {
    debug_assert!(candidate.is_odd() && *candidate > 3);
    let minus_one = candidate - &Int::one();

    // candidate - 1 = d * 2^s with d odd
    let s = minus_one.trailing_zeros();
    let mut d = minus_one.shr_limbs(s / Limb::BITS as usize);
    d.checked_shr_assign((s % Limb::BITS as usize) as u32)?;
    debug_assert!(d.is_odd());

    'witness: for _ in 0..rounds {
        let witness = random_witness(rng, candidate, &minus_one);
        let mut x = fast_odd_exp_mod(&witness, &d, candidate)?;

        if x == Int::one() || x == minus_one {
            continue 'witness;
        }

        for _ in 1..s {
            x = (&x * &x).rem_int(candidate)?;
            if x == minus_one {
                continue 'witness;
            }
        }

        // no square reached -1: the witness proves compositeness
        return Ok(false);
    }

    Ok(true)
}

/// Uniform witness in `[2, candidate - 2]` by rejection sampling at the
/// candidate's bit length.
fn random_witness(rng: &mut impl CryptoRngCore, candidate: &Int, minus_one: &Int) -> Int {
    let bits = candidate.msb();
    loop {
        let w = random_bits(rng, bits);
        if w >= 2 && w < *minus_one {
            return w;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pass_miller_rabin_with_rng;
    use crate::Int;
    use rand_core::SeedableRng;

    fn run(value: u64, rounds: usize) -> bool {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
        pass_miller_rabin_with_rng(&mut rng, &Int::from(value), rounds).unwrap()
    }

    #[test]
    fn accepts_primes() {
        assert!(run(5, 10));
        assert!(run(97, 10));
        assert!(run(65537, 10));
        assert!(run(67_280_421_310_721, 10));
    }

    #[test]
    fn rejects_composites() {
        assert!(!run(9, 20));
        assert!(!run(15, 20));
        assert!(!run(9_746_347_772_161, 20));
    }

    #[test]
    fn rejects_carmichael_numbers() {
        // Fermat-pseudoprime to many bases; Miller-Rabin still catches it
        assert!(!run(561, 20));
        assert!(!run(41041, 20));
    }

    #[test]
    fn many_rounds_keep_accepting() {
        assert!(run(67_280_421_310_721, 50));
    }
}

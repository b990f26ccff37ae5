//! Process-wide small-prime table.

use std::sync::OnceLock;

/// Upper bound of the sieve of Eratosthenes.
const SIEVE_LIMIT: usize = 100_000;

/// Number of primes kept for trial division.
const TABLE_SIZE: usize = 8192;

static SMALL_PRIMES: OnceLock<Vec<u32>> = OnceLock::new();

/// The first [`TABLE_SIZE`] primes, computed once on first use and read
/// without further synchronization.
pub(crate) fn small_primes() -> &'static [u32] {
    SMALL_PRIMES.get_or_init(|| {
        let mut composite = vec![false; SIEVE_LIMIT];
        let mut primes = Vec::with_capacity(TABLE_SIZE);

        for i in 2..SIEVE_LIMIT {
            if primes.len() == TABLE_SIZE {
                break;
            }
            if !composite[i] {
                primes.push(i as u32);
                for multiple in (i * 2..SIEVE_LIMIT).step_by(i) {
                    composite[multiple] = true;
                }
            }
        }

        primes
    })
}

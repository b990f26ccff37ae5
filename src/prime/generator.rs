//! Parallel search for probable primes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use log::warn;
use rand_core::OsRng;

use crate::int::rand::random_hex_string;
use crate::{prime, Error, Int, Limb, Result};

/// Parallel "start and step" searcher for probable primes.
pub struct PrimeGenerator;

impl PrimeGenerator {
    /// Returns a probable prime that occupies exactly `hex_digits` hex
    /// digits, i.e. `4 * hex_digits` bits.
    ///
    /// One worker per available hardware thread draws an independent random
    /// starting candidate, forces it odd, and steps it by 2 until a prime
    /// appears. The first worker to succeed publishes its result under the
    /// shared mutex and flips the stop flag; the rest observe the flag at
    /// the top of their next iteration and exit. A failed primality check is
    /// logged and the worker moves on to the next candidate.
    pub fn get_prime(hex_digits: usize) -> Result<Int> {
        if hex_digits == 0 {
            return Err(Error::InvalidArgument(
                "prime length must be at least one hex digit",
            ));
        }

        // build the trial-division table before any worker needs it
        prime::sieve::small_primes();

        let workers = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let found: Arc<Mutex<Option<Int>>> = Arc::new(Mutex::new(None));
        let stop = Arc::new(AtomicBool::new(false));

        let mut handles = Vec::with_capacity(workers);
        for _ in 0..workers {
            let found = Arc::clone(&found);
            let stop = Arc::clone(&stop);

            handles.push(thread::spawn(move || {
                let mut rng = OsRng;
                let mut candidate = Int::from_hex(&random_hex_string(&mut rng, hex_digits))
                    .expect("generated hex strings are well-formed");
                candidate.bit_set(0);

                while !stop.load(Ordering::Relaxed) {
                    match prime::is_prime(&candidate) {
                        Ok(true) => {
                            let mut slot = found.lock().expect("prime result mutex poisoned");
                            if slot.is_none() {
                                *slot = Some(candidate);
                            }
                            stop.store(true, Ordering::Relaxed);
                            return;
                        }
                        Ok(false) => {}
                        Err(err) => {
                            warn!("primality check failed, skipping candidate: {err}");
                        }
                    }
                    candidate = candidate.add_limb(Limb(2));
                }
            }));
        }

        for handle in handles {
            handle
                .join()
                .map_err(|_| Error::InvariantViolation("prime search worker panicked"))?;
        }

        let result = found.lock().expect("prime result mutex poisoned").take();
        result.ok_or(Error::InvariantViolation(
            "prime search finished without a result",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::PrimeGenerator;
    use crate::{is_prime, Error};

    #[test]
    fn zero_digits_is_rejected() {
        assert_eq!(
            PrimeGenerator::get_prime(0).err(),
            Some(Error::InvalidArgument(
                "prime length must be at least one hex digit"
            ))
        );
    }

    #[test]
    fn finds_a_small_prime_of_requested_size() {
        let p = PrimeGenerator::get_prime(4).unwrap();
        assert!(is_prime(&p).unwrap());
        // the top hex digit is drawn from [8, f], so the bit length is exact
        // unless the +2 stepping carried past the top
        assert!(p.msb() >= 16);
    }

    #[test]
    fn finds_a_medium_prime() {
        let p = PrimeGenerator::get_prime(16).unwrap();
        assert!(is_prime(&p).unwrap());
        assert!(p.is_odd());
        assert!(p.msb() >= 64);
    }
}

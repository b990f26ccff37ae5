//! RSA key generation and the encrypt/decrypt/sign/verify facade.
//!
//! Exponentiation is applied to the raw message value: no OAEP, no PKCS#1.
//! Callers must keep messages and digests below the modulus.

use crate::int::signed::SignedInt;
use crate::modular::fast_odd_exp_mod;
use crate::prime::PrimeGenerator;
use crate::{Error, Int, Result, Word};

/// The fixed public exponent `e` (the fourth Fermat prime, F4).
pub const E: Word = 0x10001;

/// Public half of an RSA key pair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKey {
    /// Modulus `n = p * q`.
    pub n: Int,
    /// Public exponent.
    pub e: Int,
}

/// Private half of an RSA key pair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrivateKey {
    /// First prime factor of the modulus.
    pub p: Int,
    /// Second prime factor of the modulus.
    pub q: Int,
    /// Modulus `n = p * q`.
    pub n: Int,
    /// Private exponent, the inverse of `e` modulo `phi`.
    pub d: Int,
    /// Euler's totient `(p - 1) * (q - 1)`.
    pub phi: Int,
}

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        use zeroize::Zeroize;
        self.p.zeroize();
        self.q.zeroize();
        self.n.zeroize();
        self.d.zeroize();
        self.phi.zeroize();
    }
}

/// Textbook RSA over the bignum kernel.
pub struct Rsa {
    /// Encryption/verification key.
    pub public_key: PublicKey,
    /// Decryption/signing key.
    pub private_key: PrivateKey,
}

impl Rsa {
    /// Generates a key pair from two fresh probable primes of
    /// `bit_length / 4` hex digits each.
    ///
    /// Fails with [`Error::InvalidArgument`] if `e` and `phi` share a factor
    /// (draw again in that unlikely event).
    pub fn generate_key_pair(bit_length: usize) -> Result<Self> {
        let p = PrimeGenerator::get_prime(bit_length / 4)?;
        let q = PrimeGenerator::get_prime(bit_length / 4)?;

        let n = &p * &q;
        let phi = &(&p - &Int::one()) * &(&q - &Int::one());
        let e = Int::from(E);
        let d = mod_inverse(&e, &phi)?;

        Ok(Self {
            public_key: PublicKey { n: n.clone(), e },
            private_key: PrivateKey { p, q, n, d, phi },
        })
    }

    /// Draws a single probable prime of `hex_digits` hex digits.
    pub fn generate_prime(hex_digits: usize) -> Result<Int> {
        PrimeGenerator::get_prime(hex_digits)
    }

    /// Computes `message ^ e mod n`.
    pub fn encrypt(&self, message: &Int) -> Result<Int> {
        fast_odd_exp_mod(message, &self.public_key.e, &self.public_key.n)
    }

    /// Computes `cipher ^ d mod n`.
    pub fn decrypt(&self, cipher: &Int) -> Result<Int> {
        fast_odd_exp_mod(cipher, &self.private_key.d, &self.private_key.n)
    }

    /// Computes the signature `digest ^ d mod n`.
    pub fn sign(&self, digest: &Int) -> Result<Int> {
        fast_odd_exp_mod(digest, &self.private_key.d, &self.private_key.n)
    }

    /// Checks `signature ^ e mod n == digest`.
    pub fn verify(&self, digest: &Int, signature: &Int) -> Result<bool> {
        Ok(fast_odd_exp_mod(signature, &self.public_key.e, &self.public_key.n)? == *digest)
    }
}

/// Computes `value⁻¹ mod modulus`, normalized into `[0, modulus)`.
///
/// Fails with [`Error::InvalidArgument`] when the inverse does not exist,
/// i.e. `gcd(value, modulus) != 1`.
fn mod_inverse(value: &Int, modulus: &Int) -> Result<Int> {
    let (gcd, x, _) = extended_gcd(
        &SignedInt::from_int(value.clone()),
        &SignedInt::from_int(modulus.clone()),
    );
    if gcd.magnitude() != &Int::one() {
        return Err(Error::InvalidArgument(
            "modular inverse does not exist: operands share a factor",
        ));
    }

    // ((x mod m) + m) mod m folds a negative coefficient into [0, m)
    let m = SignedInt::from_int(modulus.clone());
    let reduced = &(&(&x % &m) + &m) % &m;
    debug_assert!(!reduced.is_negative());
    Ok(reduced.into_magnitude())
}

/// `extended_gcd(a, b) = (g, x, y)` with `a*x + b*y = g = gcd(a, b)`.
fn extended_gcd(a: &SignedInt, b: &SignedInt) -> (SignedInt, SignedInt, SignedInt) {
    if b.is_zero() {
        return (a.clone(), SignedInt::one(), SignedInt::zero());
    }
    let (g, x1, y1) = extended_gcd(b, &(a % b));
    let y = &x1 - &(&(a / b) * &y1);
    (g, y1, y)
}

#[cfg(test)]
mod tests {
    use super::{extended_gcd, mod_inverse};
    use crate::int::signed::SignedInt;
    use crate::{Error, Int};

    fn int(value: u32) -> Int {
        Int::from(value)
    }

    #[test]
    fn extended_gcd_bezout_identity() {
        let a = SignedInt::from_int(int(240));
        let b = SignedInt::from_int(int(46));
        let (g, x, y) = extended_gcd(&a, &b);
        assert_eq!(g.magnitude(), &int(2));
        // 240x + 46y = 2
        let lhs = &(&a * &x) + &(&b * &y);
        assert_eq!(lhs, SignedInt::from_int(int(2)));
    }

    #[test]
    fn mod_inverse_known_values() {
        assert_eq!(mod_inverse(&int(3), &int(10)).unwrap(), int(7));
        assert_eq!(mod_inverse(&int(17), &int(3120)).unwrap(), int(2753));
    }

    #[test]
    fn mod_inverse_round_trip() {
        // gcd(0x10001, phi) == 1, so the inverse must exist
        let e = int(0x10001);
        let phi = Int::from_hex("0x7c3f9d0b44a2e886c5f1a09e14c0").unwrap();
        let d = mod_inverse(&e, &phi).unwrap();
        let product = (&e * &d).rem_int(&phi).unwrap();
        assert_eq!(product, Int::one());
    }

    #[test]
    fn mod_inverse_requires_coprime_operands() {
        assert_eq!(
            mod_inverse(&int(2), &int(4)),
            Err(Error::InvalidArgument(
                "modular inverse does not exist: operands share a factor"
            ))
        );
    }
}

//! Educational RSA built on a from-scratch arbitrary-precision unsigned
//! integer engine.
//!
//! # About
//! The heart of this crate is [`Int`], a heap-allocated multi-precision
//! unsigned integer with schoolbook and Karatsuba multiplication, Knuth
//! long division, and hex-only text I/O. On top of it sit a Montgomery
//! exponentiation engine for odd moduli ([`fast_odd_exp_mod`]), a
//! Miller-Rabin primality tester with a small-prime sieve prefilter
//! ([`is_prime`]), a parallel prime searcher ([`PrimeGenerator`]), and a
//! thin textbook-RSA facade ([`Rsa`]).
//!
//! # Status
//! This library exists to demonstrate the algorithms, not to protect data:
//!
//! - every operation is **variable-time** and leaks operand values through
//!   its timing;
//! - RSA is applied **raw**, with no OAEP or PKCS#1 padding;
//! - keys are held in ordinary heap memory (the `zeroize` feature offers
//!   best-effort wiping on request).
//!
//! Do not use it where a real cryptography library belongs.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

mod error;
mod int;
mod limb;
mod modular;
mod prime;
mod rsa;

pub use crate::{
    error::{Error, Result},
    int::{
        rand::{random_decimal_string, random_hex_string},
        Int,
    },
    limb::{Limb, WideWord, Word},
    modular::fast_odd_exp_mod,
    prime::{is_prime, PrimeGenerator},
    rsa::{PrivateKey, PublicKey, Rsa, E},
};

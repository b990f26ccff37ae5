//! Modular exponentiation for odd moduli.

mod monty;
mod pow;

pub use pow::fast_odd_exp_mod;

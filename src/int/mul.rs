//! [`Int`] multiplication operations.

use crate::{Int, Limb, Word};
use core::ops::{Mul, MulAssign};

/// Operand size in limbs at which multiplication switches to Karatsuba.
///
/// Below this the recursion overhead outweighs the saved limb products.
const KARATSUBA_THRESHOLD: usize = 128;

impl Int {
    /// Computes `self * rhs`.
    pub(crate) fn mul_int(&self, rhs: &Self) -> Self {
        if self.nlimbs() >= KARATSUBA_THRESHOLD && rhs.nlimbs() >= KARATSUBA_THRESHOLD {
            self.karatsuba_mul(rhs)
        } else {
            self.schoolbook_mul(rhs)
        }
    }

    /// Operand-scanning schoolbook multiplication.
    pub(crate) fn schoolbook_mul(&self, rhs: &Self) -> Self {
        let mut limbs = vec![Limb::ZERO; self.nlimbs() + rhs.nlimbs()];

        for (j, &b) in rhs.limbs.iter().enumerate() {
            let mut carry = Limb::ZERO;
            for (i, &a) in self.limbs.iter().enumerate() {
                let (res, c) = limbs[i + j].mac(a, b, carry);
                limbs[i + j] = res;
                carry = c;
            }
            limbs[self.nlimbs() + j] = carry;
        }

        Int::from_limbs(limbs)
    }

    /// Computes `self * rhs` for a single-limb scalar.
    pub fn mul_limb(&self, rhs: Limb) -> Self {
        let mut limbs = Vec::with_capacity(self.nlimbs() + 1);
        let mut carry = Limb::ZERO;

        for &a in &self.limbs {
            let (res, c) = Limb::ZERO.mac(a, rhs, carry);
            limbs.push(res);
            carry = c;
        }
        limbs.push(carry);

        Int::from_limbs(limbs)
    }

    /// Karatsuba multiplication: three half-size products instead of four.
    ///
    /// `z1` is computed as `(lo1 + hi1)(lo2 + hi2) - z0 - z2`, which cannot
    /// underflow because the subtracted terms are both contained in the
    /// product of the sums.
    pub(crate) fn karatsuba_mul(&self, rhs: &Self) -> Self {
        let half = (self.nlimbs().max(rhs.nlimbs()) + 1) / 2;
        let (a_lo, a_hi) = self.split_at_limb(half);
        let (b_lo, b_hi) = rhs.split_at_limb(half);

        let z0 = a_lo.mul_int(&b_lo);
        let z2 = a_hi.mul_int(&b_hi);
        let sums = (&a_lo + &a_hi).mul_int(&(&b_lo + &b_hi));
        let z1 = &(&sums - &z0) - &z2;

        &(&z2.shl_limbs(2 * half) + &z1.shl_limbs(half)) + &z0
    }

    /// Split into `(low, high)` halves at limb index `at`.
    fn split_at_limb(&self, at: usize) -> (Self, Self) {
        if at >= self.nlimbs() {
            return (self.clone(), Int::zero());
        }
        (
            Int::from_limbs(self.limbs[..at].to_vec()),
            Int::from_limbs(self.limbs[at..].to_vec()),
        )
    }
}

impl Mul<&Int> for &Int {
    type Output = Int;

    fn mul(self, rhs: &Int) -> Int {
        self.mul_int(rhs)
    }
}

impl Mul<&Int> for Int {
    type Output = Int;

    fn mul(self, rhs: &Int) -> Int {
        self.mul_int(rhs)
    }
}

impl Mul<Int> for &Int {
    type Output = Int;

    fn mul(self, rhs: Int) -> Int {
        self.mul_int(&rhs)
    }
}

impl Mul for Int {
    type Output = Int;

    fn mul(self, rhs: Int) -> Int {
        self.mul_int(&rhs)
    }
}

impl Mul<Word> for &Int {
    type Output = Int;

    fn mul(self, rhs: Word) -> Int {
        self.mul_limb(Limb(rhs))
    }
}

impl Mul<Word> for Int {
    type Output = Int;

    fn mul(self, rhs: Word) -> Int {
        self.mul_limb(Limb(rhs))
    }
}

impl Mul<Limb> for &Int {
    type Output = Int;

    fn mul(self, rhs: Limb) -> Int {
        self.mul_limb(rhs)
    }
}

impl Mul<Limb> for Int {
    type Output = Int;

    fn mul(self, rhs: Limb) -> Int {
        self.mul_limb(rhs)
    }
}

impl MulAssign<&Int> for Int {
    fn mul_assign(&mut self, rhs: &Int) {
        *self = self.mul_int(rhs);
    }
}

impl MulAssign<Int> for Int {
    fn mul_assign(&mut self, rhs: Int) {
        *self = self.mul_int(&rhs);
    }
}

//! [`Int`] addition operations.

use crate::{Int, Limb, Word};
use core::ops::{Add, AddAssign};

impl Int {
    /// Computes `self + rhs`.
    pub(crate) fn add_int(&self, rhs: &Self) -> Self {
        let n = self.nlimbs().max(rhs.nlimbs());
        let mut limbs = Vec::with_capacity(n + 1);
        let mut carry = Limb::ZERO;

        for i in 0..n {
            let (sum, c) = self.limb(i).carrying_add(rhs.limb(i), carry);
            limbs.push(sum);
            carry = c;
        }
        if !carry.is_zero() {
            limbs.push(carry);
        }

        // the top limb is non-zero by construction unless both inputs were zero
        Int::from_limbs(limbs)
    }

    /// Computes `self + rhs` for a single-limb scalar.
    pub fn add_limb(&self, rhs: Limb) -> Self {
        let mut limbs = Vec::with_capacity(self.nlimbs() + 1);
        let mut carry = rhs;

        for &limb in &self.limbs {
            let (sum, c) = limb.carrying_add(carry, Limb::ZERO);
            limbs.push(sum);
            carry = c;
        }
        if !carry.is_zero() {
            limbs.push(carry);
        }

        Int::from_limbs(limbs)
    }
}

impl Add<&Int> for &Int {
    type Output = Int;

    fn add(self, rhs: &Int) -> Int {
        self.add_int(rhs)
    }
}

impl Add<&Int> for Int {
    type Output = Int;

    fn add(self, rhs: &Int) -> Int {
        self.add_int(rhs)
    }
}

impl Add<Int> for &Int {
    type Output = Int;

    fn add(self, rhs: Int) -> Int {
        self.add_int(&rhs)
    }
}

impl Add for Int {
    type Output = Int;

    fn add(self, rhs: Int) -> Int {
        self.add_int(&rhs)
    }
}

impl Add<Word> for &Int {
    type Output = Int;

    fn add(self, rhs: Word) -> Int {
        self.add_limb(Limb(rhs))
    }
}

impl Add<Word> for Int {
    type Output = Int;

    fn add(self, rhs: Word) -> Int {
        self.add_limb(Limb(rhs))
    }
}

impl Add<Limb> for &Int {
    type Output = Int;

    fn add(self, rhs: Limb) -> Int {
        self.add_limb(rhs)
    }
}

impl Add<Limb> for Int {
    type Output = Int;

    fn add(self, rhs: Limb) -> Int {
        self.add_limb(rhs)
    }
}

impl AddAssign<&Int> for Int {
    fn add_assign(&mut self, rhs: &Int) {
        *self = self.add_int(rhs);
    }
}

impl AddAssign<Int> for Int {
    fn add_assign(&mut self, rhs: Int) {
        *self = self.add_int(&rhs);
    }
}

impl AddAssign<Word> for Int {
    fn add_assign(&mut self, rhs: Word) {
        *self = self.add_limb(Limb(rhs));
    }
}

//! [`Int`] subtraction operations.

use crate::{Int, Limb, Word};
use core::ops::{Sub, SubAssign};

impl Int {
    /// Computes `self - rhs`, or `None` when `rhs > self`.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        if rhs > self {
            return None;
        }

        let mut limbs = Vec::with_capacity(self.nlimbs());
        let mut borrow = Limb::ZERO;

        for i in 0..self.nlimbs() {
            let (diff, b) = self.limbs[i].borrowing_sub(rhs.limb(i), borrow);
            limbs.push(diff);
            borrow = b;
        }
        debug_assert!(borrow.is_zero());

        Some(Int::from_limbs(limbs))
    }

    /// Computes `self - rhs` for a single-limb scalar, or `None` when the
    /// scalar is larger than `self`.
    pub fn checked_sub_limb(&self, rhs: Limb) -> Option<Self> {
        let mut limbs = Vec::with_capacity(self.nlimbs());
        let mut borrow = rhs;

        for &limb in &self.limbs {
            let (diff, b) = limb.borrowing_sub(borrow, Limb::ZERO);
            limbs.push(diff);
            borrow = b;
        }
        if !borrow.is_zero() {
            return None;
        }

        Some(Int::from_limbs(limbs))
    }
}

impl Sub<&Int> for &Int {
    type Output = Int;

    fn sub(self, rhs: &Int) -> Int {
        self.checked_sub(rhs)
            .expect("attempted to subtract with underflow")
    }
}

impl Sub<&Int> for Int {
    type Output = Int;

    fn sub(self, rhs: &Int) -> Int {
        &self - rhs
    }
}

impl Sub<Int> for &Int {
    type Output = Int;

    fn sub(self, rhs: Int) -> Int {
        self - &rhs
    }
}

impl Sub for Int {
    type Output = Int;

    fn sub(self, rhs: Int) -> Int {
        &self - &rhs
    }
}

impl Sub<Word> for &Int {
    type Output = Int;

    fn sub(self, rhs: Word) -> Int {
        self.checked_sub_limb(Limb(rhs))
            .expect("attempted to subtract with underflow")
    }
}

impl Sub<Word> for Int {
    type Output = Int;

    fn sub(self, rhs: Word) -> Int {
        &self - rhs
    }
}

impl Sub<Limb> for &Int {
    type Output = Int;

    fn sub(self, rhs: Limb) -> Int {
        self.checked_sub_limb(rhs)
            .expect("attempted to subtract with underflow")
    }
}

impl Sub<Limb> for Int {
    type Output = Int;

    fn sub(self, rhs: Limb) -> Int {
        &self - rhs
    }
}

impl SubAssign<&Int> for Int {
    fn sub_assign(&mut self, rhs: &Int) {
        *self = &*self - rhs;
    }
}

impl SubAssign<Int> for Int {
    fn sub_assign(&mut self, rhs: Int) {
        *self = &*self - &rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::{Int, Limb};

    #[test]
    fn sub_simple() {
        let a = Int::from_hex("0x100").unwrap();
        let b = Int::from_hex("0x1").unwrap();
        assert_eq!((&a - &b).to_hex(), "0xff");
    }

    #[test]
    fn sub_borrows_across_limbs() {
        let a = Int::from_limbs(vec![Limb::ZERO, Limb::ZERO, Limb::ONE]);
        let diff = &a - 1;
        assert_eq!(diff.as_limbs(), &[Limb::MAX, Limb::MAX]);
    }

    #[test]
    fn sub_self_is_zero() {
        let a = Int::from_hex("0xdeadbeefcafebabe").unwrap();
        assert!((&a - &a).is_zero());
    }

    #[test]
    fn sub_known_difference() {
        let x = Int::from_hex("0xdeadbeefcafebabe1234567890abcdef55aa55aa55aa55aa").unwrap();
        let y = Int::from_hex("0x1f2e3d4c5b6a798800ff").unwrap();
        assert_eq!(
            (&x - &y).to_hex(),
            "0xdeadbeefcafebabe1234567890abaec1185dfa3fdc2254ab"
        );
    }

    #[test]
    fn checked_sub_underflow() {
        let a = Int::from_hex("0x1").unwrap();
        let b = Int::from_hex("0x100").unwrap();
        assert!(a.checked_sub(&b).is_none());
        assert!(a.checked_sub_limb(Limb(2)).is_none());
    }

    #[test]
    #[should_panic(expected = "attempted to subtract with underflow")]
    fn sub_panics_on_underflow() {
        let _ = &Int::one() - &Int::from_hex("0x2").unwrap();
    }
}

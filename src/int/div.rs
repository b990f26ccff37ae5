//! [`Int`] division operations.

use crate::{Error, Int, Limb, Result, WideWord, Word};
use core::ops::{Div, DivAssign, Rem, RemAssign};

impl Int {
    /// Computes `self / rhs` and `self % rhs` in one pass.
    ///
    /// Divisors of two or more limbs go through Knuth's Algorithm D with
    /// scalar normalization; a single-limb divisor uses a high-to-low walk
    /// with a double-width running remainder.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(Error::InvalidArgument("division by zero"));
        }
        if rhs.nlimbs() == 1 {
            let (quotient, remainder) = self.div_rem_limb(rhs.limbs[0]);
            return Ok((quotient, Int::from(remainder)));
        }
        self.div_rem_knuth(rhs)
    }

    /// Computes `self % rhs`.
    pub fn rem_int(&self, rhs: &Self) -> Result<Self> {
        Ok(self.div_rem(rhs)?.1)
    }

    /// Division by a single limb.
    pub(crate) fn div_rem_limb(&self, divisor: Limb) -> (Self, Limb) {
        debug_assert!(!divisor.is_zero());
        let mut limbs = vec![Limb::ZERO; self.nlimbs()];
        let mut rem = Limb::ZERO;

        for i in (0..self.nlimbs()).rev() {
            let (q, r) = Limb::div_wide(rem, self.limbs[i], divisor);
            limbs[i] = q;
            rem = r;
        }

        (Int::from_limbs(limbs), rem)
    }

    /// Remainder of division by a single limb.
    pub fn rem_limb(&self, divisor: Limb) -> Limb {
        self.div_rem_limb(divisor).1
    }

    /// Knuth, TAOCP vol. 2, section 4.3.1, Algorithm D.
    ///
    /// Both operands are scaled by `B / (top_limb(divisor) + 1)` so the
    /// divisor's top limb is at least half the radix, and the scaled
    /// dividend gets a leading zero limb so that every window's quotient
    /// digit fits in a single limb. The remainder is recovered by
    /// back-multiplying against the unscaled operands, undoing the
    /// normalization in the same step.
    fn div_rem_knuth(&self, divisor: &Self) -> Result<(Self, Self)> {
        if self < divisor {
            return Ok((Int::zero(), self.clone()));
        }

        let radix: WideWord = 1 << Limb::BITS;
        let scale = Limb((radix / (divisor.limbs[divisor.nlimbs() - 1].0 as WideWord + 1)) as Word);
        let mut a = self.mul_limb(scale);
        let d = divisor.mul_limb(scale);

        let n = a.nlimbs();
        let m = d.nlimbs();
        let d_top = d.limbs[m - 1].0 as WideWord;
        let d_next = d.limbs[m - 2].0 as WideWord;
        debug_assert!(d_top >= radix / 2);

        // leading zero limb: the first window reads it as its high half
        a.limbs.push(Limb::ZERO);

        let mut quotient = vec![Limb::ZERO; n - m + 1];

        for i in (0..=n - m).rev() {
            // Estimate the quotient digit from the top two limbs of the
            // m+1-limb window, then refine it against the divisor's second
            // limb; the refined digit is below the radix and at most one
            // above the true digit.
            let hi = a.limbs[i + m].0 as WideWord;
            let next = a.limbs[i + m - 1].0 as WideWord;
            let third = a.limbs[i + m - 2].0 as WideWord;

            let mut qhat = ((hi << Limb::BITS) | next) / d_top;
            let mut rhat = ((hi << Limb::BITS) | next) % d_top;
            while qhat >= radix || qhat * d_next > ((rhat << Limb::BITS) | third) {
                qhat -= 1;
                rhat += d_top;
                if rhat >= radix {
                    break;
                }
            }
            debug_assert!(qhat < radix);

            let t = d.mul_limb(Limb(qhat as Word));
            let window = Int::from_limbs(a.limbs[i..=i + m].to_vec());
            let mut rem = match window.checked_sub(&t) {
                Some(rem) => rem,
                // the estimate sits one above the true digit: step the
                // digit down and add the divisor back
                None => {
                    qhat -= 1;
                    (&window + &d)
                        .checked_sub(&t)
                        .ok_or(Error::InvariantViolation(
                            "division add-back step underflowed",
                        ))?
                }
            };

            let mut corrections = 0;
            while rem >= d {
                qhat += 1;
                corrections += 1;
                if corrections > 3 {
                    return Err(Error::InvariantViolation(
                        "division correction loop exceeded three iterations",
                    ));
                }
                rem = &rem - &d;
            }

            // Write the corrected window back, zeroing the positions the
            // remainder no longer covers.
            for j in 0..=m {
                a.limbs[i + j] = rem.limb(j);
            }

            quotient[i] = Limb(qhat as Word);
        }

        let quotient = Int::from_limbs(quotient);
        let remainder = self - &(&quotient * divisor);
        Ok((quotient, remainder))
    }
}

impl Div<&Int> for &Int {
    type Output = Int;

    fn div(self, rhs: &Int) -> Int {
        self.div_rem(rhs).expect("attempted to divide by zero").0
    }
}

impl Div<&Int> for Int {
    type Output = Int;

    fn div(self, rhs: &Int) -> Int {
        &self / rhs
    }
}

impl Div<Int> for &Int {
    type Output = Int;

    fn div(self, rhs: Int) -> Int {
        self / &rhs
    }
}

impl Div for Int {
    type Output = Int;

    fn div(self, rhs: Int) -> Int {
        &self / &rhs
    }
}

impl Rem<&Int> for &Int {
    type Output = Int;

    fn rem(self, rhs: &Int) -> Int {
        self.div_rem(rhs).expect("attempted to divide by zero").1
    }
}

impl Rem<&Int> for Int {
    type Output = Int;

    fn rem(self, rhs: &Int) -> Int {
        &self % rhs
    }
}

impl Rem<Int> for &Int {
    type Output = Int;

    fn rem(self, rhs: Int) -> Int {
        self % &rhs
    }
}

impl Rem for Int {
    type Output = Int;

    fn rem(self, rhs: Int) -> Int {
        &self % &rhs
    }
}

impl Rem<Word> for &Int {
    type Output = Word;

    fn rem(self, rhs: Word) -> Word {
        assert!(rhs != 0, "attempted to divide by zero");
        self.rem_limb(Limb(rhs)).0
    }
}

impl Rem<Word> for Int {
    type Output = Word;

    fn rem(self, rhs: Word) -> Word {
        &self % rhs
    }
}

impl DivAssign<&Int> for Int {
    fn div_assign(&mut self, rhs: &Int) {
        *self = &*self / rhs;
    }
}

impl RemAssign<&Int> for Int {
    fn rem_assign(&mut self, rhs: &Int) {
        *self = &*self % rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Int};

    #[test]
    fn div_rem_small() {
        let a = Int::from_hex("0x64").unwrap();
        let b = Int::from_hex("0x7").unwrap();
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q.to_hex(), "0xe");
        assert_eq!(r.to_hex(), "0x2");
    }

    #[test]
    fn div_by_zero() {
        let a = Int::from_hex("0x64").unwrap();
        assert_eq!(
            a.div_rem(&Int::zero()),
            Err(Error::InvalidArgument("division by zero"))
        );
    }

    #[test]
    fn div_smaller_dividend() {
        let a = Int::from_hex("0x7").unwrap();
        let b = Int::from_hex("0xdeadbeefcafebabe55aa").unwrap();
        let (q, r) = a.div_rem(&b).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, a);
    }

    #[test]
    fn div_equal_operands() {
        let a = Int::from_hex("0xdeadbeefcafebabe55aa").unwrap();
        let (q, r) = a.div_rem(&a).unwrap();
        assert_eq!(q, Int::one());
        assert!(r.is_zero());
    }

    #[test]
    fn div_known_quotient() {
        let x = Int::from_hex("0xdeadbeefcafebabe1234567890abcdef55aa55aa55aa55aa").unwrap();
        let y = Int::from_hex("0x1f2e3d4c5b6a798800ff").unwrap();
        let (q, r) = x.div_rem(&y).unwrap();
        assert_eq!(q.to_hex(), "0x7243e211692a2a8f81fb150e2d063");
        assert_eq!(r.to_hex(), "0xe29ceb31d0f4424c30d");
    }

    // A dividend/divisor pair whose first window drives the quotient
    // estimator through its worst case.
    #[test]
    fn div_hard_estimator_case() {
        let a = Int::from_hex("0x1c130ff1327fe487584457e1f5c16bbdd80ab606a5600d5d20").unwrap();
        let d = Int::from_hex("0x1205152f6707c1f88495ffe043ed32ac75074905968376f6d6").unwrap();
        let (q, r) = a.div_rem(&d).unwrap();
        assert_eq!(q, Int::one());
        assert_eq!(
            r.to_hex(),
            "0xa0dfac1cb78228ed3ae5801b1d4391163036d010edc96664a"
        );
    }

    // The dividend's high limbs are all ones, so the top windows saturate
    // the raw digit estimate at or above the radix before clamping.
    #[test]
    fn div_saturated_top_windows() {
        let a = Int::from_hex("0xffffffffffffffffffffffffffffffffffffffffffffffff").unwrap();
        let d = Int::from_hex("0x8000000000000000ffffffffffffffff").unwrap();
        let (q, r) = a.div_rem(&d).unwrap();
        assert_eq!(q.to_hex(), "0x1fffffffffffffffc");
        assert_eq!(r.to_hex(), "0x5fffffffffffffffb");
        assert_eq!(&(&q * &d) + &r, a);
    }

    // A pair whose refined first-window estimate is still one above the
    // true digit, forcing the add-back step.
    #[test]
    fn div_add_back_window() {
        let a = Int::from_hex(
            "0x7fffffffffffffff800000000000000000000000000000000000000000000000",
        )
        .unwrap();
        let d = Int::from_hex("0x800000000000000000000000000000000000000000000001").unwrap();
        let (q, r) = a.div_rem(&d).unwrap();
        assert_eq!(q.to_hex(), "0xfffffffffffffffe");
        assert_eq!(
            r.to_hex(),
            "0x7fffffffffffffffffffffffffffffff0000000000000002"
        );
        assert_eq!(&(&q * &d) + &r, a);
    }

    #[test]
    fn div_reconstructs_dividend() {
        let x = Int::from_hex("0x1c130ff1327fe487584457e1f5c16bbdd80ab606a5600d5d20").unwrap();
        let y = Int::from_hex("0x495ffe043ed32ac75074905").unwrap();
        let (q, r) = x.div_rem(&y).unwrap();
        assert_eq!(&(&q * &y) + &r, x);
        assert!(r < y);
    }

    #[test]
    fn rem_limb_small() {
        let a = Int::from_hex("0xffeeccbbaa99887766").unwrap();
        assert_eq!(&a % 997, 648);
    }

    #[test]
    #[should_panic(expected = "attempted to divide by zero")]
    fn rem_operator_panics_on_zero() {
        let a = Int::from_hex("0x64").unwrap();
        let _ = &a % &Int::zero();
    }
}

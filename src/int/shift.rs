//! [`Int`] shift operations.

use crate::{Error, Int, Limb, Result};
use core::ops::ShrAssign;

impl Int {
    /// Shifts right in place by `shift` bits.
    ///
    /// The contract covers `0 <= shift <= Limb::BITS`; larger amounts fail
    /// with [`Error::InvalidArgument`].
    pub fn checked_shr_assign(&mut self, shift: u32) -> Result<()> {
        if shift > Limb::BITS {
            return Err(Error::InvalidArgument(
                "shift amount exceeds a single limb width",
            ));
        }
        if shift == 0 {
            return Ok(());
        }
        if shift == Limb::BITS {
            *self = self.shr_limbs(1);
            return Ok(());
        }

        let up = Limb::BITS - shift;
        let mut carry = Limb::ZERO;
        for limb in self.limbs.iter_mut().rev() {
            // low `shift` bits of this limb become the next lower limb's top
            let next_carry = Limb(limb.0 << up);
            *limb = Limb((limb.0 >> shift) | carry.0);
            carry = next_carry;
        }

        self.trim();
        Ok(())
    }

    /// Shift left by whole limbs: multiply by `B^count`.
    pub(crate) fn shl_limbs(&self, count: usize) -> Self {
        if self.is_zero() {
            return Int::zero();
        }
        let mut limbs = vec![Limb::ZERO; count + self.nlimbs()];
        limbs[count..].copy_from_slice(&self.limbs);
        Int { limbs }
    }

    /// Shift right by whole limbs: divide by `B^count`.
    pub(crate) fn shr_limbs(&self, count: usize) -> Self {
        if count >= self.nlimbs() {
            return Int::zero();
        }
        Int::from_limbs(self.limbs[count..].to_vec())
    }

    /// The `count` least significant limbs: the value modulo `B^count`.
    pub(crate) fn low_limbs(&self, count: usize) -> Self {
        Int::from_limbs(self.limbs[..count.min(self.nlimbs())].to_vec())
    }
}

impl ShrAssign<u32> for Int {
    fn shr_assign(&mut self, shift: u32) {
        self.checked_shr_assign(shift)
            .expect("attempted to shift right by more than a limb width");
    }
}

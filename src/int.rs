//! Heap-allocated arbitrary-precision unsigned integers.

mod add;
mod bits;
mod cmp;
mod div;
mod encoding;
mod from;
mod mul;
pub(crate) mod rand;
mod shift;
pub(crate) mod signed;
mod sub;

use crate::Limb;

/// Arbitrary-precision unsigned integer.
///
/// Limbs are stored from least significant to most significant and kept
/// trimmed: the top limb is non-zero unless the value itself is zero, which
/// is represented as a single zero limb. Every operation that can shrink a
/// value re-trims before returning, so comparisons may order by limb count
/// first.
///
/// Values are immutable by convention: each arithmetic operator returns a
/// fresh `Int`. The only in-place mutations are `>>=` and the window
/// rewriting inside long division, both confined to a single owning value.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Int {
    /// Little-endian limbs; `limbs[0]` is least significant.
    pub(crate) limbs: Vec<Limb>,
}

impl Int {
    /// The value `0`.
    pub fn zero() -> Self {
        Self {
            limbs: vec![Limb::ZERO],
        }
    }

    /// The value `1`.
    pub fn one() -> Self {
        Self {
            limbs: vec![Limb::ONE],
        }
    }

    /// Is this [`Int`] equal to zero?
    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0].is_zero()
    }

    /// Is the least significant bit set?
    pub fn is_odd(&self) -> bool {
        self.limbs[0].0 & 1 == 1
    }

    /// Borrow the limbs of this [`Int`], least significant first.
    pub fn as_limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Number of significant limbs.
    #[inline]
    pub(crate) fn nlimbs(&self) -> usize {
        self.limbs.len()
    }

    /// Limb at `index`, or zero above the top limb.
    #[inline]
    pub(crate) fn limb(&self, index: usize) -> Limb {
        self.limbs.get(index).copied().unwrap_or(Limb::ZERO)
    }

    /// Construct from a little-endian limb vector, trimming trailing zeros.
    pub(crate) fn from_limbs(limbs: Vec<Limb>) -> Self {
        let mut ret = Self { limbs };
        ret.trim();
        ret
    }

    /// Drop trailing zero limbs; zero keeps exactly one limb.
    pub(crate) fn trim(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last() == Some(&Limb::ZERO) {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.limbs.push(Limb::ZERO);
        }
    }
}

impl Default for Int {
    fn default() -> Self {
        Self::zero()
    }
}

impl num_traits::Zero for Int {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        Int::is_zero(self)
    }
}

impl num_traits::One for Int {
    fn one() -> Self {
        Self::one()
    }

    fn is_one(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == Limb::ONE
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for Int {
    fn zeroize(&mut self) {
        use zeroize::Zeroize;
        self.limbs.zeroize();
    }
}

//! Sign-magnitude integers for the extended Euclidean step.

use crate::Int;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Sign-magnitude integer. Zero always carries a positive sign.
///
/// Only the extended Euclidean algorithm needs signed values; the public
/// bignum stays unsigned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct SignedInt {
    negative: bool,
    magnitude: Int,
}

impl SignedInt {
    pub fn zero() -> Self {
        Self::from_int(Int::zero())
    }

    pub fn one() -> Self {
        Self::from_int(Int::one())
    }

    /// A non-negative value.
    pub fn from_int(magnitude: Int) -> Self {
        Self {
            negative: false,
            magnitude,
        }
    }

    /// Normalizes the sign so zero is never negative.
    fn new(negative: bool, magnitude: Int) -> Self {
        Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn magnitude(&self) -> &Int {
        &self.magnitude
    }

    pub fn into_magnitude(self) -> Int {
        self.magnitude
    }
}

impl Add for &SignedInt {
    type Output = SignedInt;

    fn add(self, rhs: &SignedInt) -> SignedInt {
        if self.negative == rhs.negative {
            SignedInt::new(self.negative, &self.magnitude + &rhs.magnitude)
        } else if self.magnitude >= rhs.magnitude {
            SignedInt::new(self.negative, &self.magnitude - &rhs.magnitude)
        } else {
            SignedInt::new(rhs.negative, &rhs.magnitude - &self.magnitude)
        }
    }
}

impl Sub for &SignedInt {
    type Output = SignedInt;

    fn sub(self, rhs: &SignedInt) -> SignedInt {
        self + &-rhs.clone()
    }
}

impl Neg for SignedInt {
    type Output = SignedInt;

    fn neg(self) -> SignedInt {
        SignedInt::new(!self.negative, self.magnitude)
    }
}

impl Mul for &SignedInt {
    type Output = SignedInt;

    fn mul(self, rhs: &SignedInt) -> SignedInt {
        SignedInt::new(
            self.negative ^ rhs.negative,
            &self.magnitude * &rhs.magnitude,
        )
    }
}

impl Div for &SignedInt {
    type Output = SignedInt;

    /// Truncating division; the quotient's sign is the XOR of the operands'.
    fn div(self, rhs: &SignedInt) -> SignedInt {
        SignedInt::new(
            self.negative ^ rhs.negative,
            &self.magnitude / &rhs.magnitude,
        )
    }
}

impl Rem for &SignedInt {
    type Output = SignedInt;

    /// The remainder's sign follows the dividend.
    fn rem(self, rhs: &SignedInt) -> SignedInt {
        SignedInt::new(self.negative, &self.magnitude % &rhs.magnitude)
    }
}

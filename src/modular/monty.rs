//! Montgomery multiplication for odd moduli.

use crate::{Error, Int, Limb, Result};

/// Precomputed per-modulus state for Montgomery multiplication.
///
/// For an odd modulus `m` of `k` limbs, `R = B^k` where `B` is the limb
/// radix. A value in Montgomery form carries an implicit factor of `R`
/// modulo `m`; multiplying two such values and stripping one `R` costs a
/// plain multiplication, two low-limb truncations, and a limb-count shift
/// instead of a long division.
pub(crate) struct MontyParams {
    modulus: Int,
    /// `R - m⁻¹ mod R`: the negated inverse used by the reduction step.
    m_neg_inv: Int,
    /// `R mod m`: the value 1 in Montgomery form.
    one: Int,
    /// Limb count of the modulus.
    k: usize,
}

impl MontyParams {
    /// Precomputes the Montgomery state for `modulus`, which must be odd.
    pub fn new(modulus: &Int) -> Result<Self> {
        if !modulus.is_odd() {
            return Err(Error::InvalidArgument(
                "modulus for Montgomery arithmetic must be odd",
            ));
        }

        let k = modulus.nlimbs();
        let r_bits = k * Limb::BITS as usize;

        // m⁻¹ mod R by squaring and multiplying in ℤ/R. An odd m has
        // multiplicative order dividing 2^(r-2) there, so m^(2^(r-1) - 1)
        // is its inverse; each product is truncated to the low k limbs.
        let mut inv = Int::one();
        let mut base = modulus.clone();
        for _ in 1..r_bits {
            inv = (&inv * &base).low_limbs(k);
            base = (&base * &base).low_limbs(k);
        }

        let r = Int::one().shl_limbs(k);
        let m_neg_inv = &r - &inv;
        let one = r.rem_int(modulus)?;

        Ok(Self {
            modulus: modulus.clone(),
            m_neg_inv,
            one,
            k,
        })
    }

    /// The value 1 in Montgomery form.
    pub fn one(&self) -> &Int {
        &self.one
    }

    /// Conversion into Montgomery form: `(x * R) mod m`.
    pub fn transform(&self, x: &Int) -> Result<Int> {
        x.shl_limbs(self.k).rem_int(&self.modulus)
    }

    /// Montgomery product `a * b * R⁻¹ mod m` for reduced operands.
    pub fn montmul(&self, a: &Int, b: &Int) -> Int {
        let c = a * b;
        let q = (&c.low_limbs(self.k) * &self.m_neg_inv).low_limbs(self.k);
        // the low k limbs of c + q*m are zero by construction, so the bit
        // shift is exactly a limb-count truncation
        let mut t = (&c + &(&q * &self.modulus)).shr_limbs(self.k);
        if t >= self.modulus {
            t = &t - &self.modulus;
        }
        t
    }

    /// Leaves Montgomery form: `montmul(x, 1)` strips the implicit `R`.
    pub fn reduce(&self, x: &Int) -> Int {
        self.montmul(x, &Int::one())
    }
}

#[cfg(test)]
mod tests {
    use super::MontyParams;
    use crate::{Error, Int};

    #[test]
    fn even_modulus_is_rejected() {
        let m = Int::from_hex("0x10").unwrap();
        assert_eq!(
            MontyParams::new(&m).err(),
            Some(Error::InvalidArgument(
                "modulus for Montgomery arithmetic must be odd"
            ))
        );
    }

    #[test]
    fn transform_reduce_round_trip() {
        let m = Int::from_hex("0xfedcba9876543211").unwrap();
        let params = MontyParams::new(&m).unwrap();
        for hex in ["0x0", "0x1", "0x123456789abcdef", "0xfedcba9876543210"] {
            let x = Int::from_hex(hex).unwrap();
            let x_mont = params.transform(&x).unwrap();
            assert_eq!(params.reduce(&x_mont), x);
        }
    }

    #[test]
    fn montmul_matches_plain_modular_product() {
        let m = Int::from_hex("0x1205152f6707c1f88495ffe043ed32ac75074905968376f6d6").unwrap();
        let a = Int::from_hex("0xdeadbeefcafebabe1234567890abcdef55aa55aa55aa55aa").unwrap();
        let b = Int::from_hex("0x1c130ff1327fe487584457e1f5c16bbdd80ab606a5600d5d20").unwrap();

        let params = MontyParams::new(&m).unwrap();
        let a_mont = params.transform(&a).unwrap();
        let b_mont = params.transform(&b).unwrap();
        let product = params.reduce(&params.montmul(&a_mont, &b_mont));

        let expected = (&a * &b).rem_int(&m).unwrap();
        assert_eq!(product, expected);
    }

    #[test]
    fn one_is_r_mod_m() {
        let m = Int::from_hex("0x10001").unwrap();
        let params = MontyParams::new(&m).unwrap();
        assert_eq!(params.reduce(params.one()), Int::one());
    }
}

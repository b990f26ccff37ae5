//! Equivalence tests between [`rsa_bigint::fast_odd_exp_mod`] and
//! `num_bigint::BigUint::modpow`.

use num_bigint::BigUint;
use proptest::prelude::*;
use rsa_bigint::{fast_odd_exp_mod, Int};

fn to_biguint(value: &Int) -> BigUint {
    let body = value.to_hex();
    BigUint::parse_bytes(body.trim_start_matches("0x").as_bytes(), 16).unwrap()
}

fn to_int(value: &BigUint) -> Int {
    Int::from_hex(&format!("0x{value:x}")).unwrap()
}

prop_compose! {
    fn int(max_bytes: usize)(bytes in proptest::collection::vec(any::<u8>(), 1..max_bytes)) -> Int {
        to_int(&BigUint::from_bytes_be(&bytes))
    }
}

prop_compose! {
    /// An odd modulus greater than 1.
    fn odd_modulus()(value in int(24)) -> Int {
        let mut m = value;
        m.bit_set(0);
        if m == Int::one() {
            m = Int::from_hex("0x3").unwrap();
        }
        m
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn matches_reference_modpow(base in int(24), exp in int(8), modulus in odd_modulus()) {
        let ours = fast_odd_exp_mod(&base, &exp, &modulus).unwrap();
        let expected = to_biguint(&base).modpow(&to_biguint(&exp), &to_biguint(&modulus));
        prop_assert_eq!(to_biguint(&ours), expected);
    }

    #[test]
    fn result_is_reduced(base in int(24), exp in int(4), modulus in odd_modulus()) {
        let ours = fast_odd_exp_mod(&base, &exp, &modulus).unwrap();
        prop_assert!(ours < modulus);
    }

    #[test]
    fn even_modulus_is_rejected(base in int(8), exp in int(4), modulus in int(8)) {
        let mut even = modulus.mul_limb(rsa_bigint::Limb(2));
        if even.is_zero() {
            even = Int::from_hex("0x4").unwrap();
        }
        prop_assert!(fast_odd_exp_mod(&base, &exp, &even).is_err());
    }
}

//! Hex encoding for [`Int`].
//!
//! Hex strings are the only textual format: a required `0x` prefix,
//! lowercase digits, no separators, no sign. Output prints the top limb
//! without leading zeros and every lower limb zero-padded to a full limb's
//! worth of digits.

use crate::{Error, Int, Limb, Result, Word};
use core::fmt;
use core::fmt::Write as _;
use core::str::FromStr;

impl Int {
    /// Parses a `0x`-prefixed lowercase hex string.
    ///
    /// Groups of `Limb::NIBBLES` digits, right-aligned, populate the limbs
    /// from least to most significant.
    pub fn from_hex(s: &str) -> Result<Self> {
        let body = s
            .strip_prefix("0x")
            .ok_or(Error::ParseError("missing 0x prefix"))?;
        if body.is_empty() {
            return Err(Error::ParseError("empty hex body"));
        }

        let bytes = body.as_bytes();
        let mut limbs = Vec::with_capacity(bytes.len().div_ceil(Limb::NIBBLES));
        let mut end = bytes.len();

        while end > 0 {
            let start = end.saturating_sub(Limb::NIBBLES);
            let mut word: Word = 0;
            for &c in &bytes[start..end] {
                let digit = match c {
                    b'0'..=b'9' => c - b'0',
                    b'a'..=b'f' => c - b'a' + 10,
                    _ => return Err(Error::ParseError("invalid hex digit")),
                };
                word = (word << 4) | digit as Word;
            }
            limbs.push(Limb(word));
            end = start;
        }

        Ok(Int::from_limbs(limbs))
    }

    /// Canonical hex form of this value.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(2 + self.nlimbs() * Limb::NIBBLES);
        out.push_str("0x");

        for (i, limb) in self.limbs.iter().enumerate().rev() {
            if i == self.nlimbs() - 1 {
                write!(out, "{:x}", limb.0).expect("writing to a String cannot fail");
            } else {
                write!(out, "{limb:x}").expect("writing to a String cannot fail");
            }
        }

        out
    }
}

impl FromStr for Int {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Int({})", self.to_hex())
    }
}

impl fmt::LowerHex for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(self.to_hex().trim_start_matches("0x"))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Int {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Int {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize<'_>>::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

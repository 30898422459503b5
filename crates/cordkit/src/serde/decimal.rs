use crate::decimal;
use core::fmt;
use serde::de::{self, Visitor};

/// Accepts a `u64` written either as a decimal string or as a native
/// non-negative integer.
///
/// Strings go through the same strict parser as [`crate::Snowflake::decode`],
/// so `"-1"`, `" 1"` and values past `u64::MAX` are rejected.
pub(crate) struct DecimalVisitor {
    pub(crate) expecting: &'static str,
}

impl Visitor<'_> for DecimalVisitor {
    type Value = u64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.expecting)
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        decimal::parse_u64(v).map_err(E::custom)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }
}

pub mod as_decimal_u64 {
    use super::DecimalVisitor;
    use serde::{Deserializer, Serializer};

    /// Serialize a `u64` as its exact decimal string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(value: &u64, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(value)
    }

    /// Deserialize a `u64` from a decimal string or a native integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is neither, or does not fit in 64 bits.
    pub fn deserialize<'de, D>(d: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_any(DecimalVisitor {
            expecting: "a decimal string or unsigned integer",
        })
    }
}

use super::decimal::DecimalVisitor;
use crate::Snowflake;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Snowflakes serialize as decimal strings, the form Discord's API uses
/// because JSON numbers lose precision past 2^53 in many clients.
impl Serialize for Snowflake {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(self)
    }
}

/// Accepts a decimal string or a native unsigned integer.
impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_any(DecimalVisitor {
            expecting: "a decimal snowflake string or unsigned integer",
        })
        .map(Self::from_raw)
    }
}

pub mod as_native_snowflake {
    use crate::Snowflake;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialize a snowflake as its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &Snowflake, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    /// Deserialize a snowflake from its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying deserializer fails or the value is
    /// not an unsigned 64-bit integer.
    pub fn deserialize<'de, D>(d: D) -> Result<Snowflake, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(d).map(Snowflake::from_raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Row {
        id: Snowflake,
        #[serde(with = "as_native_snowflake")]
        native: Snowflake,
    }

    #[test]
    fn serializes_as_decimal_string() {
        let id = Snowflake::from_raw(u64::MAX);
        let row = Row { id, native: id };
        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!({ "id": "18446744073709551615", "native": 18_446_744_073_709_551_615u64 })
        );
    }

    #[test]
    fn deserializes_string_or_integer() {
        let from_str: Snowflake = serde_json::from_str(r#""175928847299117063""#).unwrap();
        let from_int: Snowflake = serde_json::from_str("175928847299117063").unwrap();
        assert_eq!(from_str, from_int);
        assert_eq!(from_str.increment(), 7);
    }

    #[test]
    fn rejects_bad_strings() {
        for input in [r#""""#, r#""-1""#, r#""12a""#, r#""18446744073709551616""#, "-1", "1.5"] {
            assert!(
                serde_json::from_str::<Snowflake>(input).is_err(),
                "{input}"
            );
        }
    }

    #[test]
    fn error_message_names_the_failure() {
        let err = serde_json::from_str::<Snowflake>(r#""18446744073709551616""#).unwrap_err();
        assert!(err.to_string().contains("out of range"), "{err}");
    }
}

//! Error types for `cordkit`.
//!
//! Every fallible operation in this crate returns its error as a value. None of
//! them are fatal: a failed decode or lookup leaves whatever state the caller
//! holds (e.g. a [`crate::PermissionSet`]) untouched.

/// A result type defaulting to the crate-level [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors produced while parsing a decimal Snowflake or permission integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DecodeError {
    /// The input was empty or contained something other than ASCII digits.
    ///
    /// Signs, whitespace and radix prefixes are all rejected.
    #[error("invalid format: expected one or more ASCII digits")]
    InvalidFormat,

    /// The input was a well-formed digit string whose value does not fit in
    /// 64 bits.
    #[error("out of range: value does not fit in 64 bits")]
    OutOfRange,
}

/// All errors that `cordkit` can produce.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A decimal ID or permission integer could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// No catalog entry matches the requested permission name.
    #[error("unknown permission: {name}")]
    UnknownPermission { name: String },

    /// A permission set holds bits that no catalog entry names.
    #[error("unknown permission bits: {bits:#x}")]
    UnknownPermissionBits { bits: u64 },

    /// A color was not six hex digits with an optional leading `#`.
    #[error("invalid color: {input:?} (expected #RRGGBB)")]
    InvalidColor { input: String },

    /// An embed already carries the maximum number of fields.
    #[error("an embed holds at most {max} fields")]
    TooManyFields { max: usize },

    /// Input was not valid JSON.
    #[error("invalid JSON: {reason}")]
    InvalidJson { reason: String },

    /// JSON parsed but holds no embed object.
    #[error("expected an embed object or {{ \"embeds\": [...] }}")]
    InvalidEmbed,

    /// A pasted object has no non-empty string under the asset's key.
    #[error("could not find {key:?} in the JSON")]
    AssetHashNotFound { key: &'static str },

    /// A CDN URL was requested without an asset hash.
    #[error("missing asset hash")]
    MissingAssetHash,

    /// The CDN only serves power-of-two sizes between 16 and 4096.
    #[error("invalid asset size: {size}")]
    InvalidAssetSize { size: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_converts_into_crate_error() {
        let err: Error = DecodeError::OutOfRange.into();
        assert_eq!(err, Error::Decode(DecodeError::OutOfRange));
        assert_eq!(
            err.to_string(),
            "out of range: value does not fit in 64 bits"
        );
    }

    #[test]
    fn unknown_permission_names_the_input() {
        let err = Error::UnknownPermission {
            name: "FLY".into(),
        };
        assert_eq!(err.to_string(), "unknown permission: FLY");
    }

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            Error::UnknownPermissionBits { bits: 1 << 47 }.to_string(),
            "unknown permission bits: 0x800000000000"
        );
        assert_eq!(
            Error::InvalidColor { input: "#12".into() }.to_string(),
            "invalid color: \"#12\" (expected #RRGGBB)"
        );
        assert_eq!(
            Error::InvalidEmbed.to_string(),
            "expected an embed object or { \"embeds\": [...] }"
        );
        assert_eq!(
            Error::AssetHashNotFound { key: "icon" }.to_string(),
            "could not find \"icon\" in the JSON"
        );
    }
}

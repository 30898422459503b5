//! Discord CDN asset URLs.

use crate::{Error, Result, Snowflake};
use core::fmt;
use core::str::FromStr;

/// Base URL of Discord's media CDN.
pub const CDN_BASE_URL: &str = "https://cdn.discordapp.com";

/// Number of built-in default avatars.
pub const DEFAULT_AVATAR_COUNT: u64 = 6;

/// Smallest and largest sizes the CDN will resize to.
pub const MIN_ASSET_SIZE: u32 = 16;
pub const MAX_ASSET_SIZE: u32 = 4096;

/// Kinds of hashed image assets addressed by an owner ID.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum AssetKind {
    /// User avatar, keyed by user ID.
    #[default]
    Avatar,
    /// Guild icon, keyed by guild ID.
    Icon,
    /// User or guild banner.
    Banner,
}

impl AssetKind {
    /// CDN path segment for this kind.
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Avatar => "avatars",
            Self::Icon => "icons",
            Self::Banner => "banners",
        }
    }

    /// Lowercase name, also the JSON key holding this kind's hash on user and
    /// guild objects.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Avatar => "avatar",
            Self::Icon => "icon",
            Self::Banner => "banner",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown asset kind: {0:?} (expected avatar, icon or banner)")]
pub struct ParseAssetKindError(pub String);

impl FromStr for AssetKind {
    type Err = ParseAssetKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "avatar" => Ok(Self::Avatar),
            "icon" => Ok(Self::Icon),
            "banner" => Ok(Self::Banner),
            _ => Err(ParseAssetKindError(s.to_string())),
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the CDN accepts `size`: a power of two in `16..=4096`.
pub const fn is_valid_size(size: u32) -> bool {
    size.is_power_of_two() && size >= MIN_ASSET_SIZE && size <= MAX_ASSET_SIZE
}

/// URL of a hashed PNG asset owned by `target`.
///
/// ```
/// use cordkit::{AssetKind, Snowflake, asset_url};
///
/// let url = asset_url(AssetKind::Icon, Snowflake::from_raw(81384788765712384), "a1b2c3", 512);
/// assert_eq!(
///     url.unwrap(),
///     "https://cdn.discordapp.com/icons/81384788765712384/a1b2c3.png?size=512"
/// );
/// ```
///
/// # Errors
///
/// [`Error::MissingAssetHash`] for an empty hash and
/// [`Error::InvalidAssetSize`] for a size the CDN does not serve.
pub fn asset_url(kind: AssetKind, target: Snowflake, hash: &str, size: u32) -> Result<String> {
    if hash.is_empty() {
        return Err(Error::MissingAssetHash);
    }
    if !is_valid_size(size) {
        return Err(Error::InvalidAssetSize { size });
    }
    Ok(format!(
        "{CDN_BASE_URL}/{}/{target}/{hash}.png?size={size}",
        kind.path_segment()
    ))
}

/// Index of the built-in avatar shown for users without a custom one.
///
/// Derived from the creation timestamp: `(id >> 22) % 6`.
pub const fn default_avatar_index(id: &Snowflake) -> u64 {
    id.timestamp() % DEFAULT_AVATAR_COUNT
}

/// URL of the built-in avatar at [`default_avatar_index`].
pub fn default_avatar_url(id: &Snowflake) -> String {
    format!(
        "{CDN_BASE_URL}/embed/avatars/{}.png",
        default_avatar_index(id)
    )
}

/// Pulls the `kind` hash out of a pasted user or guild object, e.g. the
/// `"avatar"` member of a `GET /users/{id}` response.
///
/// ```
/// use cordkit::{AssetKind, extract_asset_hash};
///
/// let user = r#"{ "id": "80351110224678912", "avatar": "8342729096ea3675442027381ff50dfe" }"#;
/// assert_eq!(
///     extract_asset_hash(user, AssetKind::Avatar).unwrap(),
///     "8342729096ea3675442027381ff50dfe"
/// );
/// ```
///
/// # Errors
///
/// [`Error::InvalidJson`] if `json` does not parse, and
/// [`Error::AssetHashNotFound`] unless it is an object with a non-empty string
/// under the kind's key.
#[cfg(feature = "json")]
pub fn extract_asset_hash(json: &str, kind: AssetKind) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(|e| Error::InvalidJson {
        reason: e.to_string(),
    })?;
    match value.get(kind.as_str()) {
        Some(serde_json::Value::String(hash)) if !hash.is_empty() => Ok(hash.clone()),
        _ => Err(Error::AssetHashNotFound {
            key: kind.as_str(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_asset_kind() {
        let id = Snowflake::from_raw(175_928_847_299_117_063);
        for (kind, segment) in [
            (AssetKind::Avatar, "avatars"),
            (AssetKind::Icon, "icons"),
            (AssetKind::Banner, "banners"),
        ] {
            assert_eq!(
                asset_url(kind, id, "deadbeef", 1024).unwrap(),
                format!(
                    "https://cdn.discordapp.com/{segment}/175928847299117063/deadbeef.png?size=1024"
                )
            );
        }
    }

    #[test]
    fn rejects_missing_hash() {
        assert_eq!(
            asset_url(AssetKind::Avatar, Snowflake::from_raw(1), "", 1024),
            Err(Error::MissingAssetHash)
        );
    }

    #[test]
    fn only_power_of_two_sizes_in_range() {
        for size in [16, 32, 64, 128, 256, 512, 1024, 2048, 4096] {
            assert!(is_valid_size(size), "{size}");
        }
        for size in [0, 1, 8, 15, 100, 1000, 8192] {
            assert!(!is_valid_size(size), "{size}");
            assert_eq!(
                asset_url(AssetKind::Banner, Snowflake::from_raw(1), "abc", size),
                Err(Error::InvalidAssetSize { size })
            );
        }
    }

    #[test]
    fn default_avatar_uses_timestamp_bits() {
        let id = Snowflake::from_raw(175_928_847_299_117_063);
        assert_eq!(default_avatar_index(&id), 2);
        assert_eq!(
            default_avatar_url(&id),
            "https://cdn.discordapp.com/embed/avatars/2.png"
        );
        for raw in [0, 1 << 22, 5 << 22, 6 << 22, u64::MAX] {
            let id = Snowflake::from_raw(raw);
            assert_eq!(default_avatar_index(&id), (raw >> 22) % 6);
        }
    }

    #[test]
    fn asset_kind_parses_and_displays() {
        for kind in [AssetKind::Avatar, AssetKind::Icon, AssetKind::Banner] {
            assert_eq!(kind.to_string().parse::<AssetKind>(), Ok(kind));
        }
        assert!("emoji".parse::<AssetKind>().is_err());
    }

    #[cfg(feature = "json")]
    #[test]
    fn extracts_hash_for_each_kind() {
        let guild = r#"{ "id": "1", "icon": "a_f00d", "banner": "cafe", "avatar": null }"#;
        assert_eq!(extract_asset_hash(guild, AssetKind::Icon).unwrap(), "a_f00d");
        assert_eq!(extract_asset_hash(guild, AssetKind::Banner).unwrap(), "cafe");
        assert_eq!(
            extract_asset_hash(guild, AssetKind::Avatar),
            Err(Error::AssetHashNotFound { key: "avatar" })
        );
    }

    #[cfg(feature = "json")]
    #[test]
    fn hash_extraction_rejects_bad_input() {
        assert!(matches!(
            extract_asset_hash("{ avatar: 1", AssetKind::Avatar),
            Err(Error::InvalidJson { .. })
        ));
        for json in [r#"{ "avatar": "" }"#, r#"{ "avatar": 5 }"#, r#"["avatar"]"#, "42"] {
            assert_eq!(
                extract_asset_hash(json, AssetKind::Avatar),
                Err(Error::AssetHashNotFound { key: "avatar" }),
                "{json}"
            );
        }
    }
}

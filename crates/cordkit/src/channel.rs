//! Decorated channel names such as `💬︱general-chat`.

use crate::text::small_cap;
use core::fmt;
use core::str::FromStr;

/// Emoji prefixes commonly placed before a channel name. Each ends with the
/// `︱` separator.
pub const CHANNEL_PREFIXES: [&str; 23] = [
    "💬︱", "📢︱", "🔊︱", "📌︱", "📜︱", "🔒︱", "✨︱", "🔥︱", "💎︱", "🛠️︱", "🎮︱", "📷︱",
    "🧠︱", "🛡️︱", "🧩︱", "🎵︱", "📚︱", "🚀︱", "🎨︱", "💡︱", "✅︱", "❌︱", "👋︱",
];

/// Normalizes `name` the way Discord does for text channels: trimmed,
/// lowercased, whitespace runs turned into `-`, and anything other than
/// `a-z`, `0-9`, `-` and `_` removed.
///
/// ```
/// use cordkit::sanitize_channel_name;
///
/// assert_eq!(sanitize_channel_name("  General Chat! "), "general-chat");
/// ```
pub fn sanitize_channel_name(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut in_space = false;
    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_' {
            out.push(c);
        }
    }
    out
}

/// Lettering applied after sanitizing.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ChannelFont {
    #[default]
    Default,
    /// Letters replaced by Unicode small capitals.
    SmallCaps,
    /// Rendered in a monospace font by the client; the name itself is
    /// unchanged.
    Monospace,
    /// Dashes removed.
    Compact,
}

impl ChannelFont {
    /// Every font, in picker order.
    pub const ALL: [Self; 4] = [Self::Default, Self::SmallCaps, Self::Monospace, Self::Compact];

    /// Identifier accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::SmallCaps => "small-caps",
            Self::Monospace => "monospace",
            Self::Compact => "compact",
        }
    }

    /// Sanitizes `name` and applies this lettering.
    pub fn apply(self, name: &str) -> String {
        let base = sanitize_channel_name(name);
        match self {
            Self::Default | Self::Monospace => base,
            Self::SmallCaps => base.chars().map(small_cap).collect(),
            Self::Compact => base.replace('-', ""),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown channel font: {0:?} (expected default, small-caps, monospace or compact)")]
pub struct ParseChannelFontError(pub String);

impl FromStr for ChannelFont {
    type Err = ParseChannelFontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|font| font.as_str() == s)
            .ok_or_else(|| ParseChannelFontError(s.to_string()))
    }
}

impl fmt::Display for ChannelFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `prefix` followed by `name` in `font`.
pub fn decorate_channel(prefix: &str, font: ChannelFont, name: &str) -> String {
    let mut out = String::from(prefix);
    out.push_str(&font.apply(name));
    out
}

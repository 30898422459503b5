use crate::Snowflake;
use core::fmt;
use core::str::FromStr;

/// Render styles for Discord's `<t:SECONDS:STYLE>` timestamp markdown.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum TimestampStyle {
    /// `16:20`
    ShortTime,
    /// `16:20:30`
    LongTime,
    /// `20/04/2024`
    ShortDate,
    /// `20 April 2024`
    LongDate,
    /// `20 April 2024 16:20`
    #[default]
    ShortDateTime,
    /// `Saturday, 20 April 2024 16:20`
    LongDateTime,
    /// `2 months ago`
    Relative,
}

impl TimestampStyle {
    /// Every style, in the order Discord documents them.
    pub const ALL: [Self; 7] = [
        Self::ShortTime,
        Self::LongTime,
        Self::ShortDate,
        Self::LongDate,
        Self::ShortDateTime,
        Self::LongDateTime,
        Self::Relative,
    ];

    /// The single-character style code used in the markdown.
    pub const fn suffix(self) -> char {
        match self {
            Self::ShortTime => 't',
            Self::LongTime => 'T',
            Self::ShortDate => 'd',
            Self::LongDate => 'D',
            Self::ShortDateTime => 'f',
            Self::LongDateTime => 'F',
            Self::Relative => 'R',
        }
    }

    /// Name shown next to the rendered preview.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ShortTime => "Short Time",
            Self::LongTime => "Long Time",
            Self::ShortDate => "Short Date",
            Self::LongDate => "Long Date",
            Self::ShortDateTime => "Short Date/Time",
            Self::LongDateTime => "Long Date/Time",
            Self::Relative => "Relative",
        }
    }

    /// Inverse of [`TimestampStyle::suffix`]. Style codes are case-sensitive.
    pub const fn from_suffix(suffix: char) -> Option<Self> {
        match suffix {
            't' => Some(Self::ShortTime),
            'T' => Some(Self::LongTime),
            'd' => Some(Self::ShortDate),
            'D' => Some(Self::LongDate),
            'f' => Some(Self::ShortDateTime),
            'F' => Some(Self::LongDateTime),
            'R' => Some(Self::Relative),
            _ => None,
        }
    }
}

/// Error returned when a string is not one of the seven style codes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown timestamp style: {0:?} (expected one of t, T, d, D, f, F, R)")]
pub struct ParseStyleError(pub String);

impl FromStr for TimestampStyle {
    type Err = ParseStyleError;

    /// Parses the style code. Case matters: `d` and `D` are different styles.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_suffix(c),
            _ => None,
        }
        .ok_or_else(|| ParseStyleError(s.to_string()))
    }
}

impl fmt::Display for TimestampStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// Formats `unix_seconds` as Discord timestamp markdown.
///
/// ```
/// use cordkit::{TimestampStyle, format_timestamp};
///
/// assert_eq!(
///     format_timestamp(1_713_630_030, TimestampStyle::Relative),
///     "<t:1713630030:R>"
/// );
/// ```
pub fn format_timestamp(unix_seconds: u64, style: TimestampStyle) -> String {
    format!("<t:{unix_seconds}:{}>", style.suffix())
}

/// Timestamp markdown for the creation time of `id`.
pub fn snowflake_timestamp(id: &Snowflake, style: TimestampStyle) -> String {
    format_timestamp(id.unix_seconds(), style)
}

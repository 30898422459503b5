//! Text styling for chat messages and channel names.

use core::fmt;
use core::str::FromStr;

/// Unicode small capitals for `a..=z`. `q`, `s` and `x` have no usable
/// small-cap form and map to look-alikes or themselves.
const SMALL_CAPS: [char; 26] = [
    'ᴀ', 'ʙ', 'ᴄ', 'ᴅ', 'ᴇ', 'ғ', 'ɢ', 'ʜ', 'ɪ', 'ᴊ', 'ᴋ', 'ʟ', 'ᴍ', 'ɴ', 'ᴏ', 'ᴘ', 'ǫ', 'ʀ',
    's', 'ᴛ', 'ᴜ', 'ᴠ', 'ᴡ', 'x', 'ʏ', 'ᴢ',
];

pub(crate) const fn small_cap(c: char) -> char {
    if c.is_ascii_lowercase() {
        SMALL_CAPS[(c as u8 - b'a') as usize]
    } else {
        c
    }
}

const fn leet(c: char) -> char {
    match c {
        'a' => '4',
        'b' => '8',
        'e' => '3',
        'g' => '6',
        'i' | 'l' => '1',
        'o' => '0',
        's' => '5',
        't' => '7',
        'z' => '2',
        other => other,
    }
}

/// Ways to restyle a piece of text.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// `hElLo`: characters alternate lower/upper, starting lower.
    Mocking,
    /// `:regional_indicator_h:` emoji for each letter.
    Regional,
    /// `ʜᴇʟʟᴏ`
    SmallCaps,
    Upper,
    Lower,
    /// `Hello World`, with runs of whitespace collapsed.
    Title,
    /// Characters in reverse order.
    Reverse,
    /// `h3110`
    Leet,
    /// `hello_world`
    Snake,
    /// `hello-world`
    Kebab,
}

impl TextStyle {
    /// Every style, in display order.
    pub const ALL: [Self; 10] = [
        Self::Mocking,
        Self::Regional,
        Self::SmallCaps,
        Self::Upper,
        Self::Lower,
        Self::Title,
        Self::Reverse,
        Self::Leet,
        Self::Snake,
        Self::Kebab,
    ];

    /// Identifier accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mocking => "mocking",
            Self::Regional => "regional",
            Self::SmallCaps => "small-caps",
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Title => "title",
            Self::Reverse => "reverse",
            Self::Leet => "leet",
            Self::Snake => "snake",
            Self::Kebab => "kebab",
        }
    }

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mocking => "Mocking Case (sPoNgEbOb)",
            Self::Regional => "Regional Indicators (Emojis)",
            Self::SmallCaps => "Small Caps",
            Self::Upper => "UPPERCASE",
            Self::Lower => "lowercase",
            Self::Title => "Title Case",
            Self::Reverse => "Reverse Text",
            Self::Leet => "Leet Speak",
            Self::Snake => "snake_case",
            Self::Kebab => "kebab-case",
        }
    }

    /// Restyles `text`.
    ///
    /// ```
    /// use cordkit::TextStyle;
    ///
    /// assert_eq!(TextStyle::Mocking.apply("hello"), "hElLo");
    /// assert_eq!(TextStyle::Snake.apply("  Hello, World! "), "hello_world");
    /// ```
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Mocking => mocking(text),
            Self::Regional => regional(text),
            Self::SmallCaps => text.to_lowercase().chars().map(small_cap).collect(),
            Self::Upper => text.to_uppercase(),
            Self::Lower => text.to_lowercase(),
            Self::Title => title(text),
            Self::Reverse => text.chars().rev().collect(),
            Self::Leet => text.to_lowercase().chars().map(leet).collect(),
            Self::Snake => slug(text, '_', '-'),
            Self::Kebab => slug(text, '-', '_'),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown text style: {0:?}")]
pub struct ParseTextStyleError(pub String);

impl FromStr for TextStyle {
    type Err = ParseTextStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| ParseTextStyleError(s.to_string()))
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn mocking(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        if i % 2 == 0 {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
    }
    out
}

fn regional(text: &str) -> String {
    let parts: Vec<String> = text
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' => format!(":regional_indicator_{c}:"),
            ' ' => "   ".to_string(),
            other => other.to_string(),
        })
        .collect();
    parts.join(" ")
}

fn title(text: &str) -> String {
    let lower = text.to_lowercase();
    let words: Vec<String> = lower
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    words.join(" ")
}

/// Lowercases, drops everything but ASCII word characters, whitespace and
/// `-`, then replaces each run of whitespace and `joined` with `sep`.
fn slug(text: &str, sep: char, joined: char) -> String {
    let cleaned = text.trim().to_lowercase();
    let mut out = String::with_capacity(cleaned.len());
    let mut pending = false;
    for c in cleaned.chars() {
        if c.is_whitespace() || c == joined {
            pending = true;
            continue;
        }
        if !(c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            continue;
        }
        if pending {
            out.push(sep);
            pending = false;
        }
        out.push(c);
    }
    if pending {
        out.push(sep);
    }
    out
}

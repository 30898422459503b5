//! Discord message markdown snippets.

/// One markdown construct, written as a template around a placeholder word.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MarkdownFormat {
    pub label: &'static str,
    pub template: &'static str,
    /// Word in `template` that stands for the content.
    pub placeholder: &'static str,
}

impl MarkdownFormat {
    const fn new(label: &'static str, template: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            template,
            placeholder,
        }
    }

    /// The template with its placeholder replaced by `content`.
    ///
    /// ```
    /// use cordkit::{MARKDOWN_FORMATS, markdown_format};
    ///
    /// let spoiler = markdown_format(MARKDOWN_FORMATS, "spoiler").unwrap();
    /// assert_eq!(spoiler.wrap("the ending"), "||the ending||");
    /// ```
    pub fn wrap(&self, content: &str) -> String {
        self.template.replacen(self.placeholder, content, 1)
    }
}

/// Supported formats, in toolbar order.
pub static MARKDOWN_FORMATS: &[MarkdownFormat] = &[
    MarkdownFormat::new("Bold", "**text**", "text"),
    MarkdownFormat::new("Italic", "*text*", "text"),
    MarkdownFormat::new("Strikethrough", "~~text~~", "text"),
    MarkdownFormat::new("Spoiler", "||text||", "text"),
    MarkdownFormat::new("Header 1", "# text", "text"),
    MarkdownFormat::new("Header 2", "## text", "text"),
    MarkdownFormat::new("Quote", "> text", "text"),
    MarkdownFormat::new("Inline Code", "`text`", "text"),
    MarkdownFormat::new("Code Block", "```js\ntext\n```", "text"),
    MarkdownFormat::new("Bullet List", "- item", "item"),
    MarkdownFormat::new("Numbered List", "1. item", "item"),
];

/// Finds a format by label, ignoring case, spaces, `_` and `-`.
pub fn markdown_format<'a>(
    formats: &'a [MarkdownFormat],
    label: &str,
) -> Option<&'a MarkdownFormat> {
    let wanted = normalize(label);
    formats.iter().find(|format| normalize(format.label) == wanted)
}

fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Appends `snippet` to `buffer` on a new line, or as the first line of an
/// empty buffer.
pub fn append_snippet(buffer: &mut String, snippet: &str) {
    if !buffer.is_empty() {
        buffer.push('\n');
    }
    buffer.push_str(snippet);
}

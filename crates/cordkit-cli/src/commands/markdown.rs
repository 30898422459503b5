use crate::config::{CliConfig, MarkdownArgs, OutputFormat};
use anyhow::Context;
use cordkit::{MARKDOWN_FORMATS, MarkdownFormat, append_snippet, markdown_format};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Snippet {
    format: &'static str,
    markdown: String,
}

fn selected(args: &MarkdownArgs) -> anyhow::Result<Vec<&'static MarkdownFormat>> {
    if args.formats.is_empty() {
        return Ok(MARKDOWN_FORMATS.iter().collect());
    }
    args.formats
        .iter()
        .map(|label| {
            markdown_format(MARKDOWN_FORMATS, label)
                .with_context(|| format!("unknown markdown format: {label}"))
        })
        .collect()
}

pub fn run(args: &MarkdownArgs, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let snippets: Vec<_> = selected(args)?
        .into_iter()
        .map(|format| Snippet {
            format: format.label,
            markdown: format.wrap(&args.text),
        })
        .collect();

    match config.output {
        OutputFormat::Json => super::write_json(out, &snippets),
        OutputFormat::Text => {
            let mut message = String::new();
            for snippet in &snippets {
                append_snippet(&mut message, &snippet.markdown);
            }
            writeln!(out, "{message}")?;
            Ok(())
        }
    }
}

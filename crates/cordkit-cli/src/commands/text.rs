use crate::config::{CliConfig, OutputFormat, TextArgs};
use cordkit::TextStyle;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Styled {
    style: TextStyle,
    label: &'static str,
    text: String,
}

pub fn run(args: &TextArgs, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let styles: Vec<_> = match args.style {
        Some(style) => vec![style],
        None => TextStyle::ALL.to_vec(),
    };
    let styled: Vec<_> = styles
        .into_iter()
        .map(|style| Styled {
            style,
            label: style.label(),
            text: style.apply(&args.text),
        })
        .collect();

    match (config.output, args.style) {
        (OutputFormat::Json, Some(_)) => super::write_json(out, &styled[0]),
        (OutputFormat::Json, None) => super::write_json(out, &styled),
        (OutputFormat::Text, Some(_)) => {
            writeln!(out, "{}", styled[0].text)?;
            Ok(())
        }
        (OutputFormat::Text, None) => {
            for s in &styled {
                writeln!(out, "{:<28} {}", s.label, s.text)?;
            }
            Ok(())
        }
    }
}

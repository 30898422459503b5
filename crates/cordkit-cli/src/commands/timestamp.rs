use crate::config::{CliConfig, OutputFormat, TimestampArgs};
use cordkit::{TimestampStyle, format_timestamp};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Rendered {
    style: TimestampStyle,
    code: char,
    label: &'static str,
    markdown: String,
}

const fn unix_seconds(args: &TimestampArgs, config: &CliConfig) -> u64 {
    match (args.unix, args.id) {
        (Some(secs), _) => secs,
        (None, Some(id)) => id.unix_seconds(),
        (None, None) => config.now_millis / 1000,
    }
}

pub fn run(args: &TimestampArgs, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let secs = unix_seconds(args, config);
    let styles: Vec<_> = match args.style {
        Some(style) => vec![style],
        None => TimestampStyle::ALL.to_vec(),
    };

    let rendered: Vec<_> = styles
        .into_iter()
        .map(|style| Rendered {
            style,
            code: style.suffix(),
            label: style.label(),
            markdown: format_timestamp(secs, style),
        })
        .collect();

    match (config.output, args.style) {
        (OutputFormat::Json, Some(_)) => super::write_json(out, &rendered[0]),
        (OutputFormat::Json, None) => super::write_json(out, &rendered),
        (OutputFormat::Text, Some(_)) => {
            writeln!(out, "{}", rendered[0].markdown)?;
            Ok(())
        }
        (OutputFormat::Text, None) => {
            for r in &rendered {
                writeln!(out, "{:<20} {}", r.markdown, r.label)?;
            }
            Ok(())
        }
    }
}

use crate::config::{ChannelArgs, CliConfig, OutputFormat};
use anyhow::Context;
use cordkit::{CHANNEL_PREFIXES, ChannelFont, decorate_channel, sanitize_channel_name};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Decorated {
    base: String,
    font: ChannelFont,
    name: String,
}

pub fn run(args: &ChannelArgs, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    if args.list_prefixes {
        return match config.output {
            OutputFormat::Json => super::write_json(out, &CHANNEL_PREFIXES),
            OutputFormat::Text => {
                writeln!(out, "{}", CHANNEL_PREFIXES.join(" "))?;
                Ok(())
            }
        };
    }

    let raw = args.name.as_deref().context("a channel name is required")?;
    let decorated = Decorated {
        base: sanitize_channel_name(raw),
        font: args.font,
        name: decorate_channel(&args.prefix, args.font, raw),
    };
    match config.output {
        OutputFormat::Json => super::write_json(out, &decorated),
        OutputFormat::Text => {
            writeln!(out, "{}", decorated.name)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{json, text};

    fn args(name: &str, prefix: &str, font: ChannelFont) -> ChannelArgs {
        ChannelArgs {
            name: Some(name.into()),
            prefix: prefix.into(),
            font,
            list_prefixes: false,
        }
    }

    fn render(args: &ChannelArgs, config: &CliConfig) -> String {
        let mut out = Vec::new();
        run(args, config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn decorates_name() {
        assert_eq!(
            render(&args("Bot Commands", "🛠️︱", ChannelFont::SmallCaps), &text()),
            "🛠️︱ʙᴏᴛ-ᴄᴏᴍᴍᴀɴᴅs\n"
        );
        let value: serde_json::Value =
            serde_json::from_str(&render(&args("Bot Commands", "", ChannelFont::Compact), &json()))
                .unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "base": "bot-commands", "font": "compact", "name": "botcommands" })
        );
    }

    #[test]
    fn lists_prefixes() {
        let mut list = args("", "", ChannelFont::Default);
        list.name = None;
        list.list_prefixes = true;
        let out = render(&list, &text());
        assert!(out.starts_with("💬︱ 📢︱"));
        assert_eq!(out.trim_end().split(' ').count(), CHANNEL_PREFIXES.len());
    }
}

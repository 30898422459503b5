use crate::config::{CliConfig, EmbedArgs, OutputFormat};
use anyhow::{Context, bail};
use chrono::{DateTime, SecondsFormat};
use cordkit::{Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedMedia};
use std::io::Write;

fn parse_field(raw: &str, inline: bool) -> anyhow::Result<EmbedField> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok(EmbedField::new(name, value, inline)),
        _ => bail!("field must be NAME=VALUE, got {raw:?}"),
    }
}

fn iso_millis(millis: u64) -> anyhow::Result<String> {
    let created = i64::try_from(millis)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .with_context(|| format!("current time {millis} is out of range"))?;
    Ok(created.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn build(args: &EmbedArgs, config: &CliConfig) -> anyhow::Result<Embed> {
    let mut embed = match (&args.import, args.example) {
        (Some(path), _) => Embed::from_json_str(&super::read_source(path)?)
            .with_context(|| format!("could not import {}", path.display()))?,
        (None, true) => Embed::example(),
        (None, false) => Embed::default(),
    };

    if let Some(title) = &args.title {
        embed.title = Some(title.clone());
    }
    if let Some(description) = &args.description {
        embed.description = Some(description.clone());
    }
    if let Some(url) = &args.url {
        embed.url = Some(url.clone());
    }
    if let Some(color) = args.color {
        embed.color = color;
    }
    if let Some(name) = &args.author {
        let author = embed.author.get_or_insert_with(|| EmbedAuthor {
            name: String::new(),
            url: None,
            icon_url: None,
        });
        author.name.clone_from(name);
    }
    if let Some(text) = &args.footer {
        let footer = embed.footer.get_or_insert_with(|| EmbedFooter {
            text: String::new(),
            icon_url: None,
        });
        footer.text.clone_from(text);
    }
    if let Some(url) = &args.image {
        embed.image = Some(EmbedMedia { url: url.clone() });
    }
    if let Some(url) = &args.thumbnail {
        embed.thumbnail = Some(EmbedMedia { url: url.clone() });
    }
    if args.timestamp {
        embed.timestamp = Some(iso_millis(config.now_millis)?);
    }
    for raw in &args.fields {
        embed.add_field(parse_field(raw, args.inline)?)?;
    }

    tracing::debug!(fields = embed.fields.len(), color = %embed.color, "built embed");
    Ok(embed)
}

pub fn run(args: &EmbedArgs, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let embed = build(args, config)?;
    match config.output {
        OutputFormat::Json => super::write_json(out, &embed.to_payload()),
        OutputFormat::Text => {
            writeln!(out, "{}", embed.to_json()?)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{json, text};
    use cordkit::Color;
    use std::path::PathBuf;

    fn args() -> EmbedArgs {
        EmbedArgs {
            import: None,
            example: false,
            title: None,
            description: None,
            url: None,
            color: None,
            fields: Vec::new(),
            inline: false,
            timestamp: false,
            author: None,
            footer: None,
            image: None,
            thumbnail: None,
        }
    }

    fn render(args: &EmbedArgs, config: &CliConfig) -> anyhow::Result<serde_json::Value> {
        let mut out = Vec::new();
        run(args, config, &mut out)?;
        Ok(serde_json::from_slice(&out).unwrap())
    }

    #[test]
    fn builds_from_flags() {
        let mut built = args();
        built.title = Some("Release".into());
        built.color = Some(Color::from_rgb(0xED_4245));
        built.author = Some("Ops".into());
        built.fields = vec!["Version=1.2".into(), "Notes=a=b".into()];
        built.inline = true;
        built.timestamp = true;

        let value = render(&built, &text()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "embeds": [{
                    "title": "Release",
                    "color": 15_548_997,
                    "timestamp": "2026-04-30T11:38:25.796Z",
                    "author": { "name": "Ops" },
                    "fields": [
                        { "name": "Version", "value": "1.2", "inline": true },
                        { "name": "Notes", "value": "a=b", "inline": true }
                    ]
                }]
            })
        );
        assert_eq!(render(&built, &json()).unwrap(), value);
    }

    #[test]
    fn example_keeps_its_fields() {
        let mut example = args();
        example.example = true;
        example.fields = vec!["Third=3".into()];
        let value = render(&example, &text()).unwrap();
        let fields = value["embeds"][0]["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(value["embeds"][0]["color"], 5_793_266);
    }

    #[test]
    fn imports_and_edits_a_payload() {
        let path = std::env::temp_dir().join(format!("cordkit-embed-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r##"{ "embeds": [{ "title": "Old", "color": "#57F287", "footer": { "text": "f" } }] }"##,
        )
        .unwrap();
        let mut edit = args();
        edit.import = Some(path.clone());
        edit.title = Some("New".into());
        let value = render(&edit, &text());
        std::fs::remove_file(&path).unwrap();

        let value = value.unwrap();
        assert_eq!(value["embeds"][0]["title"], "New");
        assert_eq!(value["embeds"][0]["color"], 0x57_F287);
        assert_eq!(value["embeds"][0]["footer"]["text"], "f");
    }

    #[test]
    fn bad_field_and_missing_file_are_errors() {
        let mut bad = args();
        bad.fields = vec!["no separator".into()];
        let err = render(&bad, &text()).unwrap_err();
        assert_eq!(err.to_string(), "field must be NAME=VALUE, got \"no separator\"");

        let mut missing = args();
        missing.import = Some(PathBuf::from("/nonexistent/cordkit-embed.json"));
        assert!(render(&missing, &text()).is_err());
    }

    #[test]
    fn field_limit_surfaces_as_error() {
        let mut many = args();
        many.fields = (0..26).map(|i| format!("f{i}=v")).collect();
        let err = render(&many, &text()).unwrap_err();
        assert_eq!(err.to_string(), "an embed holds at most 25 fields");
    }
}

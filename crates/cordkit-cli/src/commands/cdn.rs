use crate::config::{CdnArgs, CliConfig, OutputFormat};
use anyhow::bail;
use cordkit::{AssetKind, asset_url, default_avatar_url, extract_asset_hash};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Asset {
    kind: AssetKind,
    url: String,
    default: bool,
}

fn resolve(args: &CdnArgs) -> anyhow::Result<Asset> {
    let extracted = match &args.from_json {
        Some(path) => Some(extract_asset_hash(&super::read_source(path)?, args.kind)?),
        None => None,
    };
    match (args.kind, extracted.as_deref().or(args.hash.as_deref())) {
        (kind, Some(hash)) => Ok(Asset {
            kind,
            url: asset_url(kind, args.id, hash, args.size)?,
            default: false,
        }),
        (AssetKind::Avatar, None) => Ok(Asset {
            kind: AssetKind::Avatar,
            url: default_avatar_url(&args.id),
            default: true,
        }),
        (kind, None) => bail!("--hash is required for {kind} URLs"),
    }
}

pub fn run(args: &CdnArgs, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let asset = resolve(args)?;
    match config.output {
        OutputFormat::Json => super::write_json(out, &asset),
        OutputFormat::Text => {
            writeln!(out, "{}", asset.url)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{json, text};
    use cordkit::Snowflake;

    fn args(kind: AssetKind, hash: Option<&str>, size: u32) -> CdnArgs {
        CdnArgs {
            kind,
            id: Snowflake::from_raw(175_928_847_299_117_063),
            hash: hash.map(str::to_string),
            from_json: None,
            size,
        }
    }

    fn render(args: &CdnArgs, config: &CliConfig) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run(args, config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn hashed_asset() {
        assert_eq!(
            render(&args(AssetKind::Banner, Some("abc"), 256), &text()).unwrap(),
            "https://cdn.discordapp.com/banners/175928847299117063/abc.png?size=256\n"
        );
    }

    #[test]
    fn avatar_without_hash_uses_default() {
        let out = render(&args(AssetKind::Avatar, None, 1024), &json()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["kind"], "avatar");
        assert_eq!(value["default"], true);
        assert_eq!(
            value["url"],
            "https://cdn.discordapp.com/embed/avatars/2.png"
        );
    }

    #[test]
    fn icon_without_hash_is_an_error() {
        let err = render(&args(AssetKind::Icon, None, 1024), &text()).unwrap_err();
        assert_eq!(err.to_string(), "--hash is required for icon URLs");
    }

    #[test]
    fn bad_size_is_an_error() {
        let err = render(&args(AssetKind::Icon, Some("abc"), 100), &text()).unwrap_err();
        assert_eq!(err.to_string(), "invalid asset size: 100");
    }

    #[test]
    fn hash_from_pasted_json() {
        let path = std::env::temp_dir().join(format!("cordkit-cdn-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "id": "81384788765712384", "icon": "a1b2c3" }"#).unwrap();

        let mut from_json = args(AssetKind::Icon, None, 512);
        from_json.from_json = Some(path.clone());
        let url = render(&from_json, &text());

        from_json.kind = AssetKind::Banner;
        let missing = render(&from_json, &text());
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            url.unwrap(),
            "https://cdn.discordapp.com/icons/175928847299117063/a1b2c3.png?size=512\n"
        );
        assert_eq!(
            missing.unwrap_err().to_string(),
            "could not find \"banner\" in the JSON"
        );
    }
}

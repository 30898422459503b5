use crate::config::{CliConfig, ColorArgs, OutputFormat};
use cordkit::{BRAND_COLORS, Color};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Conversion {
    hex: String,
    decimal: u32,
    rgb: [u8; 3],
}

impl From<Color> for Conversion {
    fn from(color: Color) -> Self {
        Self {
            hex: color.to_hex(),
            decimal: color.to_decimal(),
            rgb: [color.red(), color.green(), color.blue()],
        }
    }
}

pub fn run(args: &ColorArgs, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let Some(color) = args.hex else {
        return match config.output {
            OutputFormat::Json => super::write_json(out, BRAND_COLORS),
            OutputFormat::Text => {
                for brand in BRAND_COLORS {
                    writeln!(
                        out,
                        "{:<8} {} {:>8}  {}",
                        brand.name,
                        brand.color,
                        brand.color.to_decimal(),
                        brand.description
                    )?;
                }
                Ok(())
            }
        };
    };

    let conversion = Conversion::from(color);
    match config.output {
        OutputFormat::Json => super::write_json(out, &conversion),
        OutputFormat::Text => {
            writeln!(out, "{}", conversion.decimal)?;
            Ok(())
        }
    }
}

use crate::config::{CliConfig, OutputFormat, PermsArgs};
use cordkit::{PERMISSIONS, Permission, PermissionSet, lookup, search};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Calculation<'a> {
    value: PermissionSet,
    granted: Vec<&'a Permission>,
    #[serde(with = "cordkit::serde::as_decimal_u64")]
    unrecognized: u64,
}

pub fn run(args: &PermsArgs, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    if let Some(query) = &args.search {
        let hits = search(PERMISSIONS, query);
        tracing::debug!(query = %query, hits = hits.len(), "searched catalog");
        return match config.output {
            OutputFormat::Json => super::write_json(out, &hits),
            OutputFormat::Text => {
                for permission in hits {
                    writeln!(
                        out,
                        "{} ({}): {}",
                        permission.name, permission.value, permission.description
                    )?;
                }
                Ok(())
            }
        };
    }

    let mut set = args.base;
    for name in &args.flags {
        let permission = lookup(PERMISSIONS, name)?;
        set.toggle(permission);
        tracing::debug!(name = permission.name, value = %set, "toggled");
    }

    if args.strict {
        set = set.validate(PERMISSIONS)?;
    }

    let calculation = Calculation {
        value: set,
        granted: set.granted(PERMISSIONS).collect(),
        unrecognized: set.unknown_bits(PERMISSIONS),
    };

    match config.output {
        OutputFormat::Json => super::write_json(out, &calculation),
        OutputFormat::Text => {
            writeln!(out, "{}", calculation.value)?;
            for permission in &calculation.granted {
                writeln!(out, "  {}", permission.name)?;
            }
            if calculation.unrecognized != 0 {
                writeln!(out, "  (unrecognized bits: {:#x})", calculation.unrecognized)?;
            }
            Ok(())
        }
    }
}

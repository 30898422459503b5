use crate::config::{CliConfig, InviteArgs, OutputFormat};
use cordkit::{InviteLink, PermissionSet, Scope, Snowflake};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Invite<'a> {
    client_id: Snowflake,
    permissions: PermissionSet,
    scopes: &'a [Scope],
    url: String,
}

pub fn run(args: &InviteArgs, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let mut link = InviteLink::new(args.client_id).with_permissions(args.permissions);
    if !args.scopes.is_empty() {
        link = link.with_scopes(args.scopes.iter().copied());
    }

    match config.output {
        OutputFormat::Json => super::write_json(
            out,
            &Invite {
                client_id: link.client_id(),
                permissions: link.permissions(),
                scopes: link.scopes(),
                url: link.url(),
            },
        ),
        OutputFormat::Text => {
            writeln!(out, "{link}")?;
            Ok(())
        }
    }
}

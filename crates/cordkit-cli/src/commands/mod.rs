mod cdn;
mod channel;
mod color;
mod decode;
mod embed;
mod invite;
mod markdown;
mod perms;
mod text;
mod timestamp;

use crate::config::{CliConfig, Command};
use anyhow::Context;
use serde::Serialize;
use std::io::{Read, Write};
use std::path::Path;

/// Runs one subcommand, writing its result to `out`.
pub fn run(command: Command, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Decode(args) => decode::run(&args, config, out),
        Command::Perms(args) => perms::run(&args, config, out),
        Command::Invite(args) => invite::run(&args, config, out),
        Command::Cdn(args) => cdn::run(&args, config, out),
        Command::Timestamp(args) => timestamp::run(&args, config, out),
        Command::Embed(args) => embed::run(&args, config, out),
        Command::Color(args) => color::run(&args, config, out),
        Command::Text(args) => text::run(&args, config, out),
        Command::Channel(args) => channel::run(&args, config, out),
        Command::Markdown(args) => markdown::run(&args, config, out),
    }
}

/// Reads a whole input file, or stdin for `-`.
fn read_source(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        return Ok(input);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

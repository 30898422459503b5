use crate::config::{CliConfig, DecodeArgs, OutputFormat};
use anyhow::bail;
use chrono::SecondsFormat;
use cordkit::{DecodeError, Snowflake, SnowflakeReport};
use serde::Serialize;
use std::io::Write;

/// One entry of the JSON output: a report, or why the input was rejected.
#[derive(Serialize)]
#[serde(untagged)]
enum Outcome<'a> {
    Decoded(SnowflakeReport),
    Rejected {
        input: &'a str,
        error: &'static str,
        message: String,
    },
}

const fn error_code(err: DecodeError) -> &'static str {
    match err {
        DecodeError::InvalidFormat => "invalid_format",
        DecodeError::OutOfRange => "out_of_range",
    }
}

pub fn run(args: &DecodeArgs, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let decoded: Vec<_> = args
        .ids
        .iter()
        .map(|input| (input.as_str(), Snowflake::decode(input)))
        .collect();

    let mut rejected = 0usize;
    for (input, result) in &decoded {
        if let Err(err) = result {
            tracing::warn!(input, %err, "rejected snowflake");
            rejected += 1;
        }
    }

    match config.output {
        OutputFormat::Json => {
            let outcomes: Vec<_> = decoded
                .iter()
                .map(|(input, result)| match result {
                    Ok(id) => Outcome::Decoded(SnowflakeReport::new(*id, config.now_millis)),
                    Err(err) => Outcome::Rejected {
                        input: *input,
                        error: error_code(*err),
                        message: err.to_string(),
                    },
                })
                .collect();
            super::write_json(out, &outcomes)?;
        }
        OutputFormat::Text => {
            for (i, (input, result)) in decoded.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                match result {
                    Ok(id) => write_text(out, id, config.now_millis, args.layout)?,
                    Err(err) => writeln!(out, "{input}: {err}")?,
                }
            }
        }
    }

    if rejected > 0 {
        bail!("{rejected} of {} IDs could not be decoded", decoded.len());
    }
    Ok(())
}

fn write_text(out: &mut impl Write, id: &Snowflake, now: u64, layout: bool) -> anyhow::Result<()> {
    writeln!(out, "{id}")?;
    if let Some(created) = id.created_at() {
        writeln!(
            out,
            "  created:    {}",
            created.to_rfc3339_opts(SecondsFormat::Millis, true)
        )?;
    }
    writeln!(out, "  unix:       {}", id.unix_seconds())?;
    writeln!(out, "  unix ms:    {}", id.timestamp_millis())?;
    writeln!(out, "  age:        {} years", id.age_in_years(now))?;
    writeln!(out, "  worker id:  {}", id.worker_id())?;
    writeln!(out, "  process id: {}", id.process_id())?;
    writeln!(out, "  increment:  {}", id.increment())?;
    if layout {
        writeln!(out, "{id:?}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{json, text};

    fn args(ids: &[&str]) -> DecodeArgs {
        DecodeArgs {
            ids: ids.iter().map(ToString::to_string).collect(),
            layout: false,
        }
    }

    fn render(args: &DecodeArgs, config: &CliConfig) -> (anyhow::Result<()>, String) {
        let mut out = Vec::new();
        let result = run(args, config, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_fields_as_text() {
        let (result, out) = render(&args(&["175928847299117063"]), &text());
        result.unwrap();
        assert_eq!(
            out,
            "175928847299117063\n\
             \x20 created:    2016-04-30T11:18:25.796Z\n\
             \x20 unix:       1462015105\n\
             \x20 unix ms:    1462015105796\n\
             \x20 age:        10 years\n\
             \x20 worker id:  1\n\
             \x20 process id: 0\n\
             \x20 increment:  7\n"
        );
    }

    #[test]
    fn layout_appends_debug_table() {
        let mut decode = args(&["175928847299117063"]);
        decode.layout = true;
        let (result, out) = render(&decode, &text());
        result.unwrap();
        assert!(out.contains("raw id     : 0x0271065ac1020007"));
    }

    #[test]
    fn json_reports_every_input() {
        let (result, out) = render(&args(&["175928847299117063", "abc"]), &json());
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 IDs could not be decoded");

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["id"], "175928847299117063");
        assert_eq!(value[0]["createdAtISO"], "2016-04-30T11:18:25.796Z");
        assert_eq!(value[0]["ageYears"], 10);
        assert_eq!(value[0]["snowflake"]["workerId"], 1);
        assert_eq!(value[1]["input"], "abc");
        assert_eq!(value[1]["error"], "invalid_format");
    }

    #[test]
    fn rejected_inputs_are_reported_in_place() {
        let (result, out) = render(&args(&["18446744073709551616", "0"]), &text());
        assert!(result.is_err());
        let mut lines = out.lines();
        assert_eq!(
            lines.next(),
            Some("18446744073709551616: out of range: value does not fit in 64 bits")
        );
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("0"));
        assert!(out.contains("  created:    2015-01-01T00:00:00.000Z\n"));
    }
}

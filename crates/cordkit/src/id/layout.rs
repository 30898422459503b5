use core::fmt;

/// One named bit field of a packed ID, used for the `Debug` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: &'static str,
    pub bits: u8,
    pub value: u64,
}

fn center(s: impl ToString, width: usize) -> String {
    let s = s.to_string();
    let len = s.len();
    if len >= width {
        return s;
    }
    let pad = width - len;
    let left = pad / 2;
    let right = pad - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

fn write_border(f: &mut fmt::Formatter<'_>, columns: &[usize]) -> fmt::Result {
    write!(f, "        +")?;
    for &w in columns {
        write!(f, "{}+", "-".repeat(w))?;
    }
    writeln!(f)
}

fn write_row<T: ToString>(
    f: &mut fmt::Formatter<'_>,
    cells: impl Iterator<Item = T>,
    columns: &[usize],
) -> fmt::Result {
    write!(f, "        |")?;
    for (cell, &w) in cells.zip(columns) {
        write!(f, "{}|", center(cell, w))?;
    }
    writeln!(f)
}

/// Renders `fields` as a boxed table, most significant field first.
///
/// ```text
/// Snowflake {
///     raw id     : 0x0271065ac1020007 (175928847299117063)
///     padded     : 00175928847299117063
///     layout     :
///         +----------------+---------------+----------------+----------------+
///         | timestamp (42) | worker_id (5) | process_id (5) | increment (12) |
///         ...
/// ```
pub(crate) fn write_bit_layout_debug(
    f: &mut fmt::Formatter<'_>,
    type_name: &str,
    raw: u64,
    padded: &str,
    fields: &[FieldLayout],
) -> fmt::Result {
    let columns: Vec<usize> = fields
        .iter()
        .map(|field| {
            let label_len = format!("{} ({})", field.name, field.bits).len();
            let dec_len = field.value.to_string().len();
            let hex_len = format!("0x{:x}", field.value).len();
            label_len.max(dec_len).max(hex_len) + 2
        })
        .collect();

    writeln!(f, "{type_name} {{")?;
    writeln!(f, "    raw id     : 0x{raw:016x} ({raw})")?;
    writeln!(f, "    padded     : {padded}")?;
    writeln!(f, "    layout     :")?;

    write_border(f, &columns)?;
    write_row(
        f,
        fields
            .iter()
            .map(|field| format!("{} ({})", field.name, field.bits)),
        &columns,
    )?;
    write_border(f, &columns)?;
    write_row(f, fields.iter().map(|field| field.value), &columns)?;
    write_row(
        f,
        fields.iter().map(|field| format!("0x{:x}", field.value)),
        &columns,
    )?;
    write_border(f, &columns)?;

    write!(f, "}}")
}

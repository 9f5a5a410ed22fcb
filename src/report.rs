//! CSV export and console rendering of sweep tables.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::math::Scalar;
use crate::sweep::SweepTable;

/// Header row shared by the CSV export and the console report.
pub const COLUMNS: [&str; 5] = ["Length (m)", "R (Ohm)", "L (H)", "C (F)", "G (S)"];

const CONSOLE_WIDTH: usize = 14;

/// Writes `table` as CSV. Values use the shortest representation that
/// round-trips; a missing conductance is an empty field.
///
/// The header is the fixed text `Length (m), R (Ohm), L (H), C (F), G (S)`,
/// comma-space separated, while data rows use a bare comma. Readers that
/// key on column names should trim header fields.
pub fn write_csv<W: Write>(mut w: W, table: &SweepTable) -> io::Result<()> {
    writeln!(w, "{}", COLUMNS.join(", "))?;
    for row in &table.rows {
        let p = &row.params;
        let g = p.g.map(|g| g.to_string()).unwrap_or_default();
        writeln!(w, "{},{},{},{},{}", row.length_m, p.r, p.l, p.c, g)?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes the CSV export to it.
pub fn write_csv_file(path: impl AsRef<Path>, table: &SweepTable) -> io::Result<()> {
    let path = path.as_ref();
    let mut w = BufWriter::new(File::create(path)?);
    write_csv(&mut w, table)?;
    w.flush()?;
    tracing::debug!(path = %path.display(), rows = table.len(), "wrote sweep csv");
    Ok(())
}

fn sci(value: Scalar) -> String {
    format!("{value:>CONSOLE_WIDTH$.5e}")
}

/// Renders a fixed-width table with six significant digits per value.
#[must_use]
pub fn render_console(table: &SweepTable) -> String {
    let mut out: String = COLUMNS
        .iter()
        .map(|name| format!("{name:>CONSOLE_WIDTH$}"))
        .collect();
    out.push('\n');
    for row in &table.rows {
        let p = &row.params;
        for value in [row.length_m, p.r, p.l, p.c] {
            out.push_str(&sci(value));
        }
        match p.g {
            Some(g) => out.push_str(&sci(g)),
            None => out.push_str(&format!("{:>CONSOLE_WIDTH$}", "-")),
        }
        out.push('\n');
    }
    out
}

/// Writes the console table to `w`.
pub fn write_console<W: Write>(mut w: W, table: &SweepTable) -> io::Result<()> {
    w.write_all(render_console(table).as_bytes())
}

// src/csv.rs
use std::io::{self, Write};

use crate::data::DataSet;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write a whole table. Header line uses column positions when the table has none.
pub fn write_table<W: Write>(mut w: W, ds: &DataSet, include_headers: bool, sep: char) -> io::Result<()> {
    if include_headers && ds.ncols() > 0 {
        write_row(&mut w, &ds.header_labels(), sep)?;
    }
    for r in &ds.rows {
        write_row(&mut w, r, sep)?;
    }
    Ok(())
}

/// Table as a string (Copy button, tests).
pub fn to_export_string(ds: &DataSet, include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_table(&mut buf, ds, include_headers, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

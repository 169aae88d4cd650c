// src/csv.rs
//! Delimited text for a [`NormalizedDataset`]: comma for CSV, tab for TSV.
//! A field is quoted only when it holds the separator, a quote or a line break.

use std::borrow::Cow;
use std::io::{self, Write};
use std::mem::take;

use crate::engine::NormalizedDataset;

/* ---------------- Writing ---------------- */

fn quote_field(field: &str, sep: char) -> Cow<'_, str> {
    let special = |c: char| c == sep || matches!(c, '"' | '\n' | '\r');
    if field.contains(special) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// One record, terminated by `\n`.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{sep}")?;
        }
        w.write_all(quote_field(cell, sep).as_bytes())?;
    }
    writeln!(w)
}

/// Header row (optional) from the column names, then every row in order.
pub fn write_dataset<W: Write>(mut w: W, ds: &NormalizedDataset, include_headers: bool, sep: char) -> io::Result<()> {
    let header = include_headers.then(|| ds.column_names());
    for row in header.into_iter().chain(ds.rows().iter().map(Vec::as_slice)) {
        write_row(&mut w, row, sep)?;
    }
    Ok(())
}

pub fn dataset_to_string(ds: &NormalizedDataset, include_headers: bool, sep: char) -> String {
    let mut buf = Vec::new();
    // Vec<u8> as a writer never fails
    let _ = write_dataset(&mut buf, ds, include_headers, sep);
    String::from_utf8_lossy(&buf).into_owned()
}

/* ---------------- Reading back ---------------- */

#[derive(Clone, Copy, PartialEq, Eq)]
enum Scan {
    Plain,
    Quoted,
    /// Just left a quoted section; a second `"` means a literal quote.
    QuoteSeen,
}

/// Split text produced by [`write_row`] back into records. Accepts CRLF too.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = s!();
    let mut state = Scan::Plain;
    let mut pending_cr = false;

    for ch in text.chars() {
        if pending_cr {
            pending_cr = false;
            if ch == '\n' { continue; }
        }
        state = match (state, ch) {
            (Scan::Quoted, '"') => Scan::QuoteSeen,
            (Scan::Quoted, c) => { field.push(c); Scan::Quoted }
            (Scan::QuoteSeen, '"') => { field.push('"'); Scan::Quoted }
            (_, '"') => Scan::Quoted,
            (_, c) if c == sep => { record.push(take(&mut field)); Scan::Plain }
            (_, '\n' | '\r') => {
                pending_cr = ch == '\r';
                record.push(take(&mut field));
                records.push(take(&mut record));
                Scan::Plain
            }
            (_, c) => { field.push(c); Scan::Plain }
        };
    }

    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }
    records
}

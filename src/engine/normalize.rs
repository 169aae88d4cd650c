// src/engine/normalize.rs
//! Reconcile variable-width rows into one rectangular dataset.
//!
//! Width is the widest row seen in the run; narrower rows gain trailing empty
//! fields. Each output row is `[provenance label, fields…]` in input order.

use std::collections::HashSet;

use crate::config::deployment::ColumnSection;
use crate::engine::error::EngineError;
use crate::engine::types::{ExtractedRow, NormalizedDataset};

pub fn normalize(rows: &[ExtractedRow], columns: &ColumnSection) -> Result<NormalizedDataset, EngineError> {
    if rows.is_empty() {
        return Err(EngineError::NoData);
    }
    let max_fields = rows.iter().map(ExtractedRow::width).max().unwrap_or(0);
    let column_names = column_names(columns, max_fields)?;

    let mut out = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let padded = pad_fields(&row.fields, max_fields);
        if padded.len() != max_fields {
            return Err(EngineError::PadInvariant {
                index,
                label: row.provenance_label.clone(),
                len: padded.len(),
                expected: max_fields,
            });
        }
        let mut full = Vec::with_capacity(1 + max_fields);
        full.push(row.provenance_label.clone());
        full.extend(padded);
        out.push(full);
    }

    Ok(NormalizedDataset::from_parts(column_names, out))
}

/// New field list padded on the right to `width`. Never truncates.
pub fn pad_fields(fields: &[String], width: usize) -> Vec<String> {
    let mut padded = fields.to_vec();
    if padded.len() < width {
        padded.resize(width, s!());
    }
    padded
}

/// `source, named…, prefix1, prefix2, …` with exactly `1 + data_width` entries.
pub fn column_names(columns: &ColumnSection, data_width: usize) -> Result<Vec<String>, EngineError> {
    let mut names = Vec::with_capacity(1 + data_width);
    names.push(columns.source.clone());
    names.extend(columns.leading_names().into_iter().take(data_width));
    let positional = data_width + 1 - names.len();
    names.extend((1..=positional).map(|i| format!("{}{}", columns.prefix, i)));

    let mut seen = HashSet::with_capacity(names.len());
    for n in &names {
        if !seen.insert(n.as_str()) {
            return Err(EngineError::DuplicateColumn(n.clone()));
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::deployment::ColumnScheme;

    #[test]
    fn source_scheme_is_positional() {
        let c = ColumnSection::default();
        assert_eq!(column_names(&c, 3).unwrap(), vec!["Source", "Col_1", "Col_2", "Col_3"]);
    }

    #[test]
    fn source_key_scheme_shifts_numbering() {
        let c = ColumnSection { scheme: ColumnScheme::SourceKey, ..ColumnSection::default() };
        assert_eq!(column_names(&c, 3).unwrap(), vec!["Source", "Key", "Col_1", "Col_2"]);
        assert_eq!(column_names(&c, 1).unwrap(), vec!["Source", "Key"]);
    }

    #[test]
    fn extra_names_never_widen_the_dataset() {
        let c = ColumnSection { names: row!["Version", "Date", "URL"], ..ColumnSection::default() };
        assert_eq!(column_names(&c, 2).unwrap(), vec!["Source", "Version", "Date"]);
    }

    #[test]
    fn colliding_names_are_refused() {
        let c = ColumnSection { names: row!["Col_2"], ..ColumnSection::default() };
        assert_eq!(column_names(&c, 3), Err(EngineError::DuplicateColumn(s!("Col_2"))));
    }

    #[test]
    fn padding_never_truncates() {
        assert_eq!(pad_fields(&row!["a", "b", "c"], 2), row!["a", "b", "c"]);
        assert_eq!(pad_fields(&row!["a"], 3), row!["a", "", ""]);
    }
}

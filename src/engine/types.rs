// src/engine/types.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Row-extraction strategy. A deployment enables one or more of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractMode {
    KeyValue,
    Tabular,
    Pattern,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionKind {
    KeyValueTable,
    DataTable,
    EntryList,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RegionKind::KeyValueTable => "key/value table",
            RegionKind::DataTable => "data table",
            RegionKind::EntryList => "entry list",
        })
    }
}

/// A structural element classified as a source of rows.
/// Holds a handle to the element it was classified from.
#[derive(Clone, Debug)]
pub struct ExtractableRegion<N> {
    pub provenance_label: String,
    pub kind: RegionKind,
    /// 1-based among same-kind siblings.
    pub ordinal: usize,
    pub(crate) node: N,
}

impl<N> ExtractableRegion<N> {
    pub fn node(&self) -> &N { &self.node }
}

/// One logical record pulled from a region. Fields are whitespace-collapsed
/// and at least one of them is non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedRow {
    pub provenance_label: String,
    pub fields: Vec<String>,
}

impl ExtractedRow {
    pub fn new(provenance_label: impl Into<String>, fields: Vec<String>) -> Self {
        Self { provenance_label: provenance_label.into(), fields }
    }

    pub fn width(&self) -> usize { self.fields.len() }
}

/// Final rectangular output. Every row is exactly `column_names.len()` wide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedDataset {
    column_names: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl NormalizedDataset {
    /// Only the normalizer builds these; it has already checked the shape.
    pub(crate) fn from_parts(column_names: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == column_names.len()));
        Self { column_names, rows }
    }

    pub fn column_names(&self) -> &[String] { &self.column_names }
    pub fn rows(&self) -> &[Vec<String>] { &self.rows }
    pub fn width(&self) -> usize { self.column_names.len() }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/// Why a structural row or list item produced no `ExtractedRow`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowGap {
    MissingLabelCell,
    MissingValueCell,
    NoDataCells,
    AllFieldsEmpty,
    MissingAnchor,
}

impl fmt::Display for RowGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RowGap::MissingLabelCell => "no label cell",
            RowGap::MissingValueCell => "no value cell",
            RowGap::NoDataCells => "no data cells",
            RowGap::AllFieldsEmpty => "all fields empty",
            RowGap::MissingAnchor => "no anchor",
        })
    }
}

/// Rows pulled out of one region, plus what was skipped on the way.
#[derive(Clone, Debug, Default)]
pub struct RegionRows {
    pub rows: Vec<ExtractedRow>,
    pub gaps: Vec<(usize, RowGap)>,
}

/// Per-region tally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionSummary {
    pub provenance_label: String,
    pub kind: RegionKind,
    pub rows: usize,
    pub skipped: usize,
}

/// What one run looked at and kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub regions: Vec<RegionSummary>,
}

impl RunReport {
    pub fn rows(&self) -> usize { self.regions.iter().map(|r| r.rows).sum() }
    pub fn skipped(&self) -> usize { self.regions.iter().map(|r| r.skipped).sum() }
}

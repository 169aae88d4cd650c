// src/engine/extract.rs
//! Row extraction, one mode per region kind.
//!
//! - key/value: `[label cell, value cell]` per row
//! - tabular:   header row skipped, every `td` of the remaining rows
//! - pattern:   `[token, YYYY-MM-DD date, link]` per list item
//!
//! A row that does not fit its mode is a [`RowGap`]: recorded, logged at debug,
//! and skipped. Nothing here fails the region or the run.

use tracing::debug;
use url::Url;

use crate::core::dom::DomNode;
use crate::core::sanitize::normalize_ws;
use crate::engine::classify::table_rows;
use crate::engine::pattern::{DatePattern, TokenPattern};
use crate::engine::types::{ExtractableRegion, ExtractedRow, RegionKind, RegionRows, RowGap};

/// Compiled pattern-mode rules.
#[derive(Clone, Debug)]
pub struct ListRules {
    pub token: Option<TokenPattern>,
    pub date: DatePattern,
    /// Relative hrefs are resolved against this, like a browser would.
    pub base_url: Option<Url>,
}

#[derive(Clone, Debug, Default)]
pub struct Extractor {
    list: Option<ListRules>,
}

impl Extractor {
    pub fn new(list: Option<ListRules>) -> Self {
        Self { list }
    }

    pub fn set_base_url(&mut self, base: Url) {
        if let Some(list) = &mut self.list {
            list.base_url = Some(base);
        }
    }

    pub fn extract<N: DomNode>(&self, region: &ExtractableRegion<N>) -> RegionRows {
        let label = region.provenance_label.as_str();
        let results: Vec<Result<ExtractedRow, RowGap>> = match region.kind {
            RegionKind::KeyValueTable => table_rows(&region.node)
                .iter()
                .map(|tr| key_value_row(label, tr))
                .collect(),
            RegionKind::DataTable => table_rows(&region.node)
                .iter()
                .skip(1) // header row
                .map(|tr| tabular_row(label, tr))
                .collect(),
            RegionKind::EntryList => {
                let Some(rules) = &self.list else {
                    debug!(label, "entry list without pattern rules left alone");
                    return RegionRows::default();
                };
                region.node
                    .children_tagged("li")
                    .iter()
                    .map(|li| pattern_row(label, li, rules))
                    .collect()
            }
        };

        let mut out = RegionRows::default();
        for (i, res) in results.into_iter().enumerate() {
            match res {
                Ok(row) => out.rows.push(row),
                Err(gap) => {
                    debug!(label, row = i, reason = %gap, "row skipped");
                    out.gaps.push((i, gap));
                }
            }
        }
        out
    }
}

fn cell_text<N: DomNode>(node: &N) -> String {
    normalize_ws(&node.plain_text())
}

fn finish(label: &str, fields: Vec<String>) -> Result<ExtractedRow, RowGap> {
    if fields.iter().all(String::is_empty) {
        return Err(RowGap::AllFieldsEmpty);
    }
    Ok(ExtractedRow::new(label, fields))
}

fn key_value_row<N: DomNode>(label: &str, tr: &N) -> Result<ExtractedRow, RowGap> {
    let cells = tr.child_elements();
    let key = cells.iter().find(|c| c.is("th")).ok_or(RowGap::MissingLabelCell)?;
    let value = cells.iter().find(|c| c.is("td")).ok_or(RowGap::MissingValueCell)?;
    finish(label, vec![cell_text(key), cell_text(value)])
}

fn tabular_row<N: DomNode>(label: &str, tr: &N) -> Result<ExtractedRow, RowGap> {
    let fields: Vec<String> = tr.children_tagged("td").iter().map(cell_text).collect();
    if fields.is_empty() {
        return Err(RowGap::NoDataCells);
    }
    finish(label, fields)
}

fn pattern_row<N: DomNode>(label: &str, li: &N, rules: &ListRules) -> Result<ExtractedRow, RowGap> {
    let anchor = li.find_first("a").ok_or(RowGap::MissingAnchor)?;
    let anchor_text = cell_text(&anchor);

    let token = rules.token
        .as_ref()
        .and_then(|t| t.find(&anchor_text))
        .unwrap_or(anchor_text);
    let date = rules.date.normalize_leading(&cell_text(li)).unwrap_or_default();
    let link = anchor
        .attribute("href")
        .map(|href| resolve_href(rules.base_url.as_ref(), href))
        .unwrap_or_default();

    finish(label, vec![token, date, link])
}

fn resolve_href(base: Option<&Url>, href: &str) -> String {
    let href = href.trim();
    match base {
        Some(base) => base.join(href).map_or_else(|_| href.to_string(), String::from),
        None => href.to_string(),
    }
}

// src/engine/classify.rs
//! Structure classification: which elements of a page are worth reading rows from.
//!
//! Order of the returned regions is the extraction order:
//! the key/value table (at most one), data tables in document order, the entry list.

use tracing::debug;

use crate::config::deployment::{KeyValueSection, PatternSection, TabularSection};
use crate::core::dom::DomNode;
use crate::engine::types::{ExtractableRegion, RegionKind};

/// Which region kinds a run looks for, borrowed from the deployment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassifyPolicy<'a> {
    pub key_value: Option<&'a KeyValueSection>,
    pub tables: Option<&'a TabularSection>,
    pub entry_list: Option<&'a PatternSection>,
}

/// Rows owned by `table`: `tr` children of the table or of its row groups.
/// Rows of nested tables are left to the nested table.
pub fn table_rows<N: DomNode>(table: &N) -> Vec<N> {
    let mut rows = Vec::new();
    for child in table.child_elements() {
        if child.is("tr") {
            rows.push(child);
        } else if child.is("thead") || child.is("tbody") || child.is("tfoot") {
            rows.extend(child.children_tagged("tr"));
        }
    }
    rows
}

fn has_header_cells<N: DomNode>(table: &N) -> bool {
    table_rows(table)
        .iter()
        .any(|tr| tr.child_elements().iter().any(|c| c.is("th")))
}

/// Classify the page under `root`. Elements that fit no region kind are left out;
/// this never fails.
pub fn classify<N: DomNode>(root: &N, policy: &ClassifyPolicy<'_>) -> Vec<ExtractableRegion<N>> {
    let mut regions = Vec::new();
    let mut key_value: Option<ExtractableRegion<N>> = None;
    let mut data_tables = Vec::new();
    let mut ordinal = 0usize;

    for table in root.find_all("table") {
        if let Some(kv) = policy.key_value {
            if kv.marker.matches(&table) {
                if key_value.is_none() {
                    key_value = Some(ExtractableRegion {
                        provenance_label: kv.label.clone(),
                        kind: RegionKind::KeyValueTable,
                        ordinal: 1,
                        node: table,
                    });
                } else {
                    debug!(marker = %kv.marker.value, "second marked table left out");
                }
                if policy.tables.is_some_and(|tp| tp.count_key_value) {
                    ordinal += 1;
                }
                continue;
            }
        }

        let Some(tp) = policy.tables else { continue };
        ordinal += 1;
        if tp.require_header_cells && !has_header_cells(&table) {
            debug!(ordinal, "table without header cells left out");
            continue;
        }
        data_tables.push(ExtractableRegion {
            provenance_label: tp.label_for(ordinal),
            kind: RegionKind::DataTable,
            ordinal,
            node: table,
        });
    }

    if let Some(kv) = key_value {
        debug!(label = %kv.provenance_label, "key/value table found");
        regions.push(kv);
    } else if policy.key_value.is_some() {
        debug!("no key/value table on page");
    }
    debug!(count = data_tables.len(), seen = ordinal, "data tables classified");
    regions.extend(data_tables);

    if let Some(list) = policy.entry_list {
        match find_entry_list(root, list) {
            Some(node) => regions.push(ExtractableRegion {
                provenance_label: list.label.clone(),
                kind: RegionKind::EntryList,
                ordinal: 1,
                node,
            }),
            None => debug!(container = %list.container, "no entry list on page"),
        }
    }

    regions
}

fn find_entry_list<N: DomNode>(root: &N, list: &PatternSection) -> Option<N> {
    let mut candidates = root.find_all(&list.container).into_iter();
    let container = match &list.marker {
        Some(m) => candidates.find(|n| m.matches(n)),
        None => candidates.next(),
    }?;
    // A container with no items is not a list of entries
    if container.children_tagged("li").is_empty() {
        debug!(container = %list.container, "entry list container has no items");
        return None;
    }
    Some(container)
}

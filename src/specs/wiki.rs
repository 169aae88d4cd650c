// src/specs/wiki.rs
use crate::config::deployment::{ColumnScheme, Deployment};
use crate::engine::ExtractMode::{KeyValue, Tabular};

/// Wikipedia article: the infobox (`table.infobox`) first, then content tables.
/// Tables without any `th` are layout noise on wiki pages and are skipped.
/// Table labels count every `table` on the page, the infobox included.
pub fn suse() -> Deployment {
    let mut d = Deployment::new("suse", &[KeyValue, Tabular]);
    d.url = Some(s!("https://en.wikipedia.org/wiki/SUSE_Linux_Enterprise"));
    d.output = Some(s!("suse_linux_enterprise_data.csv"));
    d.tabular.require_header_cells = true;
    d.tabular.count_key_value = true;
    d.columns.scheme = ColumnScheme::SourceKey;
    d
}

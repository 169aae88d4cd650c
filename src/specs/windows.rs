// src/specs/windows.rs
use crate::config::deployment::{ColumnScheme, Deployment};
use crate::engine::ExtractMode::Tabular;

pub fn windows11() -> Deployment {
    let mut d = Deployment::new("windows11", &[Tabular]);
    d.url = Some(s!("https://learn.microsoft.com/en-us/windows/release-health/windows11-release-information"));
    d.output = Some(s!("windows11_release_info.csv"));
    d.tabular.require_header_cells = true;
    d.columns.scheme = ColumnScheme::SourceKey;
    d
}

pub fn windows_server() -> Deployment {
    let mut d = Deployment::new("windows-server", &[Tabular]);
    d.url = Some(s!("https://learn.microsoft.com/en-us/windows-server/get-started/windows-server-release-info"));
    d.output = Some(s!("windows_server_release_info.csv"));
    d.tabular.label = s!("Table_{n}");
    d.columns.source = s!("Table_Source");
    d
}

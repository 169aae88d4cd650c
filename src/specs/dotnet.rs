// src/specs/dotnet.rs
use crate::config::deployment::Deployment;
use crate::engine::ExtractMode::Tabular;

pub fn core() -> Deployment {
    let mut d = Deployment::new("dotnet-core", &[Tabular]);
    d.url = Some(s!("https://versionsof.net/core/8.0/8.0.0/"));
    d.output = Some(s!("dotnet_core_8_0_0_data.csv"));
    d
}

pub fn downloads() -> Deployment {
    let mut d = Deployment::new("dotnet-downloads", &[Tabular]);
    d.url = Some(s!("https://dotnet.microsoft.com/en-us/download/dotnet/8.0"));
    d.output = Some(s!("dotnet_downloads_combined.csv"));
    d.tabular.label = s!("Table {n}");
    d.columns.source = s!("Table_Source");
    d.columns.prefix = s!("Column_");
    d
}

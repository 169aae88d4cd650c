// src/specs/mod.rs
//! # Built-in deployments
//!
//! Each preset captures *where the rows live* on one known page and *how its
//! output columns are named*. They are ordinary [`Deployment`] values; anything a
//! preset does can also be written as a TOML file and passed with `--config`.
//!
//! ## Current presets
//! - `suse` – Wikipedia article: infobox as key/value rows, then every table that
//!   has header cells. Columns `Source, Key, Col_1…`.
//! - `windows11`, `windows-server` – Microsoft release-information tables.
//! - `dotnet-core`, `dotnet-downloads` – .NET release and download tables.
//! - `dbf-news` – news list; version token, normalized date and link per entry.
//!
//! Labels and column names follow what each page's consumers already expect
//! (`table_3` vs `Table 3`, `Col_` vs `Column_`), so they differ on purpose.
use crate::config::{ConfigError, Deployment};

mod dbf;
mod dotnet;
mod wiki;
mod windows;

type Preset = fn() -> Deployment;

const PRESETS: &[(&str, Preset)] = &[
    ("suse", wiki::suse),
    ("windows11", windows::windows11),
    ("windows-server", windows::windows_server),
    ("dotnet-core", dotnet::core),
    ("dotnet-downloads", dotnet::downloads),
    ("dbf-news", dbf::news),
];

pub fn names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(name, _)| *name)
}

pub fn preset(name: &str) -> Result<Deployment, ConfigError> {
    PRESETS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, build)| build())
        .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
}

// src/config/deployment.rs
//! Per-deployment configuration.
//!
//! A deployment says which regions of a page to read and how: which marker picks
//! out the key/value panel, how data tables are labelled, how entry-list items are
//! parsed, and how output columns are named. Deployments are plain data, loaded
//! from TOML or taken from the built-in presets in `crate::specs`.
//!
//! ```toml
//! name = "dbf-news"
//! url = "https://www.dbf2002.com/news.html"
//! modes = ["pattern"]
//!
//! [pattern]
//! token_regex = 'v\d+\.\d+(\.\d+)?'
//! date_format = "DD.MM.YYYY"
//!
//! [columns]
//! names = ["Version", "Date", "URL"]
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::consts::*;
use crate::core::dom::DomNode;
use crate::engine::pattern::{DatePattern, PatternError, TokenPattern};
use crate::engine::types::ExtractMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read deployment file {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[error("cannot parse deployment {origin}: {source}")]
    Parse { origin: String, source: toml::de::Error },

    #[error("deployment '{0}' enables no extraction modes")]
    NoModes(String),

    #[error("mode {0:?} is listed more than once")]
    DuplicateMode(ExtractMode),

    #[error("pattern mode needs a [pattern] section")]
    MissingPatternSection,

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("table label template '{0}' has no {{n}} placeholder")]
    TemplatePlaceholder(String),

    #[error("region label '{0}' is not unique within a run")]
    LabelCollision(String),

    #[error("column name '{0}' is not unique")]
    ColumnCollision(String),

    #[error("scheme \"source-key\" already names the first column; drop `names` or use scheme \"source\"")]
    SchemeWithNames,

    #[error("invalid URL {url}: {source}")]
    InvalidUrl { url: String, source: url::ParseError },

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
}

/// Attribute marker identifying a structural element.
/// `class` matches one whitespace separated token; other attributes match exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Marker {
    #[serde(default = "default_marker_attr")]
    pub attr: String,
    pub value: String,
}

fn default_marker_attr() -> String { s!("class") }

impl Marker {
    pub fn class(value: &str) -> Self {
        Self { attr: default_marker_attr(), value: value.to_string() }
    }

    pub fn matches<N: DomNode>(&self, node: &N) -> bool {
        if self.attr.eq_ignore_ascii_case("class") {
            node.has_class(&self.value)
        } else {
            node.attribute(&self.attr) == Some(self.value.as_str())
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyValueSection {
    pub marker: Marker,
    pub label: String,
}

impl Default for KeyValueSection {
    fn default() -> Self {
        Self { marker: Marker::class(DEFAULT_KEY_VALUE_MARKER), label: s!(DEFAULT_KEY_VALUE_LABEL) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TabularSection {
    /// Must contain `{n}`, replaced by the table's ordinal.
    pub label: String,
    /// Skip tables without a single `th` cell (they still use up an ordinal).
    pub require_header_cells: bool,
    /// Key/value tables use up an ordinal as well, so `table_{n}` is the n-th
    /// `table` of the page.
    pub count_key_value: bool,
}

impl Default for TabularSection {
    fn default() -> Self {
        Self { label: s!(DEFAULT_TABLE_LABEL), require_header_cells: false, count_key_value: false }
    }
}

impl TabularSection {
    pub fn label_for(&self, ordinal: usize) -> String {
        self.label.replace(TABLE_ORDINAL_PLACEHOLDER, &ordinal.to_string())
    }

    /// True if some ordinal would render exactly `label`.
    fn can_render(&self, label: &str) -> bool {
        let re = self.label
            .split(TABLE_ORDINAL_PLACEHOLDER)
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(r"\d+");
        Regex::new(&format!("^{re}$")).is_ok_and(|re| re.is_match(label))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternSection {
    #[serde(default = "default_container")]
    pub container: String,
    #[serde(default)]
    pub marker: Option<Marker>,
    #[serde(default = "default_list_label")]
    pub label: String,
    /// Applied to anchor text; no match keeps the anchor text verbatim.
    #[serde(default)]
    pub token_regex: Option<String>,
    /// `DD.MM.YYYY` or `%d.%m.%Y` style.
    pub date_format: String,
}

fn default_container() -> String { s!(DEFAULT_LIST_CONTAINER) }
fn default_list_label() -> String { s!(DEFAULT_LIST_LABEL) }

impl PatternSection {
    pub fn new(date_format: &str) -> Self {
        Self {
            container: default_container(),
            marker: None,
            label: default_list_label(),
            token_regex: None,
            date_format: date_format.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnScheme {
    /// `Source, Col_1, Col_2, …`
    #[default]
    Source,
    /// `Source, Key, Col_1, …`
    SourceKey,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnSection {
    pub source: String,
    pub scheme: ColumnScheme,
    pub names: Vec<String>,
    pub prefix: String,
}

impl Default for ColumnSection {
    fn default() -> Self {
        Self {
            source: s!(DEFAULT_SOURCE_COLUMN),
            scheme: ColumnScheme::Source,
            names: Vec::new(),
            prefix: s!(DEFAULT_COLUMN_PREFIX),
        }
    }
}

impl ColumnSection {
    /// Explicit names for the leading data columns.
    pub fn leading_names(&self) -> Vec<String> {
        match self.scheme {
            ColumnScheme::SourceKey => vec![s!(KEY_COLUMN)],
            ColumnScheme::Source => self.names.clone(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.source.trim().is_empty() { return Err(ConfigError::Empty("columns.source")); }
        if self.prefix.is_empty() { return Err(ConfigError::Empty("columns.prefix")); }
        if self.scheme == ColumnScheme::SourceKey && !self.names.is_empty() {
            return Err(ConfigError::SchemeWithNames);
        }

        let positional = Regex::new(&format!(r"^{}\d+$", regex::escape(&self.prefix)))
            .map_err(PatternError::from)?;
        let mut seen = HashSet::new();
        for name in std::iter::once(self.source.clone()).chain(self.leading_names()) {
            if name.trim().is_empty() { return Err(ConfigError::Empty("column name")); }
            if positional.is_match(&name) || !seen.insert(name.clone()) {
                return Err(ConfigError::ColumnCollision(name));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Deployment {
    pub name: String,
    /// Page to fetch when no input is given; also the base for relative links.
    #[serde(default)]
    pub url: Option<String>,
    /// Default output file.
    #[serde(default)]
    pub output: Option<String>,
    pub modes: Vec<ExtractMode>,
    #[serde(default)]
    pub key_value: KeyValueSection,
    #[serde(default)]
    pub tabular: TabularSection,
    #[serde(default)]
    pub pattern: Option<PatternSection>,
    #[serde(default)]
    pub columns: ColumnSection,
}

impl Deployment {
    pub fn new(name: &str, modes: &[ExtractMode]) -> Self {
        Self {
            name: name.to_string(),
            url: None,
            output: None,
            modes: modes.to_vec(),
            key_value: KeyValueSection::default(),
            tabular: TabularSection::default(),
            pattern: None,
            columns: ColumnSection::default(),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, "<inline>")
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::parse(&text, &path.display().to_string())
    }

    fn parse(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let dep: Self = toml::from_str(text)
            .map_err(|source| ConfigError::Parse { origin: origin.to_string(), source })?;
        dep.validate()?;
        Ok(dep)
    }

    pub fn uses(&self, mode: ExtractMode) -> bool {
        self.modes.contains(&mode)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.modes.is_empty() { return Err(ConfigError::NoModes(self.name.clone())); }
        let mut seen = HashSet::new();
        for m in &self.modes {
            if !seen.insert(*m) { return Err(ConfigError::DuplicateMode(*m)); }
        }

        if let Some(url) = &self.url {
            url::Url::parse(url)
                .map_err(|source| ConfigError::InvalidUrl { url: url.clone(), source })?;
        }

        // Fixed labels of the singleton regions that are switched on
        let mut fixed: Vec<&str> = Vec::new();
        if self.uses(ExtractMode::KeyValue) {
            if self.key_value.label.is_empty() { return Err(ConfigError::Empty("key_value.label")); }
            if self.key_value.marker.value.is_empty() { return Err(ConfigError::Empty("key_value.marker.value")); }
            fixed.push(self.key_value.label.as_str());
        }
        if self.uses(ExtractMode::Pattern) {
            let pattern = self.pattern.as_ref().ok_or(ConfigError::MissingPatternSection)?;
            if pattern.label.is_empty() { return Err(ConfigError::Empty("pattern.label")); }
            if pattern.container.is_empty() { return Err(ConfigError::Empty("pattern.container")); }
            if let Some(re) = &pattern.token_regex {
                TokenPattern::compile(re)?;
            }
            DatePattern::compile(&pattern.date_format)?;
            if fixed.contains(&pattern.label.as_str()) {
                return Err(ConfigError::LabelCollision(pattern.label.clone()));
            }
            fixed.push(pattern.label.as_str());
        }
        if self.uses(ExtractMode::Tabular) {
            if !self.tabular.label.contains(TABLE_ORDINAL_PLACEHOLDER) {
                return Err(ConfigError::TemplatePlaceholder(self.tabular.label.clone()));
            }
            if let Some(label) = fixed.iter().find(|l| self.tabular.can_render(l)) {
                return Err(ConfigError::LabelCollision(label.to_string()));
            }
        }

        self.columns.validate()
    }
}

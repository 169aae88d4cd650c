// src/config/consts.rs

// Net
pub const USER_AGENT: &str = concat!("rowscrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Region labels
pub const DEFAULT_KEY_VALUE_LABEL: &str = "infobox";
pub const DEFAULT_KEY_VALUE_MARKER: &str = "infobox";
pub const DEFAULT_TABLE_LABEL: &str = "table_{n}";
pub const TABLE_ORDINAL_PLACEHOLDER: &str = "{n}";
pub const DEFAULT_LIST_LABEL: &str = "news_list";
pub const DEFAULT_LIST_CONTAINER: &str = "ul";

// Columns
pub const DEFAULT_SOURCE_COLUMN: &str = "Source";
pub const KEY_COLUMN: &str = "Key";
pub const DEFAULT_COLUMN_PREFIX: &str = "Col_";

// Dates
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

// Export
pub const DEFAULT_FILE_STEM: &str = "scraped";
pub const DEFAULT_LOG_FILTER: &str = "info";

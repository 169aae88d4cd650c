// src/engine/error.rs
use thiserror::Error;

/// Failures that escape the engine. Region and row gaps never do.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Zero rows survived across all regions.
    #[error("No data found.")]
    NoData,

    /// A padded row is not exactly the computed width. Normalizer bug.
    #[error("row {index} from '{label}' is {len} fields wide after padding, expected {expected}")]
    PadInvariant { index: usize, label: String, len: usize, expected: usize },

    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),
}

// src/engine/mod.rs
//! Classifier → Extractor → Normalizer over one page snapshot.
//!
//! Synchronous and single-threaded; every stage returns a fresh structure and
//! nothing is shared between runs.

pub mod classify;
pub mod engine;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod pattern;
pub mod types;

pub use engine::{Extraction, Pipeline};
pub use error::EngineError;
pub use types::{ExtractMode, ExtractableRegion, ExtractedRow, NormalizedDataset, RegionKind, RunReport};

// src/lib.rs
//! Structured extraction of tabular content from rendered pages.
//!
//! A page snapshot goes through three stages, configured by a [`Deployment`]:
//!
//! ```text
//! Page ─▶ engine::classify ─▶ engine::extract (per region) ─▶ engine::normalize ─▶ file / csv
//! ```
//!
//! ```no_run
//! use rowscrape::{specs, Pipeline};
//!
//! let html = std::fs::read_to_string("news.html")?;
//! let pipeline = Pipeline::new(specs::preset("dbf-news")?)?;
//! let out = pipeline.run_html(&html)?;
//! println!("{}", rowscrape::csv::dataset_to_string(&out.dataset, true, ','));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod csv;
pub mod engine;
pub mod error;
pub mod file;
pub mod log;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Deployment;
pub use engine::{Extraction, NormalizedDataset, Pipeline};
pub use error::{Error, Result};

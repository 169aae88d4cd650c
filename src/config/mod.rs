// src/config/mod.rs

pub mod consts;
pub mod deployment;
pub mod options;

pub use deployment::{ConfigError, Deployment};
pub use options::{ExportFormat, ExportOptions};

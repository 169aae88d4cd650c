// src/error.rs
use thiserror::Error;

use crate::config::ConfigError;
use crate::core::net::FetchError;
use crate::engine::EngineError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The run finished but nothing was extracted.
    pub fn is_no_data(&self) -> bool {
        matches!(self, Error::Engine(EngineError::NoData))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

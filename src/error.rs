//! Crate-level error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::data::{CleanError, LoaderError, ProcessorError, WriterError};
use crate::sets::SetError;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Console output failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error(transparent)]
    Writer(#[from] WriterError),
    #[error(transparent)]
    Processor(#[from] ProcessorError),
    #[error(transparent)]
    Clean(#[from] CleanError),
    #[error(transparent)]
    Set(#[from] SetError),
}

pub type Result<T, E = DemoError> = std::result::Result<T, E>;

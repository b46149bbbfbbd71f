use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::pdb::PdbError;
use crate::core::io::sequence::WriteError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Extraction(#[from] PdbError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

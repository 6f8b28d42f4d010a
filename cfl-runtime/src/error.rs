//! Error types for Cfluviurrh runtime

use cfl_core::ExecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Erro fatal do programa em execução
    #[error(transparent)]
    Execution(#[from] ExecError),

    #[error("Can't open {role} file '{path}': {source}")]
    Open {
        role: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Program too large: {size} bytes (limit {limit})")]
    ProgramTooLarge { size: usize, limit: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("No program loaded")]
    NoProgram,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;

impl From<toml::de::Error> for RuntimeError {
    fn from(err: toml::de::Error) -> Self {
        RuntimeError::Config(err.to_string())
    }
}

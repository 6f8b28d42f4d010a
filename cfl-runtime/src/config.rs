//! Runtime configuration (`cfluviurrh.toml`)
//!
//! ```toml
//! [machine]
//! uppercase = "alias"   # ou "indirect"
//! eof_value = -1
//! max_steps = 100000
//!
//! [loader]
//! max_program_size = 7999
//! ```

use std::path::Path;

use cfl_core::MachineConfig;
use serde::{Deserialize, Serialize};

use crate::error::{RuntimeError, RuntimeResult};

/// Capacidade do buffer de programa do interpretador de referência
pub const DEFAULT_MAX_PROGRAM_SIZE: usize = 7999;

/// Configuração do runtime
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Parâmetros da máquina
    pub machine: MachineConfig,

    /// Parâmetros do carregador
    pub loader: LoaderConfig,
}

/// Configuração do carregador de programas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Tamanho máximo do programa em bytes
    pub max_program_size: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_program_size: DEFAULT_MAX_PROGRAM_SIZE,
        }
    }
}

impl RuntimeConfig {
    /// Parse a configuration from TOML string
    pub fn from_toml(content: &str) -> RuntimeResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file path
    pub fn from_file(path: &Path) -> RuntimeResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RuntimeError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    fn validate(&self) -> RuntimeResult<()> {
        if self.loader.max_program_size == 0 {
            return Err(RuntimeError::Config(
                "loader.max_program_size must be positive".to_string(),
            ));
        }
        if i32::try_from(self.loader.max_program_size).is_err() {
            return Err(RuntimeError::Config(format!(
                "loader.max_program_size {} exceeds the register range",
                self.loader.max_program_size
            )));
        }
        Ok(())
    }
}

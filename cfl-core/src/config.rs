//! Configuração da máquina

use serde::{Deserialize, Serialize};

/// Interpretação de letras maiúsculas como referência de registrador
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UppercaseMode {
    /// `X` e `x` designam o mesmo registrador (leitura e escrita)
    #[default]
    Alias,
    /// `X` designa o registrador cujo índice está armazenado em `x`
    Indirect,
}

/// Configuração do interpretador
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Semântica das referências maiúsculas
    pub uppercase: UppercaseMode,

    /// Valor gravado por `<` no fim da entrada
    pub eof_value: i32,

    /// Limite de instruções executadas (None = ilimitado)
    pub max_steps: Option<u64>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            uppercase: UppercaseMode::Alias,
            eof_value: -1,
            max_steps: None,
        }
    }
}

impl MachineConfig {
    pub fn with_uppercase(mut self, mode: UppercaseMode) -> Self {
        self.uppercase = mode;
        self
    }

    pub fn with_eof_value(mut self, value: i32) -> Self {
        self.eof_value = value;
        self
    }

    pub fn with_max_steps(mut self, limit: u64) -> Self {
        self.max_steps = Some(limit);
        self
    }
}

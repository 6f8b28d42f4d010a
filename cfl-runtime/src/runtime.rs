//! Main runtime implementation

use std::io::{Read, Write};
use std::path::Path;

use cfl_core::{Emoter, ExecutionStats, Interpreter, Program, RegisterBank};
use serde::Serialize;
use tracing::info;

use crate::config::RuntimeConfig;
use crate::error::{RuntimeError, RuntimeResult};
use crate::loader::ProgramLoader;

/// Resultado de uma execução completa
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub stats: ExecutionStats,
    pub registers: RegisterBank,
}

/// Runtime principal para programas Cfluviurrh
pub struct CfluviurrhRuntime {
    config: RuntimeConfig,
    loader: ProgramLoader,
    program: Option<Program>,
}

impl CfluviurrhRuntime {
    /// Cria novo runtime
    pub fn new(config: RuntimeConfig) -> Self {
        let loader = ProgramLoader::new(config.loader.max_program_size);
        Self {
            config,
            loader,
            program: None,
        }
    }

    /// Carrega programa de arquivo
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> RuntimeResult<()> {
        self.program = Some(self.loader.load_file(path)?);
        Ok(())
    }

    /// Carrega texto de programa diretamente
    pub fn load_source(&mut self, source: impl Into<Vec<u8>>) -> RuntimeResult<()> {
        self.program = Some(self.loader.load_bytes(source)?);
        Ok(())
    }

    pub fn program(&self) -> Option<&Program> {
        self.program.as_ref()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Executa programa carregado
    pub fn run<R, W, E>(&self, input: R, output: W, emoter: E) -> RuntimeResult<RunReport>
    where
        R: Read,
        W: Write,
        E: Emoter,
    {
        let program = self.program.as_ref().ok_or(RuntimeError::NoProgram)?;

        let mut interpreter =
            Interpreter::with_config(program, input, output, emoter, self.config.machine.clone());
        let stats = interpreter.run()?;

        info!(
            steps = stats.steps,
            conditionals = stats.conditionals,
            jumps = stats.jumps,
            bytes_in = stats.bytes_in,
            bytes_out = stats.bytes_out,
            "execution complete"
        );

        Ok(RunReport {
            stats,
            registers: interpreter.registers().clone(),
        })
    }
}

impl Default for CfluviurrhRuntime {
    fn default() -> Self {
        Self::new(RuntimeConfig::default())
    }
}

//! Program loader and byte-stream helpers

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use cfl_core::Program;
use tracing::info;

use crate::config::DEFAULT_MAX_PROGRAM_SIZE;
use crate::error::{RuntimeError, RuntimeResult};

/// Carregador de programas Cfluviurrh
#[derive(Debug, Clone)]
pub struct ProgramLoader {
    max_program_size: usize,
}

impl ProgramLoader {
    pub fn new(max_program_size: usize) -> Self {
        Self { max_program_size }
    }

    /// Carrega programa de arquivo
    pub fn load_file(&self, path: impl AsRef<Path>) -> RuntimeResult<Program> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| RuntimeError::Open {
            role: "program",
            path: path.display().to_string(),
            source,
        })?;
        let program = self.load_bytes(bytes)?;
        info!(
            path = %path.display(),
            bytes = program.len(),
            labels = program.labels().len(),
            "program loaded"
        );
        Ok(program)
    }

    /// Carrega programa de bytes em memória
    pub fn load_bytes(&self, bytes: impl Into<Vec<u8>>) -> RuntimeResult<Program> {
        let program = Program::new(bytes);
        if program.len() > self.max_program_size {
            return Err(RuntimeError::ProgramTooLarge {
                size: program.len(),
                limit: self.max_program_size,
            });
        }
        Ok(program)
    }

    pub fn max_program_size(&self) -> usize {
        self.max_program_size
    }
}

impl Default for ProgramLoader {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PROGRAM_SIZE)
    }
}

/// Abre o arquivo de entrada lido por `<`
pub fn open_input(path: impl AsRef<Path>) -> RuntimeResult<BufReader<File>> {
    let path = path.as_ref();
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| RuntimeError::Open {
            role: "input",
            path: path.display().to_string(),
            source,
        })
}

/// Cria (ou trunca) o arquivo de saída escrito por `>`
pub fn create_output(path: impl AsRef<Path>) -> RuntimeResult<BufWriter<File>> {
    let path = path.as_ref();
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| RuntimeError::Open {
            role: "output",
            path: path.display().to_string(),
            source,
        })
}

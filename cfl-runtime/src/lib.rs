//! # 🏃 cfl-runtime — Runtime for Cfluviurrh Programs
//!
//! Liga um programa carregado aos streams de bytes e a um emoter humano.
//!
//! ## Fluxo de Execução
//!
//! ```text
//! program file
//!      ↓
//! ProgramLoader (limite de tamanho, terminador)
//!      ↓
//! ConsoleEmoter::obtain_consent ──→ [Goodbye.] (recusa)
//!      ↓
//! cfl_core::Interpreter ←── input file / ──→ output file
//!      ↓                    ConsoleEmoter (uma confirmação por `?`)
//! RunReport
//! ```
//!
//! ## Exemplo
//!
//! ```ignore
//! use cfl_runtime::{CfluviurrhRuntime, ConsoleEmoter, RuntimeConfig};
//!
//! let mut runtime = CfluviurrhRuntime::new(RuntimeConfig::default());
//! runtime.load_file("hello.cfl")?;
//!
//! let mut emoter = ConsoleEmoter::new(std::io::stdin().lock(), std::io::stdout());
//! let report = runtime.run(open_input("in.bin")?, create_output("out.bin")?, &mut emoter)?;
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod loader;
pub mod runtime;

pub use config::{LoaderConfig, RuntimeConfig};
pub use console::{Consent, ConsoleEmoter};
pub use error::{RuntimeError, RuntimeResult};
pub use loader::{ProgramLoader, create_output, open_input};
pub use runtime::{CfluviurrhRuntime, RunReport};

// Re-export core types
pub use cfl_core::{Emoter, EmotionCue, ExecError, ExecutionStats, MachineConfig, Program};

//! # 😶 cfl-core — Motor de execução Cfluviurrh
//!
//! Interpretador de uma máquina de 26 registradores cujo desvio condicional
//! exige que um humano (o *emoter*) sinta uma emoção antes de continuar.
//!
//! ## Componentes
//!
//! ```text
//! Program (texto imutável + índice de labels)
//!      ↓ cursor
//! Interpreter ──→ Lead / Instruction (classificação por símbolo)
//!      │    ├──→ RegisterBank   (a..z, referências maiúsculas)
//!      │    ├──→ Operator       (= += -= *= /=)
//!      │    ├──→ find_label     (@=)
//!      │    └──→ emotion::select ──→ Emoter::present (bloqueia)
//!      ↓
//! bytes de saída
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use cfl_core::{Interpreter, Program, SilentEmoter};
//!
//! let program = Program::from("a=5(comment)a>");
//! let mut interpreter = Interpreter::new(&program, &b""[..], Vec::new(), SilentEmoter);
//! interpreter.run()?;
//! assert_eq!(interpreter.into_output(), vec![5]);
//! # Ok::<(), cfl_core::ExecError>(())
//! ```

pub mod config;
pub mod emoter;
pub mod emotion;
pub mod error;
pub mod instruction;
pub mod interpreter;
pub mod label;
pub mod operator;
pub mod program;
pub mod registers;

pub use config::{MachineConfig, UppercaseMode};
pub use emoter::{Emoter, RecordingEmoter, SilentEmoter};
pub use emotion::{Emotion, EmotionCue, Intensity, EMOTIONS};
pub use error::{ExecError, ExecResult};
pub use instruction::{Instruction, Relation};
pub use interpreter::{ExecutionStats, Interpreter};
pub use label::{LabelIndex, find_label};
pub use operator::Operator;
pub use program::Program;
pub use registers::{REGISTER_COUNT, RegisterBank};

#[cfg(test)]
mod tests;

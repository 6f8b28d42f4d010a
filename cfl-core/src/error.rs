//! Erros de execução do interpretador

use thiserror::Error;

pub type ExecResult<T> = Result<T, ExecError>;

/// Erros fatais da máquina
///
/// Toda variante encerra a execução; não existe recuperação parcial.
#[derive(Debug, Error)]
pub enum ExecError {
    /// Símbolo não endereça nenhum registrador válido
    #[error("invalid register reference: '{symbol}' (offset {offset})")]
    InvalidReference { symbol: char, offset: usize },

    /// Programa terminou no meio de uma instrução
    #[error("premature end of program (offset {offset})")]
    PrematureEndOfProgram { offset: usize },

    #[error("unimplemented instruction: '{symbol}' (offset {offset})")]
    UnimplementedInstruction { symbol: char, offset: usize },

    #[error("unimplemented operator: '{symbol}' (offset {offset})")]
    UnimplementedOperator { symbol: char, offset: usize },

    #[error("unimplemented relop: '{symbol}' (offset {offset})")]
    UnimplementedRelop { symbol: char, offset: usize },

    /// `@=` apontou para um label inexistente
    #[error("undefined label: '{label}' (offset {offset})")]
    UndefinedLabel { label: char, offset: usize },

    #[error("division by zero (offset {offset})")]
    DivisionByZero { offset: usize },

    #[error("arithmetic overflow (offset {offset})")]
    ArithmeticOverflow { offset: usize },

    /// Registrador de destino de um salto não contém um offset do programa
    #[error("jump target {target} outside program (offset {offset})")]
    JumpOutOfBounds { target: i32, offset: usize },

    #[error("step limit of {limit} instructions exceeded")]
    StepLimitExceeded { limit: u64 },

    /// Falha nos streams de bytes (`<` / `>`)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// O emoter não conseguiu confirmar a emoção
    #[error("emoter failed to acknowledge: {0}")]
    Emoter(std::io::Error),
}

impl ExecError {
    /// Offset do programa onde o erro ocorreu, quando conhecido
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::InvalidReference { offset, .. }
            | Self::PrematureEndOfProgram { offset }
            | Self::UnimplementedInstruction { offset, .. }
            | Self::UnimplementedOperator { offset, .. }
            | Self::UnimplementedRelop { offset, .. }
            | Self::UndefinedLabel { offset, .. }
            | Self::DivisionByZero { offset }
            | Self::ArithmeticOverflow { offset }
            | Self::JumpOutOfBounds { offset, .. } => Some(*offset),
            Self::StepLimitExceeded { .. } | Self::Io(_) | Self::Emoter(_) => None,
        }
    }
}

//! Dispatcher de instruções
//!
//! Cursor único sobre o texto do programa, sem pré-processamento. Cada
//! passo consome uma instrução inteira: primeiro decodifica (leitura pura
//! do banco, na mesma ordem em que os símbolos aparecem) e depois executa
//! (escrita em registrador, I/O de bytes ou consulta ao emoter).

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::MachineConfig;
use crate::emoter::Emoter;
use crate::emotion;
use crate::error::{ExecError, ExecResult};
use crate::instruction::{Action, COMMENT_CLOSE, Instruction, Lead, Relation};
use crate::operator::{ArithmeticFault, Operator};
use crate::program::Program;
use crate::registers::{RegisterBank, register_name};

/// Contadores de uma execução
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStats {
    /// Instruções endereçadas executadas
    pub steps: u64,
    /// Instruções condicionais (= emoções apresentadas)
    pub conditionals: u64,
    /// Desvios efetivamente tomados
    pub jumps: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
}

/// Resultado da decodificação de um passo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decoded {
    /// Espaço, comentário ou declaração de label
    Skip { next: usize },
    Execute { instruction: Instruction, next: usize },
}

/// Interpretador: dono do banco, do cursor e dos streams
pub struct Interpreter<'p, R, W, E> {
    program: &'p Program,
    registers: RegisterBank,
    cursor: usize,
    input: R,
    output: W,
    emoter: E,
    config: MachineConfig,
    stats: ExecutionStats,
}

impl<'p, R: Read, W: Write, E: Emoter> Interpreter<'p, R, W, E> {
    /// Cria interpretador com configuração padrão
    pub fn new(program: &'p Program, input: R, output: W, emoter: E) -> Self {
        Self::with_config(program, input, output, emoter, MachineConfig::default())
    }

    pub fn with_config(
        program: &'p Program,
        input: R,
        output: W,
        emoter: E,
        config: MachineConfig,
    ) -> Self {
        Self {
            program,
            registers: RegisterBank::new(),
            cursor: 0,
            input,
            output,
            emoter,
            config,
            stats: ExecutionStats::default(),
        }
    }

    /// Executa até o terminador
    ///
    /// A saída é descarregada mesmo quando a execução falha, para que os
    /// bytes escritos antes do erro não se percam.
    pub fn run(&mut self) -> ExecResult<ExecutionStats> {
        let outcome = self.run_to_halt();
        let flushed = self.output.flush();
        outcome?;
        flushed?;
        debug!(stats = ?self.stats, "program halted");
        Ok(self.stats)
    }

    fn run_to_halt(&mut self) -> ExecResult<()> {
        while self.step()? {}
        Ok(())
    }

    /// Executa um passo de varredura; `false` quando o programa terminou
    pub fn step(&mut self) -> ExecResult<bool> {
        if self.is_halted() {
            return Ok(false);
        }
        match self.decode()? {
            Decoded::Skip { next } => self.cursor = next,
            Decoded::Execute { instruction, next } => {
                if let Some(limit) = self.config.max_steps {
                    if self.stats.steps >= limit {
                        return Err(ExecError::StepLimitExceeded { limit });
                    }
                }
                trace!(offset = self.cursor, ?instruction, "dispatch");
                self.stats.steps += 1;
                self.execute(instruction, next)?;
            }
        }
        Ok(!self.is_halted())
    }

    pub fn is_halted(&self) -> bool {
        self.cursor >= self.program.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn registers(&self) -> &RegisterBank {
        &self.registers
    }

    pub fn stats(&self) -> &ExecutionStats {
        &self.stats
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn emoter(&self) -> &E {
        &self.emoter
    }

    /// Devolve o stream de saída
    pub fn into_output(self) -> W {
        self.output
    }

    // ═══════════════════════════════════════════════════════════════════
    // Decodificação
    // ═══════════════════════════════════════════════════════════════════

    fn decode(&self) -> ExecResult<Decoded> {
        let start = self.cursor;
        let len = self.program.len();
        let text = self.program.as_bytes();

        match Lead::classify(text[start]) {
            Lead::Whitespace => Ok(Decoded::Skip { next: start + 1 }),
            Lead::Comment => {
                let next = text[start..]
                    .iter()
                    .position(|&b| b == COMMENT_CLOSE)
                    .map_or(len, |close| start + close + 1);
                Ok(Decoded::Skip { next })
            }
            Lead::Label => {
                if start + 1 >= len {
                    return Err(ExecError::PrematureEndOfProgram { offset: len });
                }
                Ok(Decoded::Skip { next: start + 2 })
            }
            Lead::Immediate(symbol) => Err(ExecError::InvalidReference {
                symbol: char::from(symbol),
                offset: start,
            }),
            Lead::Unknown(symbol) => Err(ExecError::UnimplementedInstruction {
                symbol: char::from(symbol),
                offset: start,
            }),
            Lead::Address(reference) => {
                let target = self
                    .registers
                    .resolve_reference(reference, self.config.uppercase)
                    .ok_or(ExecError::InvalidReference {
                        symbol: char::from(text[start]),
                        offset: start,
                    })?;
                self.decode_addressed(target, start)
            }
        }
    }

    fn decode_addressed(&self, target: usize, start: usize) -> ExecResult<Decoded> {
        let mut pos = start;
        let mut symbol = self.advance(&mut pos)?;

        let operator = match Operator::from_symbol(symbol) {
            Some(op) => {
                symbol = self.advance(&mut pos)?;
                op
            }
            None => Operator::Assign,
        };

        let action = Action::from_symbol(symbol).ok_or(ExecError::UnimplementedOperator {
            symbol: char::from(symbol),
            offset: pos,
        })?;

        let instruction = match action {
            Action::Assign => {
                let operand = self.advance(&mut pos)?;
                if operator == Operator::Label {
                    let offset = self.program.label(operand).ok_or(ExecError::UndefinedLabel {
                        label: char::from(operand),
                        offset: pos,
                    })?;
                    Instruction::LabelAssign { target, label: operand, offset }
                } else {
                    let value = self.resolve_value(operand, pos)?;
                    Instruction::Assign { target, operator, value }
                }
            }
            Action::Output => Instruction::Output { target },
            Action::Input => Instruction::Input { target },
            Action::Branch => {
                let lhs_symbol = self.advance(&mut pos)?;
                let lhs = self.resolve_value(lhs_symbol, pos)?;
                let relop = self.advance(&mut pos)?;
                let relation = Relation::from_symbol(relop).ok_or(ExecError::UnimplementedRelop {
                    symbol: char::from(relop),
                    offset: pos,
                })?;
                let rhs_symbol = self.advance(&mut pos)?;
                let rhs = self.resolve_value(rhs_symbol, pos)?;
                Instruction::Branch { target, lhs, relation, rhs }
            }
        };

        Ok(Decoded::Execute { instruction, next: pos + 1 })
    }

    /// Avança o cursor local; o fim do programa aqui é sempre prematuro
    fn advance(&self, pos: &mut usize) -> ExecResult<u8> {
        *pos += 1;
        self.program
            .get(*pos)
            .ok_or(ExecError::PrematureEndOfProgram { offset: *pos })
    }

    fn resolve_value(&self, symbol: u8, offset: usize) -> ExecResult<i32> {
        self.registers
            .resolve_value(symbol, self.config.uppercase)
            .ok_or(ExecError::InvalidReference { symbol: char::from(symbol), offset })
    }

    // ═══════════════════════════════════════════════════════════════════
    // Execução
    // ═══════════════════════════════════════════════════════════════════

    fn execute(&mut self, instruction: Instruction, next: usize) -> ExecResult<()> {
        let offset = self.cursor;
        match instruction {
            Instruction::Assign { target, operator, value } => {
                let current = self.registers.get(target);
                let result = operator.apply(current, value).map_err(|fault| match fault {
                    ArithmeticFault::DivisionByZero => ExecError::DivisionByZero { offset },
                    ArithmeticFault::Overflow => ExecError::ArithmeticOverflow { offset },
                })?;
                self.registers.set(target, result);
            }
            Instruction::LabelAssign { target, label, offset: label_offset } => {
                debug!(
                    register = %register_name(target),
                    label = %char::from(label),
                    label_offset,
                    "label assigned"
                );
                let value = i32::try_from(label_offset)
                    .map_err(|_| ExecError::ArithmeticOverflow { offset })?;
                self.registers.set(target, value);
            }
            Instruction::Output { target } => {
                let byte = self.registers.get(target) as u8;
                self.output.write_all(&[byte])?;
                self.stats.bytes_out += 1;
            }
            Instruction::Input { target } => {
                let value = match self.input.by_ref().bytes().next() {
                    Some(byte) => {
                        self.stats.bytes_in += 1;
                        i32::from(byte?)
                    }
                    None => self.config.eof_value,
                };
                self.registers.set(target, value);
            }
            Instruction::Branch { target, lhs, relation, rhs } => {
                let taken = relation.holds(lhs, rhs);
                let cue = emotion::select(&self.registers);
                self.stats.conditionals += 1;
                debug!(
                    offset,
                    lhs,
                    relation = %relation.symbol(),
                    rhs,
                    taken,
                    %cue,
                    "conditional"
                );
                self.emoter.present(&cue).map_err(ExecError::Emoter)?;

                if taken {
                    let destination = self.registers.get(target);
                    self.cursor = usize::try_from(destination)
                        .ok()
                        .filter(|&d| d <= self.program.len())
                        .ok_or(ExecError::JumpOutOfBounds { target: destination, offset })?;
                    self.stats.jumps += 1;
                    return Ok(());
                }
            }
        }
        self.cursor = next;
        Ok(())
    }
}

//! Banco de registradores `a`..`z`
//!
//! Vinte e seis células inteiras de 32 bits, zeradas no início de cada
//! execução. Letras minúsculas são endereços diretos; maiúsculas são
//! leituras indiretas cuja semântica depende de [`UppercaseMode`].

use serde::{Deserialize, Serialize};

use crate::config::UppercaseMode;

/// Número de registradores (um por letra minúscula)
pub const REGISTER_COUNT: usize = 26;

/// Referência a registrador extraída de um símbolo do programa
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reference {
    /// `a`..`z`
    Direct(u8),
    /// `A`..`Z`
    Indirect(u8),
}

impl Reference {
    /// Classifica um símbolo; `None` se não for letra ASCII
    pub fn parse(symbol: u8) -> Option<Self> {
        match symbol {
            b'a'..=b'z' => Some(Self::Direct(symbol - b'a')),
            b'A'..=b'Z' => Some(Self::Indirect(symbol - b'A')),
            _ => None,
        }
    }

    /// Índice da letra (0-25), independente da caixa
    pub fn letter(self) -> usize {
        match self {
            Self::Direct(i) | Self::Indirect(i) => i as usize,
        }
    }
}

/// Nome do registrador de índice `index`
pub fn register_name(index: usize) -> char {
    debug_assert!(index < REGISTER_COUNT);
    char::from(b'a' + index as u8)
}

/// Banco de registradores
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterBank {
    cells: [i32; REGISTER_COUNT],
}

impl RegisterBank {
    /// Cria banco zerado
    pub fn new() -> Self {
        Self { cells: [0; REGISTER_COUNT] }
    }

    /// Cria banco a partir de valores explícitos
    pub fn from_cells(cells: [i32; REGISTER_COUNT]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn get(&self, index: usize) -> i32 {
        self.cells[index]
    }

    #[inline]
    pub fn set(&mut self, index: usize, value: i32) {
        self.cells[index] = value;
    }

    pub fn cells(&self) -> &[i32; REGISTER_COUNT] {
        &self.cells
    }

    /// Zera todas as células
    pub fn clear(&mut self) {
        self.cells = [0; REGISTER_COUNT];
    }

    /// Resolve uma referência para um índice do banco
    ///
    /// Em modo `Indirect`, `X` lê o valor de `x` e o usa como índice;
    /// valores fora de `[0, 26)` não endereçam nada.
    pub fn resolve_reference(&self, reference: Reference, mode: UppercaseMode) -> Option<usize> {
        match (reference, mode) {
            (Reference::Direct(i), _) | (Reference::Indirect(i), UppercaseMode::Alias) => {
                Some(i as usize)
            }
            (Reference::Indirect(i), UppercaseMode::Indirect) => {
                let target = self.cells[i as usize];
                usize::try_from(target).ok().filter(|&t| t < REGISTER_COUNT)
            }
        }
    }

    /// Resolve um símbolo de endereço (`a`..`z`, `A`..`Z`)
    pub fn resolve_address(&self, symbol: u8, mode: UppercaseMode) -> Option<usize> {
        Reference::parse(symbol).and_then(|r| self.resolve_reference(r, mode))
    }

    /// Resolve um símbolo de valor: dígito imediato ou conteúdo de registrador
    pub fn resolve_value(&self, symbol: u8, mode: UppercaseMode) -> Option<i32> {
        if symbol.is_ascii_digit() {
            return Some((symbol - b'0') as i32);
        }
        self.resolve_address(symbol, mode).map(|index| self.cells[index])
    }
}

impl Default for RegisterBank {
    fn default() -> Self {
        Self::new()
    }
}

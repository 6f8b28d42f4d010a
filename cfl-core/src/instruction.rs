//! Classificação de instruções
//!
//! O dispatcher não constrói AST: a cada passo classifica o símbolo sob o
//! cursor ([`Lead`]) e, para instruções endereçadas, decodifica uma
//! [`Instruction`] com os operandos já resolvidos.

use crate::operator::Operator;
use crate::registers::Reference;

pub const COMMENT_OPEN: u8 = b'(';
pub const COMMENT_CLOSE: u8 = b')';

/// Espaço em branco transparente
pub fn is_whitespace(symbol: u8) -> bool {
    matches!(symbol, b' ' | b'\t' | b'\n' | b'\r')
}

/// Classe do símbolo que inicia um passo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lead {
    Whitespace,
    /// `(` ... `)`
    Comment,
    /// `:` + símbolo
    Label,
    /// Registrador de destino
    Address(Reference),
    /// Dígito onde se espera endereço
    Immediate(u8),
    Unknown(u8),
}

impl Lead {
    pub fn classify(symbol: u8) -> Self {
        if let Some(reference) = Reference::parse(symbol) {
            return Self::Address(reference);
        }
        match symbol {
            s if is_whitespace(s) => Self::Whitespace,
            COMMENT_OPEN => Self::Comment,
            crate::label::LABEL_MARKER => Self::Label,
            b'0'..=b'9' => Self::Immediate(symbol),
            _ => Self::Unknown(symbol),
        }
    }
}

/// Ação que segue endereço + operador
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `=`
    Assign,
    /// `>`
    Output,
    /// `<`
    Input,
    /// `?`
    Branch,
}

impl Action {
    pub fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            b'=' => Some(Self::Assign),
            b'>' => Some(Self::Output),
            b'<' => Some(Self::Input),
            b'?' => Some(Self::Branch),
            _ => None,
        }
    }
}

/// Relação de uma instrução condicional
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Equal,
    Greater,
    Less,
}

impl Relation {
    pub fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            b'=' => Some(Self::Equal),
            b'>' => Some(Self::Greater),
            b'<' => Some(Self::Less),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Equal => '=',
            Self::Greater => '>',
            Self::Less => '<',
        }
    }

    pub fn holds(self, lhs: i32, rhs: i32) -> bool {
        match self {
            Self::Equal => lhs == rhs,
            Self::Greater => lhs > rhs,
            Self::Less => lhs < rhs,
        }
    }
}

/// Instrução endereçada, decodificada e com operandos resolvidos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `x=v`, `x+=v`, ...
    Assign { target: usize, operator: Operator, value: i32 },
    /// `x@=L`: grava o offset do label
    LabelAssign { target: usize, label: u8, offset: usize },
    /// `x>`
    Output { target: usize },
    /// `x<`
    Input { target: usize },
    /// `x?lRr`: salta para o offset em `x` se a relação valer
    Branch { target: usize, lhs: i32, relation: Relation, rhs: i32 },
}

impl Instruction {
    /// Registrador de destino
    pub fn target(&self) -> usize {
        match *self {
            Self::Assign { target, .. }
            | Self::LabelAssign { target, .. }
            | Self::Output { target }
            | Self::Input { target }
            | Self::Branch { target, .. } => target,
        }
    }
}

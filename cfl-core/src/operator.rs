//! Avaliador de operadores de atribuição

/// Operador de uma atribuição `x<op>=v`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    /// Sem operador: atribuição simples
    #[default]
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    /// `@`: o operando é um nome de label, tratado pelo dispatcher
    Label,
}

/// Falha aritmética fatal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticFault {
    DivisionByZero,
    Overflow,
}

impl Operator {
    /// Reconhece `+ - * / @`
    pub fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            b'+' => Some(Self::Add),
            b'-' => Some(Self::Sub),
            b'*' => Some(Self::Mul),
            b'/' => Some(Self::Div),
            b'@' => Some(Self::Label),
            _ => None,
        }
    }

    pub fn symbol(self) -> Option<char> {
        match self {
            Self::Assign => None,
            Self::Add => Some('+'),
            Self::Sub => Some('-'),
            Self::Mul => Some('*'),
            Self::Div => Some('/'),
            Self::Label => Some('@'),
        }
    }

    /// Aplica o operador a `lhs` (valor atual) e `rhs` (operando)
    ///
    /// Overflow nunca é silencioso: qualquer resultado fora de `i32` é
    /// [`ArithmeticFault::Overflow`].
    pub fn apply(self, lhs: i32, rhs: i32) -> Result<i32, ArithmeticFault> {
        match self {
            Self::Assign => Ok(rhs),
            Self::Add => lhs.checked_add(rhs).ok_or(ArithmeticFault::Overflow),
            Self::Sub => lhs.checked_sub(rhs).ok_or(ArithmeticFault::Overflow),
            Self::Mul => lhs.checked_mul(rhs).ok_or(ArithmeticFault::Overflow),
            Self::Div if rhs == 0 => Err(ArithmeticFault::DivisionByZero),
            Self::Div => lhs.checked_div(rhs).ok_or(ArithmeticFault::Overflow),
            // Interceptado antes pelo dispatcher; identidade
            Self::Label => Ok(lhs),
        }
    }
}

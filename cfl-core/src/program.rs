//! Texto imutável do programa

use crate::label::LabelIndex;

/// Sentinela de fim de programa
pub const TERMINATOR: u8 = 0;

/// Programa carregado
///
/// O texto termina no primeiro byte NUL, se houver. Depois de construído
/// nunca é alterado; o índice de labels é calculado aqui.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    text: Vec<u8>,
    labels: LabelIndex,
}

impl Program {
    pub fn new(source: impl Into<Vec<u8>>) -> Self {
        let mut text = source.into();
        if let Some(end) = text.iter().position(|&b| b == TERMINATOR) {
            text.truncate(end);
        }
        let labels = LabelIndex::build(&text);
        Self { text, labels }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Símbolo em `offset`; `None` no terminador
    #[inline]
    pub fn get(&self, offset: usize) -> Option<u8> {
        self.text.get(offset).copied()
    }

    /// Offset do primeiro `:label`
    pub fn label(&self, label: u8) -> Option<usize> {
        self.labels.get(label)
    }

    pub fn labels(&self) -> &LabelIndex {
        &self.labels
    }
}

impl From<&str> for Program {
    fn from(source: &str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl From<&[u8]> for Program {
    fn from(source: &[u8]) -> Self {
        Self::new(source)
    }
}

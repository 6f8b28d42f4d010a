//! Resolução de labels
//!
//! Um label é qualquer par `:` + símbolo em qualquer posição do programa,
//! inclusive dentro de comentários. A primeira ocorrência vence e o offset
//! resolvido é o do `:`.

use std::collections::BTreeMap;

/// Marcador de declaração de label
pub const LABEL_MARKER: u8 = b':';

/// Varredura linear da esquerda para a direita
pub fn find_label(program: &[u8], label: u8) -> Option<usize> {
    program
        .windows(2)
        .position(|pair| pair[0] == LABEL_MARKER && pair[1] == label)
}

/// Tabela label → offset calculada uma vez no carregamento
///
/// Equivalente a [`find_label`] para qualquer símbolo, já que o programa
/// é imutável depois de carregado.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelIndex {
    offsets: BTreeMap<u8, usize>,
}

impl LabelIndex {
    pub fn build(program: &[u8]) -> Self {
        let mut offsets = BTreeMap::new();
        for (offset, pair) in program.windows(2).enumerate() {
            if pair[0] == LABEL_MARKER {
                offsets.entry(pair[1]).or_insert(offset);
            }
        }
        Self { offsets }
    }

    pub fn get(&self, label: u8) -> Option<usize> {
        self.offsets.get(&label).copied()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Labels declarados, em ordem de símbolo
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.offsets.iter().map(|(&label, &offset)| (char::from(label), offset))
    }
}

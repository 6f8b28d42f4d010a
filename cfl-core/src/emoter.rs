//! # 🎭 Emoter — ponto de sincronização com o operador humano
//!
//! > *"Trait no core, implementação no módulo."*
//!
//! O dispatcher chama [`Emoter::present`] antes de decidir qualquer desvio
//! condicional e só continua quando a chamada retorna. O conteúdo da
//! confirmação não tem significado para a linguagem. A implementação de
//! console vive em `cfl-runtime`; aqui ficam as implementações em memória.

use std::io;

use crate::emotion::EmotionCue;

/// Capacidade injetada no interpretador
pub trait Emoter {
    /// Apresenta a emoção e bloqueia até a confirmação
    fn present(&mut self, cue: &EmotionCue) -> io::Result<()>;
}

impl<E: Emoter + ?Sized> Emoter for &mut E {
    fn present(&mut self, cue: &EmotionCue) -> io::Result<()> {
        (**self).present(cue)
    }
}

impl<E: Emoter + ?Sized> Emoter for Box<E> {
    fn present(&mut self, cue: &EmotionCue) -> io::Result<()> {
        (**self).present(cue)
    }
}

/// Confirma imediatamente, sem registrar nada
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentEmoter;

impl Emoter for SilentEmoter {
    fn present(&mut self, _cue: &EmotionCue) -> io::Result<()> {
        Ok(())
    }
}

/// Confirma imediatamente e guarda cada emoção pedida
#[derive(Debug, Clone, Default)]
pub struct RecordingEmoter {
    cues: Vec<EmotionCue>,
}

impl RecordingEmoter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cues(&self) -> &[EmotionCue] {
        &self.cues
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}

impl Emoter for RecordingEmoter {
    fn present(&mut self, cue: &EmotionCue) -> io::Result<()> {
        self.cues.push(*cue);
        Ok(())
    }
}

//! # Seletor de emoções
//!
//! Função pura do banco de registradores que escolhe a emoção e a
//! intensidade exigidas do emoter a cada instrução condicional.
//!
//! ```text
//! emoção     = (Σ r[i]) mod 74
//! intensidade = (Σ (r[i] * 3) mod 5) mod 5
//! ```
//!
//! O acumulador é `i32` com aritmética modular (wrapping), reduzido a cada
//! parcela; o resto final é euclidiano, então os índices ficam sempre
//! dentro das tabelas, inclusive com registradores negativos.

use std::fmt;

use serde::Serialize;

use crate::registers::RegisterBank;

/// Tabela de emoções, na ordem canônica
pub const EMOTIONS: [&str; 74] = [
    "sadness", "sorrow", "despair", "worry", "depression", "misery", "melancholy",
    "wistfulness", "disappointment", "regret", "longing", "impatience", "anger",
    "hostility", "rage", "hatred", "disgust", "contempt", "envy", "arrogance",
    "betrayal", "hurt", "grief", "remorse", "shame", "embarrassment", "guilt",
    "timidity", "loneliness", "annoyance", "frustration", "confusion", "shock",
    "angst", "anguish", "anxiety", "apathy", "vindication", "gratitude", "hope", "awe",
    "wonder", "surprise", "pity", "boredom", "apprehension", "distrust", "dread",
    "horror", "loathing", "terror", "panic", "hysteria", "pride", "anticipation",
    "curiosity", "boldness", "excitement", "thrill", "zeal", "enthusiasm", "calmness",
    "contentment", "satisfaction", "happiness", "bliss", "joy", "ecstasy", "euphoria",
    "admiration", "desire", "passion", "love", "lust",
];

pub const EMOTION_COUNT: i32 = EMOTIONS.len() as i32;
pub const INTENSITY_COUNT: i32 = Intensity::ALL.len() as i32;

/// Emoção (índice em [`EMOTIONS`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Emotion(u8);

impl Emotion {
    /// `None` se `index` estiver fora da tabela
    pub fn from_index(index: usize) -> Option<Self> {
        (index < EMOTIONS.len()).then_some(Self(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn name(self) -> &'static str {
        EMOTIONS[self.0 as usize]
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Intensidade da emoção
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Faint,
    Mild,
    Moderate,
    Marked,
    Extreme,
}

impl Intensity {
    pub const ALL: [Intensity; 5] = [
        Intensity::Faint,
        Intensity::Mild,
        Intensity::Moderate,
        Intensity::Marked,
        Intensity::Extreme,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Faint => "faint",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Marked => "marked",
            Self::Extreme => "extreme",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Par (intensidade, emoção) apresentado ao emoter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EmotionCue {
    pub emotion: Emotion,
    pub intensity: Intensity,
}

impl fmt::Display for EmotionCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.intensity, self.emotion)
    }
}

/// Índice de emoção: soma dos registradores módulo 74
pub fn emotion_index(registers: &RegisterBank) -> usize {
    let sum = registers
        .cells()
        .iter()
        .fold(0i32, |acc, &r| acc.wrapping_add(r) % EMOTION_COUNT);
    sum.rem_euclid(EMOTION_COUNT) as usize
}

/// Índice de intensidade: soma de `(r * 3) mod 5`, módulo 5
pub fn intensity_index(registers: &RegisterBank) -> usize {
    let sum = registers
        .cells()
        .iter()
        .fold(0i32, |acc, &r| acc.wrapping_add(r.wrapping_mul(3) % INTENSITY_COUNT));
    sum.rem_euclid(INTENSITY_COUNT) as usize
}

/// Seleciona a emoção para o estado atual do banco
pub fn select(registers: &RegisterBank) -> EmotionCue {
    let emotion = Emotion(emotion_index(registers) as u8);
    let intensity = Intensity::ALL[intensity_index(registers)];
    EmotionCue { emotion, intensity }
}

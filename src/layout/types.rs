use crate::config::LayoutConfig;
use crate::ir::Tone;

/// A laid-out word: its pattern, text and one point per character.
#[derive(Debug, Clone, PartialEq)]
pub struct WordLayout {
    pub pattern: String,
    pub text: String,
    pub tones: Vec<Tone>,
    pub points: Vec<(f32, f32)>,
}

impl WordLayout {
    /// Points paired with their label characters, left to right.
    pub fn labels(&self) -> impl Iterator<Item = ((f32, f32), char)> + '_ {
        self.points.iter().copied().zip(self.text.chars())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub words: Vec<WordLayout>,
    pub width: f32,
    pub height: f32,
    pub config: LayoutConfig,
}

impl Layout {
    pub fn point_count(&self) -> usize {
        self.words.iter().map(|word| word.points.len()).sum()
    }

    pub fn points(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.words.iter().flat_map(|word| word.points.iter().copied())
    }
}

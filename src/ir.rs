use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    High,
    Low,
}

impl Tone {
    /// Only an uppercase `H` is high; every other character sits on the low row.
    pub fn from_char(ch: char) -> Self {
        if ch == 'H' { Self::High } else { Self::Low }
    }
}

/// One (tone pattern, text) pair, already checked for equal character counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchWord {
    pub pattern: String,
    pub text: String,
}

impl PitchWord {
    pub fn new(pattern: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            text: text.into(),
        }
    }

    pub fn tones(&self) -> impl Iterator<Item = Tone> + '_ {
        self.pattern.chars().map(Tone::from_char)
    }

    pub fn len(&self) -> usize {
        self.pattern.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}

use thiserror::Error;

/// Validation failures raised before anything is drawn.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiagramError {
    #[error("word count mismatch: {patterns} pitch pattern(s) but {texts} text string(s)")]
    WordCountMismatch { patterns: usize, texts: usize },

    #[error(
        "length mismatch in word {index}: pitch pattern {pattern:?} has {pattern_len} character(s) but text string {text:?} has {text_len}"
    )]
    LengthMismatch {
        index: usize,
        pattern: String,
        text: String,
        pattern_len: usize,
        text_len: usize,
    },

    #[error("invalid {name}: {value} (must be finite and non-negative)")]
    InvalidParameter { name: &'static str, value: f32 },
}

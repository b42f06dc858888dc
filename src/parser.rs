use crate::error::DiagramError;
use crate::ir::PitchWord;

/// Pairs tone patterns with their text strings.
///
/// Fails if the two lists differ in length, or if any pattern and its text
/// differ in character count. Nothing is drawn until this succeeds.
pub fn pair_words<P, T>(patterns: &[P], texts: &[T]) -> Result<Vec<PitchWord>, DiagramError>
where
    P: AsRef<str>,
    T: AsRef<str>,
{
    if patterns.len() != texts.len() {
        return Err(DiagramError::WordCountMismatch {
            patterns: patterns.len(),
            texts: texts.len(),
        });
    }

    let mut words = Vec::with_capacity(patterns.len());
    for (index, (pattern, text)) in patterns.iter().zip(texts).enumerate() {
        let word = PitchWord::new(pattern.as_ref(), text.as_ref());
        check_word(index, &word)?;
        words.push(word);
    }
    Ok(words)
}

/// Single-word convenience: a batch of one.
pub fn parse_word(pattern: &str, text: &str) -> Result<PitchWord, DiagramError> {
    let word = PitchWord::new(pattern, text);
    check_word(0, &word)?;
    Ok(word)
}

pub(crate) fn check_word(index: usize, word: &PitchWord) -> Result<(), DiagramError> {
    let pattern_len = word.pattern.chars().count();
    let text_len = word.text.chars().count();
    if pattern_len != text_len {
        return Err(DiagramError::LengthMismatch {
            index,
            pattern: word.pattern.clone(),
            text: word.text.clone(),
            pattern_len,
            text_len,
        });
    }
    Ok(())
}

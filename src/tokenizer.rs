//! src/tokenizer.rs

#[derive(Debug, thiserror::Error)]
#[error("document is not valid UTF-8")]
pub struct DecodeError(#[from] std::str::Utf8Error);

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Decodes a raw document and splits it into lowercase word tokens.
///
/// The text is case-folded as a whole, then split on every run of
/// characters outside {letters, digits, underscore}. Empty fragments from
/// leading, trailing, or consecutive separators are dropped, so only real
/// words reach the tally.
pub fn tokenize(bytes: &[u8]) -> Result<Vec<String>, DecodeError> {
    let text = std::str::from_utf8(bytes)?;
    let tokens = text
        .to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect();
    Ok(tokens)
}

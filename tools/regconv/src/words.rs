//! Register word parsing for command line input
//!
//! Words are hexadecimal by default (`3F80`, `0x3F80`); a `#` prefix marks
//! decimal (`#16256`). Arguments may also carry several words separated by
//! commas, so `0x3F80,0x0000` and `0x3F80 0x0000` are equivalent.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordError {
    #[error("Invalid register word '{0}'")]
    Invalid(String),

    #[error("Register word '{0}' does not fit in 16 bits")]
    OutOfRange(String),

    #[error("No register words given")]
    Empty,
}

/// Parse one register word
pub fn parse_word(token: &str) -> Result<u16, WordError> {
    let token = token.trim();
    let (digits, radix) = if let Some(dec) = token.strip_prefix('#') {
        (dec, 10)
    } else if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        (hex, 16)
    } else {
        (token, 16)
    };

    let digits = digits.replace('_', "");
    if digits.is_empty() {
        return Err(WordError::Invalid(token.to_string()));
    }

    let value =
        u32::from_str_radix(&digits, radix).map_err(|_| WordError::Invalid(token.to_string()))?;
    u16::try_from(value).map_err(|_| WordError::OutOfRange(token.to_string()))
}

/// Parse every word of every argument, in order
pub fn parse_words<S: AsRef<str>>(args: &[S]) -> Result<Vec<u16>, WordError> {
    let words = args
        .iter()
        .flat_map(|arg| arg.as_ref().split(','))
        .filter(|token| !token.trim().is_empty())
        .map(parse_word)
        .collect::<Result<Vec<_>, _>>()?;

    if words.is_empty() {
        return Err(WordError::Empty);
    }
    Ok(words)
}

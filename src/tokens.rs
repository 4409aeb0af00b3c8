use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

const FLAG_DELIMITER: char = '-';
const VALUE_DELIMITER: char = ' ';

/// Trim the control characters and spaces (everything up to `U+0020`) from both ends of `value`.
///
/// Other Unicode whitespace, such as a non-breaking space, is kept.
pub(crate) fn trim_blank(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

/// A single `(name, value)` pair taken from the raw argument string.
///
/// For example, `-c "Hello"` produces the token `("c", "\"Hello\"")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ArgumentToken {
    name: String,
    value: String,
}

impl ArgumentToken {
    pub(crate) fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The flag name, without the leading `-`.
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// The raw (unconverted) value that followed the flag name.
    pub(crate) fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum TokenError {
    #[error("Malformed argument '{0}': expected a flag name followed by a value.")]
    Malformed(String),
}

/// Split the raw argument string into its `(name, value)` tokens, in input order.
///
/// The string is split on every `-`, so a value containing a hyphen (ex: `-5`, `well-known`) is torn apart.
/// Each remaining piece is then split on its first space.
pub(crate) fn tokenize(raw: &str) -> Result<Vec<ArgumentToken>, TokenError> {
    let mut tokens = Vec::default();

    for piece in raw
        .split(FLAG_DELIMITER)
        .map(trim_blank)
        .filter(|piece| !piece.is_empty())
    {
        let (name, value) = piece
            .split_once(VALUE_DELIMITER)
            .ok_or_else(|| TokenError::Malformed(piece.to_string()))?;
        tokens.push(ArgumentToken::new(trim_blank(name), trim_blank(value)));
    }

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Arguments '{raw}' produced {} token(s): {tokens:?}.", tokens.len());
    }

    Ok(tokens)
}

use std::collections::HashMap;
use std::env;
use thiserror::Error;

use crate::model::Args;
use crate::schema::*;
use crate::tokens::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

const QUOTE: char = '"';
const TRUE: &str = "true";
const FALSE: &str = "false";

/// The reasons constructing an [`Args`] may fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsParseError {
    /// The number of argument tokens differs from the number of schema declarations.
    #[error("Number of supplied args did not match number of expected args")]
    CountMismatch {
        /// The number of declarations in the schema.
        expected: usize,
        /// The number of `(name, value)` tokens in the arguments.
        provided: usize,
    },

    /// A string field's value is not exactly one double-quoted segment.
    #[error("Expected 1 value")]
    ExpectedOneValue {
        /// The declaration of the failing field.
        declaration: String,
        /// The flag name the value was given under, without the leading `-`.
        flag: String,
        /// The raw value supplied for it.
        value: String,
    },

    /// A boolean field's value is neither `true` nor `false`.
    #[error("Expected either 'true' or 'false' for boolean arg")]
    InvalidBoolean {
        /// The declaration of the failing field.
        declaration: String,
        /// The flag name the value was given under, without the leading `-`.
        flag: String,
        /// The raw value supplied for it.
        value: String,
    },

    /// A piece of the arguments has no space separating its flag name from its value.
    #[error("Malformed argument '{token}': expected a flag name followed by a value.")]
    MalformedToken {
        /// The offending piece, without its leading `-`.
        token: String,
    },
}

impl From<TokenError> for ArgsParseError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Malformed(token) => ArgsParseError::MalformedToken { token },
        }
    }
}

impl Args {
    /// Parse the `raw` arguments against the `schema`.
    ///
    /// The `schema` is a comma separated list of declarations, where the last character selects the type:
    /// * nothing: a boolean, which must be given as `true` or `false`.
    /// * `*`: a string, which must be given in double-quotes.
    ///
    /// Declarations are matched to the arguments by position; the flag names in `raw` are not consulted.
    ///
    /// ### Example
    /// ```
    /// use schema_args::Args;
    ///
    /// let args = Args::new("a,b*", "-a true -b \"Hello\"").unwrap();
    /// assert_eq!(args.get_boolean("a"), Some(true));
    /// assert_eq!(args.get_string("b"), Some("Hello"));
    /// ```
    pub fn new(schema: &str, raw: &str) -> Result<Self, ArgsParseError> {
        let schema = Schema::parse(schema);
        let tokens = tokenize(raw)?;
        convert(&schema, &tokens)
    }

    /// Parse the Cli [`env::args`] against the `schema`.
    ///
    /// The arguments (excluding the program name) are joined with single spaces and then parsed as in [`Args::new`].
    /// If an error is encountered, it is printed and the program exits with error code `1` (via [`std::process::exit`]).
    pub fn parse(schema: &str) -> Self {
        let tokens: Vec<String> = env::args().skip(1).collect();
        let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();

        match Self::parse_tokens(schema, tokens.as_slice()) {
            Ok(args) => args,
            Err(code) => std::process::exit(code),
        }
    }

    /// Parse the input tokens against the `schema`.
    ///
    /// The tokens are joined with single spaces and then parsed as in [`Args::new`].
    /// If an error is encountered, it is printed and `Err(1)` is returned.
    pub fn parse_tokens(schema: &str, tokens: &[&str]) -> Result<Self, i32> {
        Self::new(schema, tokens.join(" ").as_str()).map_err(|error| {
            eprintln!("Parse error: {error}");
            1
        })
    }
}

fn convert(schema: &Schema, tokens: &[ArgumentToken]) -> Result<Args, ArgsParseError> {
    if tokens.len() != schema.len() {
        return Err(ArgsParseError::CountMismatch {
            expected: schema.len(),
            provided: tokens.len(),
        });
    }

    // Nothing is stored on the `Args` until every field has converted.
    let mut booleans = HashMap::default();
    let mut strings = HashMap::default();

    for (declaration, token) in schema.declarations().iter().zip(tokens) {
        match declaration.kind() {
            FieldKind::String => {
                let value = convert_string(declaration, token)?;
                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Field '{declaration}' captured string '{value}' from '-{}'.",
                        token.name()
                    );
                }
                strings.insert(declaration.key(), value);
            }
            FieldKind::Boolean => {
                let value = convert_boolean(declaration, token)?;
                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Field '{declaration}' captured boolean '{value}' from '-{}'.",
                        token.name()
                    );
                }
                booleans.insert(declaration.key(), value);
            }
        }
    }

    Ok(Args::from_parts(booleans, strings))
}

fn convert_string(
    declaration: &FieldDeclaration,
    token: &ArgumentToken,
) -> Result<String, ArgsParseError> {
    let value = token.value();
    let mut segments: Vec<&str> = value.split(QUOTE).collect();

    // Trailing empty segments (ex: after the closing quote) don't count.
    while segments.last().map_or(false, |segment| segment.is_empty()) {
        segments.pop();
    }

    match segments.as_slice() {
        [_, content] => Ok(content.to_string()),
        _ => Err(ArgsParseError::ExpectedOneValue {
            declaration: declaration.to_string(),
            flag: token.name().to_string(),
            value: value.to_string(),
        }),
    }
}

fn convert_boolean(
    declaration: &FieldDeclaration,
    token: &ArgumentToken,
) -> Result<bool, ArgsParseError> {
    let value = token.value();

    if value != TRUE && value != FALSE {
        return Err(ArgsParseError::InvalidBoolean {
            declaration: declaration.to_string(),
            flag: token.name().to_string(),
            value: value.to_string(),
        });
    }

    Ok(value.eq_ignore_ascii_case(TRUE))
}

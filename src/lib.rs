//! `schema_args` is a minimal, schema driven command line argument parser.
//!
//! The arguments a program accepts are described with a short schema string, such as `"a,b*"`.
//! Each comma separated *declaration* names one argument, and its trailing character selects the type:
//!
//! ```console
//! Code   | Type     | Supported
//! ------------------------------
//!        | boolean  | yes
//! *      | string   | yes
//! #      | integer  | no
//! ##     | double   | no
//! [*]    | varargs  | no
//! ```
//!
//! Only booleans and strings are converted.
//! The integer, double and varargs codes are reserved; a declaration using them does not end with `*`, so it is converted as a boolean.
//!
//! # Usage
//! ```
//! use schema_args::Args;
//!
//! let args = Args::new("a,b*", "-a true -b \"Hello\"").unwrap();
//! assert_eq!(args.get_boolean("a"), Some(true));
//! assert_eq!(args.get_string("b"), Some("Hello"));
//! // Absent keys are reported as `None`.
//! assert_eq!(args.get_string("c"), None);
//! ```
//!
//! A program may also parse its own Cli arguments with [`Args::parse`]:
//! ```no_run
#![doc = include_str!("../demos/greeting.rs")]
//! ```
//!
//! ```console
//! $ greeting -verbose true -name '"Ferris"'
//! Hello, Ferris!
//! (verbose mode)
//!
//! $ greeting -verbose yes -name '"Ferris"'
//! Parse error: Expected either 'true' or 'false' for boolean arg
//!
//! $ greeting -verbose true -name Ferris
//! Parse error: Expected 1 value
//! ```
//!
//! Notice the shell strips the double-quotes of string values, so they must be escaped or wrapped in single-quotes.
//!
//! # Cli Semantics
//! `schema_args` parses the raw argument string according to the following rules.
//!
//! * The schema is split on `,`; every piece is trimmed (see below) and empty pieces are dropped.
//! So `" a , b* "` is equivalent to `"a,b*"`.
//! * The arguments are split on `-`; every piece is trimmed and empty pieces are dropped.
//! Each piece is then split on its first space into a flag name and a value.
//! A piece without a space is malformed.
//! * There must be exactly one `(name, value)` piece per declaration.
//! * Declarations are matched to the pieces by *position*.
//! The flag names are not compared against the declarations.
//! * A boolean value must be precisely `true` or `false`.
//! It is stored under the full declaration (ex: `"a"`).
//! * A string value must contain precisely one double-quoted segment (ex: `"Hello world"`).
//! It is stored under the declaration without its `*` (ex: `"b"` for `"b*"`).
//!
//! Parsing is all or nothing: [`Args::new`] either returns every value, or an [`ArgsParseError`].
//!
//! ### Limitations
//! Since `-` always starts a new flag, values cannot contain a hyphen.
//! For example, both `-n -5` and `-s "well-known"` are rejected as malformed, since the pieces `n` and `known"` have no space in them.
//!
//! Trimming only removes spaces and control characters (up to `U+0020`); other Unicode whitespace, such as a non-breaking space, is kept as part of the value.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events while parsing.
#![deny(missing_docs)]
mod model;
mod parser;
mod schema;
mod tokens;

pub use model::Args;
pub use parser::ArgsParseError;
pub use schema::{FieldDeclaration, FieldKind, Schema};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

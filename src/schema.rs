use std::convert::Infallible;
use std::str::FromStr;

use crate::tokens::trim_blank;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

const FIELD_DELIMITER: char = ',';
const STRING_INDICATOR: char = '*';

/// The type a [`FieldDeclaration`] converts its value into.
///
/// Only the boolean and string codes are understood.
/// The documented integer (`#`), double (`##`) and varargs (`[*]`) codes do not end with `*`, so they are treated as booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// No type indicator: the value must be `true` or `false`.
    Boolean,
    /// `*`: the value must be a single double-quoted string.
    String,
}

/// A single, trimmed and non-empty, entry of a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDeclaration(String);

impl FieldDeclaration {
    pub(crate) fn new(declaration: impl Into<String>) -> Self {
        let declaration = declaration.into();
        debug_assert!(!declaration.is_empty());
        Self(declaration)
    }

    /// The declaration exactly as it appeared in the schema (minus surrounding whitespace).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The conversion selected by the last character of the declaration.
    pub fn kind(&self) -> FieldKind {
        if self.0.ends_with(STRING_INDICATOR) {
            FieldKind::String
        } else {
            FieldKind::Boolean
        }
    }

    /// The key the converted value is stored under.
    ///
    /// Boolean fields use the full declaration, while string fields drop every `*` from it.
    pub fn key(&self) -> String {
        match self.kind() {
            FieldKind::Boolean => self.0.clone(),
            FieldKind::String => trim_blank(&self.0.replace(STRING_INDICATOR, "")).to_string(),
        }
    }
}

impl std::fmt::Display for FieldDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ordered field declarations of a comma separated schema, such as `"a,b*"`.
///
/// The order is significant: declarations are matched positionally against the argument tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    declarations: Vec<FieldDeclaration>,
}

impl Schema {
    /// Split the `schema` on `,`, trimming each piece and discarding the empty ones.
    ///
    /// Type indicators are not validated here.
    pub fn parse(schema: &str) -> Self {
        let declarations: Vec<FieldDeclaration> = schema
            .split(FIELD_DELIMITER)
            .map(trim_blank)
            .filter(|piece| !piece.is_empty())
            .map(FieldDeclaration::new)
            .collect();

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Schema '{schema}' declares {} field(s): {declarations:?}.", declarations.len());
        }

        Self { declarations }
    }

    /// The declarations in schema order.
    pub fn declarations(&self) -> &[FieldDeclaration] {
        &self.declarations
    }

    /// The number of declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether the schema declares no fields at all.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl FromStr for Schema {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Schema::parse(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn declarations(schema: &Schema) -> Vec<&str> {
        schema
            .declarations()
            .iter()
            .map(FieldDeclaration::as_str)
            .collect()
    }

    #[rstest]
    #[case("", vec![])]
    #[case("   ", vec![])]
    #[case(",,", vec![])]
    #[case(" , ,", vec![])]
    #[case("a", vec!["a"])]
    #[case("a,b*", vec!["a", "b*"])]
    #[case(" a , b* ", vec!["a", "b*"])]
    #[case("a,,b#", vec!["a", "b#"])]
    #[case("a,b#,c*", vec!["a", "b#", "c*"])]
    #[case("x,x", vec!["x", "x"])]
    #[case("a\u{0},\tb*", vec!["a", "b*"])]
    #[case("a\u{a0}", vec!["a\u{a0}"])]
    fn parse(#[case] schema: &str, #[case] expected: Vec<&str>) {
        let schema = Schema::parse(schema);
        assert_eq!(declarations(&schema), expected);
        assert_eq!(schema.len(), expected.len());
        assert_eq!(schema.is_empty(), expected.is_empty());
    }

    #[test]
    fn from_str() {
        let schema: Schema = " a , b* ".parse().unwrap();
        assert_eq!(schema, Schema::parse("a,b*"));
    }

    #[rstest]
    #[case("a", FieldKind::Boolean, "a")]
    #[case("verbose", FieldKind::Boolean, "verbose")]
    #[case("b*", FieldKind::String, "b")]
    #[case("b **", FieldKind::String, "b")]
    #[case("*", FieldKind::String, "")]
    #[case("b#", FieldKind::Boolean, "b#")]
    #[case("b##", FieldKind::Boolean, "b##")]
    #[case("b[*]", FieldKind::Boolean, "b[*]")]
    #[case("b\u{1} *", FieldKind::String, "b")]
    fn declaration_kind(#[case] raw: &str, #[case] kind: FieldKind, #[case] key: &str) {
        let declaration = FieldDeclaration::new(raw);
        assert_eq!(declaration.kind(), kind);
        assert_eq!(declaration.key(), key);
    }

    #[test]
    fn declaration_display() {
        let schema = Schema::parse("a, b*");
        assert_eq!(schema.declarations()[1].to_string(), "b*");
    }
}

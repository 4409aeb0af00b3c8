use std::collections::HashMap;

/// The typed values of a successful parse.
///
/// Built via [`Args::new`] (or [`Args::parse`]); there is no way to mutate it afterwards.
/// Booleans and strings are kept in separate mappings, so a lookup of the wrong type simply finds nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    booleans: HashMap<String, bool>,
    strings: HashMap<String, String>,
}

impl Args {
    pub(crate) fn from_parts(
        booleans: HashMap<String, bool>,
        strings: HashMap<String, String>,
    ) -> Self {
        Self { booleans, strings }
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build an [`Args`] directly from its values, skipping the schema and argument parsing.
    ///
    /// ### Example
    /// ```
    /// use schema_args::Args;
    ///
    /// let args = Args::test_dummy([("verbose", true)], [("name", "Ferris")]);
    /// assert_eq!(args.get_boolean("verbose"), Some(true));
    /// assert_eq!(args.get_string("name"), Some("Ferris"));
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn test_dummy<'k>(
        booleans: impl IntoIterator<Item = (&'k str, bool)>,
        strings: impl IntoIterator<Item = (&'k str, &'k str)>,
    ) -> Self {
        Self::from_parts(
            booleans
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
            strings
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }

    /// Get the boolean stored under `key`, or `None` if no boolean field has that key.
    ///
    /// Boolean fields are keyed by their full declaration (ex: `"a"` for schema `"a,b*"`).
    pub fn get_boolean(&self, key: &str) -> Option<bool> {
        self.booleans.get(key).copied()
    }

    /// Get the string stored under `key`, or `None` if no string field has that key.
    ///
    /// String fields are keyed by their declaration without the `*` (ex: `"b"` for schema `"a,b*"`).
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Whether any field, of either type, is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.booleans.contains_key(key) || self.strings.contains_key(key)
    }

    /// The number of stored values.
    pub fn len(&self) -> usize {
        self.booleans.len() + self.strings.len()
    }

    /// Whether no values are stored (only possible with an empty schema).
    pub fn is_empty(&self) -> bool {
        self.booleans.is_empty() && self.strings.is_empty()
    }

    /// Iterate the boolean values, in no particular order.
    pub fn booleans(&self) -> impl Iterator<Item = (&str, bool)> {
        self.booleans
            .iter()
            .map(|(key, value)| (key.as_str(), *value))
    }

    /// Iterate the string values, in no particular order.
    pub fn strings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.strings
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

use schema_args::{Args, ArgsParseError, FieldKind, Schema};

#[test]
fn boolean_and_string() {
    let args = Args::new("a,b*", "-a true -b \"Hello\"").unwrap();
    assert_eq!(args.get_boolean("a"), Some(true));
    assert_eq!(args.get_string("b"), Some("Hello"));
}

#[test]
fn boolean_false() {
    let args = Args::new("a", "-a false").unwrap();
    assert_eq!(args.get_boolean("a"), Some(false));
}

#[test]
fn count_mismatch() {
    let result = Args::new("a,b", "-a true");
    assert_eq!(
        result.unwrap_err(),
        ArgsParseError::CountMismatch {
            expected: 2,
            provided: 1,
        }
    );
}

#[test]
fn boolean_format() {
    let error = Args::new("a", "-a yes").unwrap_err();
    assert!(matches!(error, ArgsParseError::InvalidBoolean { .. }));
    assert_eq!(
        error.to_string(),
        "Expected either 'true' or 'false' for boolean arg"
    );
}

#[test]
fn string_without_quotes() {
    let error = Args::new("b*", "-b Hello").unwrap_err();
    assert!(matches!(error, ArgsParseError::ExpectedOneValue { .. }));
    assert_eq!(error.to_string(), "Expected 1 value");
}

#[test]
fn malformed_token() {
    let error = Args::new("a,b", "-a true -b").unwrap_err();
    assert_eq!(
        error,
        ArgsParseError::MalformedToken {
            token: "b".to_string()
        }
    );
}

#[test]
fn idempotent() {
    let schema = "a,b*,c";
    let raw = "-a true -b \"Hello world\" -c false";
    let first = Args::new(schema, raw).unwrap();
    let second = Args::new(schema, raw).unwrap();

    for key in ["a", "c"] {
        assert_eq!(first.get_boolean(key), second.get_boolean(key));
    }

    assert_eq!(first.get_string("b"), second.get_string("b"));
    assert_eq!(first, second);
}

#[test]
fn schema_whitespace() {
    let raw = "-a true -b \"Hello\"";
    let spaced = Args::new(" a , b* ", raw).unwrap();
    let compact = Args::new("a,b*", raw).unwrap();
    assert_eq!(spaced, compact);
    assert_eq!(Schema::parse(" a , b* "), Schema::parse("a,b*"));
}

#[test]
fn schema_introspection() {
    let schema = Schema::parse("a,b#,c*");
    let summary: Vec<(&str, FieldKind, String)> = schema
        .declarations()
        .iter()
        .map(|d| (d.as_str(), d.kind(), d.key()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("a", FieldKind::Boolean, "a".to_string()),
            ("b#", FieldKind::Boolean, "b#".to_string()),
            ("c*", FieldKind::String, "c".to_string()),
        ]
    );
}

#[test]
fn failed_parse_yields_nothing() {
    // The first field is valid, but the failure of the second discards it.
    let result = Args::new("a,b*", "-a true -b Hello");
    assert!(result.is_err());
}

#[cfg(feature = "unit_test")]
#[test]
fn test_dummy() {
    let args = Args::test_dummy([("a", true)], [("b", "Hello")]);
    assert_eq!(args, Args::new("a,b*", "-a true -b \"Hello\"").unwrap());
}

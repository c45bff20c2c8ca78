//! Shape validation for suite configuration documents.
//!
//! Validation is eager: the first violation found is returned and nothing is
//! accumulated. Field presence and type checks run before the empty-list
//! check.

use crate::core::{CheckLevel, RequiredParameters};
use crate::prelude::*;
use crate::value::{Parameters, Value, ValueType};
use std::collections::{BTreeMap, HashSet};

/// Where top-level fields live, as reported in errors.
pub const CONFIG_LOCATION: &str = "configuration";

/// Top-level fields every configuration must have.
pub const REQUIRED_GLOBAL: [(&str, ValueType); 2] =
    [("checks", ValueType::List), ("suite_name", ValueType::Text)];

/// Fields every check entry must have.
pub const REQUIRED_PER_CHECK: [(&str, ValueType); 3] = [
    ("check_id", ValueType::Text),
    ("parameters", ValueType::Map),
    ("check_name", ValueType::Text),
];

/// Fields a check entry may have.
pub const OPTIONAL_PER_CHECK: [(&str, ValueType); 1] = [("check_level", ValueType::Text)];

/// Validates that a parsed document can be turned into a check suite.
///
/// The document may be any value; anything other than a mapping is a
/// [`SuiteError::WrongType`]. The input is never modified.
///
/// # Errors
///
/// - [`SuiteError::MissingField`] if a required key is absent
/// - [`SuiteError::WrongType`] if a key holds the wrong type
/// - [`SuiteError::InvalidEnumValue`] if `check_level` is not HIGH, MEDIUM or LOW
/// - [`SuiteError::DuplicateCheckId`] if two entries share a `check_id`
/// - [`SuiteError::EmptyCheckList`] if `checks` is empty
///
/// # Examples
///
/// ```rust
/// use term_yaml::config::{parse_document, validate};
///
/// let doc = parse_document(
///     "suite_name: hello\nchecks:\n  - {check_id: one, check_name: a.B, parameters: {}}\n",
/// ).unwrap();
/// assert!(validate(&doc).is_ok());
///
/// let doc = parse_document("suite_name: hello\nchecks: []\n").unwrap();
/// assert!(validate(&doc).is_err());
/// ```
pub fn validate(config: &Value) -> Result<()> {
    let root = expect_map(config, "document", CONFIG_LOCATION)?;

    for (field, expected) in REQUIRED_GLOBAL {
        validate_field(field, expected, root, true, CONFIG_LOCATION)?;
    }

    let checks = root
        .get("checks")
        .and_then(Value::as_list)
        .unwrap_or_default();

    let mut seen_ids = HashSet::new();
    for (index, entry) in checks.iter().enumerate() {
        let location = format!("checks[{index}]");
        let entry = expect_map(entry, &location, CONFIG_LOCATION)?;

        for (field, expected) in REQUIRED_PER_CHECK {
            validate_field(field, expected, entry, true, &location)?;
        }
        for (field, expected) in OPTIONAL_PER_CHECK {
            validate_field(field, expected, entry, false, &location)?;
        }

        if let Some(level) = entry.get("check_level").and_then(Value::as_str) {
            if level.parse::<CheckLevel>().is_err() {
                return Err(SuiteError::InvalidEnumValue {
                    field: "check_level".to_string(),
                    location,
                    value: level.to_string(),
                    allowed: CheckLevel::allowed_values(),
                });
            }
        }

        if let Some(check_id) = entry.get("check_id").and_then(Value::as_str) {
            if !seen_ids.insert(check_id) {
                return Err(SuiteError::DuplicateCheckId {
                    check_id: check_id.to_string(),
                });
            }
        }
    }

    if checks.is_empty() {
        return Err(SuiteError::EmptyCheckList);
    }

    Ok(())
}

/// Checks that a mapping holds a key of the expected type.
///
/// A missing key is an error only when `required` is set. A present key of
/// the wrong type is always an error, including an explicit `null`.
pub fn validate_field(
    key: &str,
    expected: ValueType,
    mapping: &BTreeMap<String, Value>,
    required: bool,
    location: &str,
) -> Result<()> {
    match mapping.get(key) {
        None if required => Err(SuiteError::missing_field(key, location)),
        None => Ok(()),
        Some(value) if value.is_type(expected) => Ok(()),
        Some(value) => Err(SuiteError::wrong_type(
            key,
            location,
            expected.as_str(),
            value.type_name(),
        )),
    }
}

/// Checks merged parameters against an implementation's requirements.
///
/// Applies the same presence and type rules as [`validate_field`] to every
/// required parameter, in name order.
pub fn validate_parameters(
    required: &RequiredParameters,
    parameters: &Parameters,
    location: &str,
) -> Result<()> {
    for (name, expected) in required {
        validate_field(name, *expected, parameters, true, location)?;
    }
    Ok(())
}

fn expect_map<'a>(
    value: &'a Value,
    field: &str,
    location: &str,
) -> Result<&'a BTreeMap<String, Value>> {
    value.as_map().ok_or_else(|| {
        SuiteError::wrong_type(field, location, ValueType::Map.as_str(), value.type_name())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_document;

    fn doc(text: &str) -> Value {
        parse_document(text).unwrap()
    }

    const VALID: &str = r#"
suite_name: hello
checks:
  - check_id: one
    parameters: {}
    check_name: blah.Check
"#;

    #[test]
    fn test_valid_config() {
        assert!(validate(&doc(VALID)).is_ok());
    }

    #[test]
    fn test_missing_keys() {
        let invalid = [
            "{}",
            "suite_name: hello",
            "checks: []",
            "suite_name: hello\nchecks:\n  - check_id: one\n",
        ];
        for text in invalid {
            let err = validate(&doc(text)).unwrap_err();
            assert_eq!(err.category(), ErrorCategory::Value, "config: {text}");
        }
    }

    #[test]
    fn test_missing_checks_reported_before_suite_name() {
        let err = validate(&doc("{}")).unwrap_err();
        assert!(matches!(err, SuiteError::MissingField { ref field, .. } if field == "checks"));
    }

    #[test]
    fn test_invalid_types() {
        let cases = [
            ("suite_name", VALID.replace("suite_name: hello", "suite_name: [this, is, not, a, string]")),
            ("checks", VALID.replace("checks:\n  - check_id: one\n    parameters: {}\n    check_name: blah.Check\n", "checks: oops\n")),
            ("check_id", VALID.replace("check_id: one", "check_id: {}")),
            ("parameters", VALID.replace("parameters: {}", "parameters: 0")),
        ];
        for (field, text) in cases {
            let err = validate(&doc(&text)).unwrap_err();
            match err {
                SuiteError::WrongType { field: ref f, .. } => assert_eq!(f, field),
                other => panic!("expected WrongType for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_non_mapping_document() {
        let err = validate(&doc("- just\n- a list\n")).unwrap_err();
        assert!(matches!(err, SuiteError::WrongType { .. }));

        let err = validate(&Value::Null).unwrap_err();
        assert!(matches!(err, SuiteError::WrongType { ref found, .. } if found == "null"));
    }

    #[test]
    fn test_non_mapping_entry() {
        let err = validate(&doc("suite_name: s\nchecks: [just_text]\n")).unwrap_err();
        assert!(matches!(err, SuiteError::WrongType { ref field, .. } if field == "checks[0]"));
    }

    #[test]
    fn test_no_checks() {
        let err = validate(&doc("suite_name: test\nchecks: []\n")).unwrap_err();
        assert!(matches!(err, SuiteError::EmptyCheckList));
    }

    #[test]
    fn test_check_level() {
        let high = VALID.replace("check_name: blah.Check", "check_name: blah.Check\n    check_level: HIGH");
        assert!(validate(&doc(&high)).is_ok());

        let bogus = VALID.replace("check_name: blah.Check", "check_name: blah.Check\n    check_level: SEVERE");
        let err = validate(&doc(&bogus)).unwrap_err();
        assert!(matches!(err, SuiteError::InvalidEnumValue { ref value, .. } if value == "SEVERE"));
        assert_eq!(err.category(), ErrorCategory::Value);

        let numeric = VALID.replace("check_name: blah.Check", "check_name: blah.Check\n    check_level: 3");
        let err = validate(&doc(&numeric)).unwrap_err();
        assert!(matches!(err, SuiteError::WrongType { ref field, .. } if field == "check_level"));
    }

    #[test]
    fn test_duplicate_check_ids() {
        let text = r#"
suite_name: dupes
checks:
  - {check_id: one, parameters: {}, check_name: a.B}
  - {check_id: one, parameters: {}, check_name: a.C}
"#;
        let err = validate(&doc(text)).unwrap_err();
        assert!(matches!(err, SuiteError::DuplicateCheckId { ref check_id } if check_id == "one"));
    }

    #[test]
    fn test_explicit_null_is_wrong_type() {
        let text = VALID.replace("parameters: {}", "parameters: ~");
        let err = validate(&doc(&text)).unwrap_err();
        assert!(matches!(err, SuiteError::WrongType { ref found, .. } if found == "null"));
    }

    #[test]
    fn test_validate_parameters() {
        let required = RequiredParameters::from([
            ("one".to_string(), ValueType::Text),
            ("four".to_string(), ValueType::Integer),
        ]);
        let mut params = Parameters::from([("one".to_string(), Value::from("x"))]);

        let err = validate_parameters(&required, &params, "parameters").unwrap_err();
        assert!(matches!(err, SuiteError::MissingField { ref field, .. } if field == "four"));

        params.insert("four".to_string(), Value::from("14"));
        let err = validate_parameters(&required, &params, "parameters").unwrap_err();
        assert!(matches!(err, SuiteError::WrongType { ref field, .. } if field == "four"));

        params.insert("four".to_string(), Value::from(14));
        assert!(validate_parameters(&required, &params, "parameters").is_ok());
    }
}

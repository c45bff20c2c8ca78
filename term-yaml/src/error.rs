//! Error types for building check suites from YAML configuration.
//!
//! All failures are represented by the [`SuiteError`] enum. Validation is
//! fail-fast, so an error always names the single field, check or parameter
//! that stopped the assembly.

use thiserror::Error;

/// Broad classification of a [`SuiteError`].
///
/// Configuration problems split into "the value is wrong" and "the value has
/// the wrong type". Hosts that only care about that distinction can match on
/// the category instead of every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A value is missing, empty, duplicated or outside its allowed set
    Value,
    /// A value has the wrong type or the document could not be parsed
    Type,
    /// A referenced check implementation or suite method does not exist
    Resolution,
    /// The configuration source could not be read
    Io,
}

/// The main error type for suite assembly.
#[derive(Error, Debug)]
pub enum SuiteError {
    /// A required key is absent from the config, a check entry or a parameter mapping.
    #[error("Required key '{field}' not present in {location}")]
    MissingField {
        /// Name of the missing key
        field: String,
        /// Where the key was expected (e.g. "configuration", "checks[1]")
        location: String,
    },

    /// A present value has the wrong type.
    #[error("Value for field '{field}' in {location} is not of type '{expected}' (found '{found}')")]
    WrongType {
        /// Name of the offending key
        field: String,
        /// Where the key was found
        location: String,
        /// Expected type name
        expected: String,
        /// Actual type name
        found: String,
    },

    /// A value is not part of a fixed enumeration.
    #[error("Value '{value}' for field '{field}' in {location} must be one of {allowed}")]
    InvalidEnumValue {
        field: String,
        location: String,
        value: String,
        /// Comma separated list of allowed values
        allowed: String,
    },

    /// A value has the right type but is not acceptable.
    #[error("Invalid value for field '{field}' in {location}: {message}")]
    InvalidValue {
        field: String,
        location: String,
        message: String,
    },

    /// The `checks` list is present but empty.
    #[error("List of checks cannot be empty")]
    EmptyCheckList,

    /// Two check entries share the same `check_id`.
    #[error("Duplicate check_id '{check_id}': every check must have a unique id")]
    DuplicateCheckId { check_id: String },

    /// A referenced check implementation cannot be located.
    #[error("Could not resolve check '{name}': {message}")]
    Resolution {
        /// The textual reference from the configuration
        name: String,
        message: String,
    },

    /// Entry parameters do not satisfy the implementation's contract.
    #[error("Invalid parameters for check '{check_id}': {source}")]
    Parameter {
        /// The `check_id` of the offending entry
        check_id: String,
        /// The underlying field error
        #[source]
        source: Box<SuiteError>,
    },

    /// A suite method was invoked that the suite does not define.
    #[error("Suite '{suite}' has no method '{method}'")]
    UnknownMethod { suite: String, method: String },

    /// The configuration source is not valid YAML or holds unsupported data.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error reading the configuration source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for `Result<T, SuiteError>`.
pub type Result<T> = std::result::Result<T, SuiteError>;

impl SuiteError {
    /// Creates a missing-field error.
    pub fn missing_field(field: impl Into<String>, location: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            location: location.into(),
        }
    }

    /// Creates a wrong-type error.
    pub fn wrong_type(
        field: impl Into<String>,
        location: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::WrongType {
            field: field.into(),
            location: location.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates an invalid-value error.
    pub fn invalid_value(
        field: impl Into<String>,
        location: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            location: location.into(),
            message: message.into(),
        }
    }

    /// Creates a resolution error.
    pub fn resolution(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Resolution {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Wraps an error as a parameter error for the given check.
    pub fn parameter(check_id: impl Into<String>, source: SuiteError) -> Self {
        Self::Parameter {
            check_id: check_id.into(),
            source: Box::new(source),
        }
    }

    /// Returns the broad category of this error.
    ///
    /// A [`SuiteError::Parameter`] takes the category of the error it wraps.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingField { .. }
            | Self::InvalidEnumValue { .. }
            | Self::InvalidValue { .. }
            | Self::EmptyCheckList
            | Self::DuplicateCheckId { .. } => ErrorCategory::Value,
            Self::WrongType { .. } | Self::Parse(_) => ErrorCategory::Type,
            Self::Resolution { .. } | Self::UnknownMethod { .. } => ErrorCategory::Resolution,
            Self::Parameter { source, .. } => source.category(),
            Self::Io(_) => ErrorCategory::Io,
        }
    }
}

impl From<serde_yaml::Error> for SuiteError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_missing_field_message() {
        let err = SuiteError::missing_field("suite_name", "configuration");
        assert_eq!(
            err.to_string(),
            "Required key 'suite_name' not present in configuration"
        );
        assert_eq!(err.category(), ErrorCategory::Value);
    }

    #[test]
    fn test_wrong_type_message() {
        let err = SuiteError::wrong_type("checks", "configuration", "list", "text");
        assert_eq!(
            err.to_string(),
            "Value for field 'checks' in configuration is not of type 'list' (found 'text')"
        );
        assert_eq!(err.category(), ErrorCategory::Type);
    }

    #[test]
    fn test_parameter_error_keeps_source() {
        let err = SuiteError::parameter(
            "one",
            SuiteError::missing_field("three", "parameters of check 'one'"),
        );
        assert!(err.source().is_some());
        assert_eq!(err.category(), ErrorCategory::Value);
        assert!(err.to_string().starts_with("Invalid parameters for check 'one'"));

        let err = SuiteError::parameter(
            "one",
            SuiteError::wrong_type("one", "parameters of check 'one'", "text", "list"),
        );
        assert_eq!(err.category(), ErrorCategory::Type);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.yml");
        let err: SuiteError = io.into();
        assert_eq!(err.category(), ErrorCategory::Io);
    }
}

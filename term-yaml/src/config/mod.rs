//! Suite configuration documents.
//!
//! A configuration document names a suite and lists its checks:
//!
//! ```yaml
//! suite_name: file_checks
//! checks:
//!   - check_id: size
//!     check_name: term_yaml.checks.FileSizeCheck
//!     check_level: HIGH
//!     parameters:
//!       threshold: 2
//!   - check_id: naming
//!     check_name: term_yaml.checks.FilenamePatternCheck
//!     parameters:
//!       pattern: '^[a-z_]+\.nc$'
//! ```
//!
//! Documents are parsed into an untyped [`Value`], checked with [`validate`]
//! and then read into a typed [`SuiteConfig`].

mod validator;

pub use validator::{
    validate, validate_field, validate_parameters, CONFIG_LOCATION, OPTIONAL_PER_CHECK,
    REQUIRED_GLOBAL, REQUIRED_PER_CHECK,
};

use crate::core::CheckLevel;
use crate::prelude::*;
use crate::value::{Parameters, Value};
use std::path::Path;
use tracing::debug;

/// A validated suite configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteConfig {
    /// Name of the generated suite
    pub suite_name: String,
    /// Check entries in declaration order
    pub checks: Vec<CheckEntry>,
}

/// A single check entry of a [`SuiteConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct CheckEntry {
    /// Identifier used to derive the method name `check_<check_id>`
    pub check_id: String,
    /// Reference to the implementation, `<container>.<member>`
    pub check_name: String,
    /// Parameters supplied by the configuration author
    pub parameters: Parameters,
    pub check_level: Option<CheckLevel>,
}

impl SuiteConfig {
    /// Validates a parsed document and reads it into a typed configuration.
    pub fn from_value(document: &Value) -> Result<Self> {
        validate(document)?;

        let suite_name = document
            .get("suite_name")
            .and_then(Value::as_str)
            .ok_or_else(|| SuiteError::missing_field("suite_name", CONFIG_LOCATION))?
            .to_string();

        let checks = document
            .get("checks")
            .and_then(Value::as_list)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(index, entry)| CheckEntry::from_value(entry, &format!("checks[{index}]")))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { suite_name, checks })
    }

    /// Parses, validates and reads a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Self::from_value(&parse_document(text)?)
    }

    /// Reads, parses, validates and reads a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_value(&load_document(path)?)
    }
}

impl CheckEntry {
    fn from_value(entry: &Value, location: &str) -> Result<Self> {
        let text = |field: &str| -> Result<String> {
            entry
                .get(field)
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| SuiteError::missing_field(field, location))
        };

        let parameters = entry
            .get("parameters")
            .and_then(Value::as_map)
            .cloned()
            .ok_or_else(|| SuiteError::missing_field("parameters", location))?;

        let check_level = match entry.get("check_level").and_then(Value::as_str) {
            Some(level) => Some(level.parse::<CheckLevel>().map_err(|e| {
                SuiteError::InvalidEnumValue {
                    field: "check_level".to_string(),
                    location: location.to_string(),
                    value: e.0,
                    allowed: CheckLevel::allowed_values(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            check_id: text("check_id")?,
            check_name: text("check_name")?,
            parameters,
            check_level,
        })
    }

    /// The method name this entry is bound to in the generated suite.
    pub fn method_name(&self) -> String {
        crate::core::check_method_name(&self.check_id)
    }
}

/// Parses YAML text into an untyped document.
///
/// Merge keys (`<<: *anchor`) are expanded before conversion; keys written
/// next to the merge take precedence over the merged ones.
pub fn parse_document(text: &str) -> Result<Value> {
    let mut yaml: serde_yaml::Value = serde_yaml::from_str(text)?;
    yaml.apply_merge()?;
    Value::from_yaml(yaml)
}

/// Reads and parses a YAML file into an untyped document.
///
/// A document that is not a mapping is rejected here with
/// [`SuiteError::WrongType`], before any validation runs.
pub fn load_document(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    debug!(config.path = %path.display(), "Loading suite configuration");

    let text = std::fs::read_to_string(path)?;
    let document = parse_document(&text)?;
    if document.as_map().is_none() {
        return Err(SuiteError::wrong_type(
            "document",
            path.display().to_string(),
            "map",
            document.type_name(),
        ));
    }
    Ok(document)
}

//! File naming convention check.

use super::as_file;
use crate::core::{
    Check, CheckImplementation, CheckLevel, CheckResult, Dataset, DatasetType, FileDataset,
    RequiredParameters,
};
use crate::prelude::*;
use crate::value::{Parameters, Value, ValueType};
use regex::Regex;

/// Checks that a file name matches a regular expression.
///
/// Only the final path component is matched. The pattern is compiled once,
/// when the check is instantiated.
///
/// | parameter | type | default |
/// |---|---|---|
/// | `pattern` | text | required |
#[derive(Debug, Clone, Copy, Default)]
pub struct FilenamePatternCheck;

impl CheckImplementation for FilenamePatternCheck {
    fn required_parameters(&self) -> Option<RequiredParameters> {
        Some(RequiredParameters::from([(
            "pattern".to_string(),
            ValueType::Text,
        )]))
    }

    fn supported_ds(&self) -> Vec<DatasetType> {
        vec![DatasetType::new(FileDataset::TYPE)]
    }

    fn instantiate(
        &self,
        parameters: Parameters,
        level: Option<CheckLevel>,
    ) -> Result<Box<dyn Check>> {
        let pattern = parameters
            .get("pattern")
            .and_then(Value::as_str)
            .ok_or_else(|| SuiteError::missing_field("pattern", "parameters"))?;
        let pattern = Regex::new(pattern)
            .map_err(|e| SuiteError::invalid_value("pattern", "parameters", e.to_string()))?;
        Ok(Box::new(FilenameMatcher {
            parameters,
            level,
            pattern,
        }))
    }
}

/// A configured [`FilenamePatternCheck`].
#[derive(Debug, Clone)]
pub struct FilenameMatcher {
    parameters: Parameters,
    level: Option<CheckLevel>,
    pattern: Regex,
}

impl Check for FilenameMatcher {
    fn do_check(&self, dataset: &dyn Dataset) -> Result<CheckResult> {
        let file = match as_file(dataset) {
            Ok(file) => file,
            Err(skipped) => return Ok(skipped.with_level(self.level)),
        };

        let name = file
            .path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let result = if self.pattern.is_match(&name) {
            CheckResult::pass()
        } else {
            CheckResult::fail(format!(
                "File name '{name}' does not match '{}'",
                self.pattern.as_str()
            ))
        };
        Ok(result.with_level(self.level))
    }

    fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    fn level(&self) -> Option<CheckLevel> {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CheckStatus;

    fn matcher(pattern: &str) -> Result<Box<dyn Check>> {
        FilenamePatternCheck.instantiate(
            Parameters::from([("pattern".to_string(), Value::from(pattern))]),
            Some(CheckLevel::Low),
        )
    }

    #[test]
    fn test_matching_name_passes() {
        let check = matcher(r"^[a-z_]+\.nc$").unwrap();
        let result = check
            .do_check(&FileDataset::new("/data/sea_surface.nc"))
            .unwrap();
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.level, Some(CheckLevel::Low));
    }

    #[test]
    fn test_directory_is_not_matched() {
        let check = matcher(r"^data").unwrap();
        let result = check
            .do_check(&FileDataset::new("/data/output.nc"))
            .unwrap();
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.message.unwrap().contains("output.nc"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = matcher("([unclosed").unwrap_err();
        assert!(matches!(err, SuiteError::InvalidValue { ref field, .. } if field == "pattern"));
    }
}

//! File size limit check.

use super::as_file;
use crate::core::{
    Check, CheckImplementation, CheckLevel, CheckResult, Dataset, DatasetType, FileDataset,
    RequiredParameters,
};
use crate::prelude::*;
use crate::value::{Parameters, Value, ValueType};

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Checks that a file is no larger than `threshold` GiB.
///
/// | parameter | type | default |
/// |---|---|---|
/// | `threshold` | integer | `1` |
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSizeCheck;

impl CheckImplementation for FileSizeCheck {
    fn defaults(&self) -> Parameters {
        Parameters::from([("threshold".to_string(), Value::Integer(1))])
    }

    fn required_parameters(&self) -> Option<RequiredParameters> {
        Some(RequiredParameters::from([(
            "threshold".to_string(),
            ValueType::Integer,
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
        let threshold_gib = parameters
            .get("threshold")
            .and_then(Value::as_i64)
            .ok_or_else(|| SuiteError::missing_field("threshold", "parameters"))?;
        if threshold_gib < 0 {
            return Err(SuiteError::invalid_value(
                "threshold",
                "parameters",
                format!("must not be negative, got {threshold_gib}"),
            ));
        }
        Ok(Box::new(FileSizeLimit {
            parameters,
            level,
            threshold_gib,
        }))
    }
}

/// A configured [`FileSizeCheck`].
#[derive(Debug, Clone)]
pub struct FileSizeLimit {
    parameters: Parameters,
    level: Option<CheckLevel>,
    threshold_gib: i64,
}

impl Check for FileSizeLimit {
    fn do_check(&self, dataset: &dyn Dataset) -> Result<CheckResult> {
        let file = match as_file(dataset) {
            Ok(file) => file,
            Err(skipped) => return Ok(skipped.with_level(self.level)),
        };

        let size_gib = std::fs::metadata(file.path())?.len() as f64 / BYTES_PER_GIB;
        let result = if size_gib <= self.threshold_gib as f64 {
            CheckResult::pass().with_message(format!(
                "File is {size_gib:.3} GiB (limit {} GiB)",
                self.threshold_gib
            ))
        } else {
            CheckResult::fail(format!(
                "File is {size_gib:.3} GiB, above the limit of {} GiB",
                self.threshold_gib
            ))
        };
        Ok(result.with_level(self.level).with_metric(size_gib))
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
    use crate::core::{CheckStatus, DatasetType};
    use std::any::Any;
    use std::io::Write;

    #[derive(Debug)]
    struct Grid;

    impl Dataset for Grid {
        fn dataset_type(&self) -> DatasetType {
            DatasetType::new("grid")
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn limit(threshold: i64) -> Box<dyn Check> {
        FileSizeCheck
            .instantiate(
                Parameters::from([("threshold".to_string(), Value::Integer(threshold))]),
                Some(CheckLevel::High),
            )
            .unwrap()
    }

    #[test]
    fn test_small_file_passes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"tiny").unwrap();

        let result = limit(1).do_check(&FileDataset::new(file.path())).unwrap();
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.level, Some(CheckLevel::High));
        assert!(result.metric.unwrap() < 0.001);
    }

    #[test]
    fn test_zero_threshold_fails_non_empty_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not empty").unwrap();

        let result = limit(0).do_check(&FileDataset::new(file.path())).unwrap();
        assert_eq!(result.status, CheckStatus::Fail);
    }

    #[test]
    fn test_other_datasets_are_skipped() {
        let result = limit(1).do_check(&Grid).unwrap();
        assert_eq!(result.status, CheckStatus::Skipped);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = limit(1)
            .do_check(&FileDataset::new("/no/such/file.nc"))
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Io);
    }

    #[test]
    fn test_negative_threshold_is_rejected() {
        let err = FileSizeCheck
            .instantiate(
                Parameters::from([("threshold".to_string(), Value::Integer(-1))]),
                None,
            )
            .unwrap_err();
        assert!(matches!(err, SuiteError::InvalidValue { .. }));
    }
}

//! The check implementation contract and check results.

use super::{CheckLevel, Dataset, DatasetType};
use crate::prelude::*;
use crate::value::{Parameters, ValueType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Parameter names an implementation requires, with the type each must have.
pub type RequiredParameters = BTreeMap<String, ValueType>;

/// The status of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The check passed
    Pass,
    /// The check failed
    Fail,
    /// The check did not apply to the dataset
    Skipped,
}

/// The result of running a check against a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub status: CheckStatus,
    /// Severity of the check that produced this result
    pub level: Option<CheckLevel>,
    /// Optional message providing additional context
    pub message: Option<String>,
    /// Optional metric value computed by the check
    pub metric: Option<f64>,
}

impl CheckResult {
    /// Creates a passing result.
    pub fn pass() -> Self {
        Self {
            status: CheckStatus::Pass,
            level: None,
            message: None,
            metric: None,
        }
    }

    /// Creates a failing result.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Fail,
            level: None,
            message: Some(message.into()),
            metric: None,
        }
    }

    /// Creates a skipped result.
    pub fn skipped(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Skipped,
            level: None,
            message: Some(message.into()),
            metric: None,
        }
    }

    pub fn with_level(mut self, level: Option<CheckLevel>) -> Self {
        self.level = level;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_metric(mut self, metric: f64) -> Self {
        self.metric = Some(metric);
        self
    }

    pub fn is_pass(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}

/// A configured check, ready to run against datasets.
///
/// Instances are produced by [`CheckImplementation::instantiate`] with their
/// parameters already merged and validated.
pub trait Check: Debug + Send + Sync {
    /// Runs the check against a dataset.
    fn do_check(&self, dataset: &dyn Dataset) -> Result<CheckResult>;

    /// The merged parameters this check was created with.
    fn parameters(&self) -> &Parameters;

    /// The severity level from the configuration, if any.
    fn level(&self) -> Option<CheckLevel>;
}

/// A reusable unit of validation logic that configuration refers to by name.
///
/// # Examples
///
/// ```rust
/// use term_yaml::core::{Check, CheckImplementation, CheckLevel, CheckResult, Dataset, DatasetType};
/// use term_yaml::prelude::*;
/// use term_yaml::value::{Parameters, Value};
///
/// #[derive(Debug)]
/// struct AlwaysPass {
///     parameters: Parameters,
///     level: Option<CheckLevel>,
/// }
///
/// impl Check for AlwaysPass {
///     fn do_check(&self, _dataset: &dyn Dataset) -> Result<CheckResult> {
///         Ok(CheckResult::pass().with_level(self.level))
///     }
///     fn parameters(&self) -> &Parameters {
///         &self.parameters
///     }
///     fn level(&self) -> Option<CheckLevel> {
///         self.level
///     }
/// }
///
/// struct AlwaysPassImpl;
///
/// impl CheckImplementation for AlwaysPassImpl {
///     fn defaults(&self) -> Parameters {
///         Parameters::from([("verbose".to_string(), Value::Bool(false))])
///     }
///     fn supported_ds(&self) -> Vec<DatasetType> {
///         vec![DatasetType::new("file")]
///     }
///     fn instantiate(&self, parameters: Parameters, level: Option<CheckLevel>) -> Result<Box<dyn Check>> {
///         Ok(Box::new(AlwaysPass { parameters, level }))
///     }
/// }
/// ```
pub trait CheckImplementation: Send + Sync {
    /// Default parameter values, overridden by configuration.
    fn defaults(&self) -> Parameters {
        Parameters::new()
    }

    /// Parameters that must be present after merging, with their types.
    ///
    /// `None` means the implementation has no requirements.
    fn required_parameters(&self) -> Option<RequiredParameters> {
        None
    }

    /// Dataset types this check can operate on.
    fn supported_ds(&self) -> Vec<DatasetType>;

    /// Creates a check from merged parameters and an optional severity level.
    fn instantiate(
        &self,
        parameters: Parameters,
        level: Option<CheckLevel>,
    ) -> Result<Box<dyn Check>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_builders() {
        let result = CheckResult::pass()
            .with_level(Some(CheckLevel::High))
            .with_metric(0.5);
        assert!(result.is_pass());
        assert_eq!(result.level, Some(CheckLevel::High));
        assert_eq!(result.metric, Some(0.5));
        assert_eq!(result.message, None);

        let result = CheckResult::fail("too large");
        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(result.message.as_deref(), Some("too large"));
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&CheckStatus::Skipped).unwrap();
        assert_eq!(json, "\"skipped\"");
    }
}

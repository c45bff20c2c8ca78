//! The contract a check suite satisfies towards the host framework.

use super::{CheckResult, Dataset, DatasetType};
use crate::prelude::*;

/// Prefix the host framework uses to discover check methods.
pub const CHECK_METHOD_PREFIX: &str = "check_";

/// Builds the method name for a check id, e.g. `"one"` becomes `"check_one"`.
pub fn check_method_name(check_id: &str) -> String {
    format!("{CHECK_METHOD_PREFIX}{check_id}")
}

/// A check suite as seen by the host framework.
///
/// The framework discovers methods by the `check_` prefix, filters suites by
/// the dataset types they support and invokes methods by name. Hand-written
/// suites and suites generated from configuration are interchangeable behind
/// this trait.
pub trait BaseCheck: Send + Sync {
    /// The suite name used for registration.
    fn name(&self) -> &str;

    /// Dataset types every check in the suite supports.
    fn supported_ds(&self) -> &[DatasetType];

    /// Names of the check methods, in declaration order.
    fn check_methods(&self) -> Vec<&str>;

    /// Invokes a check method on a dataset.
    ///
    /// Returns [`SuiteError::UnknownMethod`] if the suite has no such method.
    fn invoke(&self, method: &str, dataset: &dyn Dataset) -> Result<CheckResult>;

    /// Returns true if the suite can run against the given dataset type.
    fn supports(&self, dataset_type: &DatasetType) -> bool {
        self.supported_ds().contains(dataset_type)
    }
}

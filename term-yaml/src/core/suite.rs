//! Check suites generated from configuration.

use super::{base::check_method_name, BaseCheck, Check, CheckResult, Dataset, DatasetType};
use crate::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// A check method bound to the check instance resolved for its entry.
#[derive(Debug, Clone)]
pub struct SuiteMethod {
    name: String,
    check_id: String,
    check_name: String,
    check: Arc<dyn Check>,
}

impl SuiteMethod {
    /// The method name, `check_<check_id>`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn check_id(&self) -> &str {
        &self.check_id
    }

    /// The implementation reference the check was resolved from.
    pub fn check_name(&self) -> &str {
        &self.check_name
    }

    /// The check instance this method delegates to.
    pub fn check(&self) -> &Arc<dyn Check> {
        &self.check
    }

    /// Runs the bound check against a dataset.
    pub fn call(&self, dataset: &dyn Dataset) -> Result<CheckResult> {
        self.check.do_check(dataset)
    }
}

/// A check suite assembled from a configuration document.
///
/// The suite is a plain record: its name, the ordered check methods and the
/// dataset types supported by all of its checks. It satisfies [`BaseCheck`]
/// by dispatching method calls through that record, so a host framework
/// treats it like a hand-written suite. Cloning is cheap and clones share the
/// underlying check instances.
///
/// # Examples
///
/// ```rust,no_run
/// use term_yaml::assembler::SuiteAssembler;
/// use term_yaml::core::{BaseCheck, FileDataset};
/// use term_yaml::registry::CheckRegistry;
///
/// # fn example() -> term_yaml::prelude::Result<()> {
/// let assembler = SuiteAssembler::new(CheckRegistry::with_builtins());
/// let suite = assembler.build_from_path("suites/files.yml")?;
///
/// let dataset = FileDataset::new("data/output.nc");
/// for method in suite.check_methods() {
///     let result = suite.invoke(method, &dataset)?;
///     println!("{method}: {:?}", result.status);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeneratedSuite {
    name: String,
    methods: Vec<SuiteMethod>,
    supported_ds: Vec<DatasetType>,
}

impl GeneratedSuite {
    /// Creates a new builder for a suite with the given name.
    pub fn builder(name: impl Into<String>) -> GeneratedSuiteBuilder {
        GeneratedSuiteBuilder::new(name)
    }

    /// Returns the name of the suite.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the dataset types supported by every check in the suite.
    pub fn supported_ds(&self) -> &[DatasetType] {
        &self.supported_ds
    }

    /// The check methods in declaration order.
    pub fn methods(&self) -> &[SuiteMethod] {
        &self.methods
    }

    /// Looks up the check bound to a method name.
    pub fn method(&self, name: &str) -> Option<&Arc<dyn Check>> {
        self.methods
            .iter()
            .find(|method| method.name == name)
            .map(|method| &method.check)
    }

    /// Returns a serializable overview of the suite.
    pub fn summary(&self) -> SuiteSummary {
        SuiteSummary {
            name: self.name.clone(),
            methods: self.methods.iter().map(|m| m.name.clone()).collect(),
            supported_ds: self.supported_ds.clone(),
        }
    }
}

impl BaseCheck for GeneratedSuite {
    fn name(&self) -> &str {
        &self.name
    }

    fn supported_ds(&self) -> &[DatasetType] {
        &self.supported_ds
    }

    fn check_methods(&self) -> Vec<&str> {
        self.methods.iter().map(|m| m.name.as_str()).collect()
    }

    fn invoke(&self, method: &str, dataset: &dyn Dataset) -> Result<CheckResult> {
        let bound = self
            .methods
            .iter()
            .find(|m| m.name == method)
            .ok_or_else(|| SuiteError::UnknownMethod {
                suite: self.name.clone(),
                method: method.to_string(),
            })?;
        debug!(
            suite.name = %self.name,
            check.method = %method,
            dataset.kind = %dataset.dataset_type(),
            "Invoking check method"
        );
        bound.call(dataset)
    }
}

/// Serializable overview of a generated suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteSummary {
    pub name: String,
    pub methods: Vec<String>,
    pub supported_ds: Vec<DatasetType>,
}

/// Builder for constructing [`GeneratedSuite`] instances.
#[derive(Debug)]
pub struct GeneratedSuiteBuilder {
    name: String,
    methods: Vec<SuiteMethod>,
    supported_ds: Vec<DatasetType>,
}

impl GeneratedSuiteBuilder {
    /// Creates a new suite builder with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            supported_ds: Vec::new(),
        }
    }

    /// Binds `check_<check_id>` to the given check instance.
    ///
    /// Binding the same id twice replaces the earlier check in place.
    pub fn method(
        mut self,
        check_id: impl Into<String>,
        check_name: impl Into<String>,
        check: Arc<dyn Check>,
    ) -> Self {
        let check_id = check_id.into();
        let method = SuiteMethod {
            name: check_method_name(&check_id),
            check_id,
            check_name: check_name.into(),
            check,
        };
        match self.methods.iter_mut().find(|m| m.name == method.name) {
            Some(existing) => *existing = method,
            None => self.methods.push(method),
        }
        self
    }

    /// Sets the dataset types the suite supports.
    pub fn supported_ds<I>(mut self, supported_ds: I) -> Self
    where
        I: IntoIterator<Item = DatasetType>,
    {
        self.supported_ds = supported_ds.into_iter().collect();
        self
    }

    /// Builds the `GeneratedSuite` instance.
    pub fn build(self) -> GeneratedSuite {
        GeneratedSuite {
            name: self.name,
            methods: self.methods,
            supported_ds: self.supported_ds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CheckLevel, FileDataset};
    use crate::value::{Parameters, Value};

    #[derive(Debug)]
    struct Echo {
        parameters: Parameters,
    }

    impl Check for Echo {
        fn do_check(&self, _dataset: &dyn Dataset) -> Result<CheckResult> {
            let word = self.parameters.get("word").cloned().unwrap_or_default();
            Ok(CheckResult::pass().with_message(word.to_string()))
        }

        fn parameters(&self) -> &Parameters {
            &self.parameters
        }

        fn level(&self) -> Option<CheckLevel> {
            None
        }
    }

    fn echo(word: &str) -> Arc<dyn Check> {
        Arc::new(Echo {
            parameters: Parameters::from([("word".to_string(), Value::from(word))]),
        })
    }

    #[test]
    fn test_builder_and_dispatch() {
        let suite = GeneratedSuite::builder("echo_suite")
            .method("one", "tests.Echo", echo("first"))
            .method("two", "tests.Echo", echo("second"))
            .supported_ds(vec![DatasetType::new("file")])
            .build();

        assert_eq!(suite.name(), "echo_suite");
        assert_eq!(suite.check_methods(), vec!["check_one", "check_two"]);
        assert!(suite.supports(&DatasetType::new("file")));
        assert!(!suite.supports(&DatasetType::new("netcdf")));

        let dataset = FileDataset::new("a.txt");
        let first = suite.invoke("check_one", &dataset).unwrap();
        let second = suite.invoke("check_two", &dataset).unwrap();
        assert_eq!(first.message.as_deref(), Some("first"));
        assert_eq!(second.message.as_deref(), Some("second"));
    }

    #[test]
    fn test_unknown_method() {
        let suite = GeneratedSuite::builder("empty").build();
        let err = suite
            .invoke("check_missing", &FileDataset::new("a.txt"))
            .unwrap_err();
        assert!(matches!(err, SuiteError::UnknownMethod { .. }));
    }

    #[test]
    fn test_rebinding_replaces_in_place() {
        let suite = GeneratedSuite::builder("suite")
            .method("one", "tests.Echo", echo("old"))
            .method("two", "tests.Echo", echo("other"))
            .method("one", "tests.Echo", echo("new"))
            .build();

        assert_eq!(suite.check_methods(), vec!["check_one", "check_two"]);
        let check = suite.method("check_one").unwrap();
        assert_eq!(check.parameters().get("word"), Some(&Value::from("new")));
    }

    #[test]
    fn test_summary() {
        let suite = GeneratedSuite::builder("suite")
            .method("one", "tests.Echo", echo("a"))
            .supported_ds(vec![DatasetType::new("file")])
            .build();
        let json = serde_json::to_value(suite.summary()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "suite",
                "methods": ["check_one"],
                "supported_ds": ["file"],
            })
        );
    }
}

//! Assembly of check suites from configuration.
//!
//! The assembler validates a configuration document, resolves every check
//! entry through a [`CheckRegistry`], merges and validates its parameters,
//! instantiates it and binds it to a `check_<check_id>` method of a
//! [`GeneratedSuite`]. Any failure aborts the whole assembly.

use crate::config::{load_document, parse_document, validate_parameters, CheckEntry, SuiteConfig};
use crate::core::{Check, DatasetType, GeneratedSuite};
use crate::logging::truncate_field;
use crate::prelude::*;
use crate::registry::CheckRegistry;
use crate::value::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Builds [`GeneratedSuite`]s from configuration documents.
///
/// # Examples
///
/// ```rust
/// use term_yaml::assembler::SuiteAssembler;
/// use term_yaml::core::{BaseCheck, DatasetType};
/// use term_yaml::registry::CheckRegistry;
///
/// let assembler = SuiteAssembler::new(CheckRegistry::with_builtins());
/// let suite = assembler
///     .build_from_str(
///         r#"
/// suite_name: file_checks
/// checks:
///   - check_id: size
///     check_name: term_yaml.checks.FileSizeCheck
///     check_level: HIGH
///     parameters: {}
///   - check_id: naming
///     check_name: term_yaml.checks.FilenamePatternCheck
///     parameters:
///       pattern: '\.nc$'
/// "#,
///     )
///     .unwrap();
///
/// assert_eq!(suite.name(), "file_checks");
/// assert_eq!(suite.check_methods(), vec!["check_size", "check_naming"]);
/// assert_eq!(suite.supported_ds(), &[DatasetType::new("file")]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SuiteAssembler {
    registry: CheckRegistry,
    log_config: LogConfig,
}

impl SuiteAssembler {
    /// Creates an assembler resolving checks through the given registry.
    pub fn new(registry: CheckRegistry) -> Self {
        Self {
            registry,
            log_config: LogConfig::default(),
        }
    }

    /// Sets how much detail is logged while assembling.
    pub fn with_log_config(mut self, log_config: LogConfig) -> Self {
        self.log_config = log_config;
        self
    }

    /// Returns the registry used to resolve check references.
    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    /// Builds a suite from an already parsed document.
    #[instrument(skip_all)]
    pub fn build(&self, document: &Value) -> Result<GeneratedSuite> {
        let config = SuiteConfig::from_value(document)?;
        self.assemble(&config)
    }

    /// Builds a suite from YAML text.
    pub fn build_from_str(&self, text: &str) -> Result<GeneratedSuite> {
        self.build(&parse_document(text)?)
    }

    /// Builds a suite from a YAML file.
    pub fn build_from_path(&self, path: impl AsRef<Path>) -> Result<GeneratedSuite> {
        self.build(&load_document(path)?)
    }

    /// Builds one suite per configuration file, keyed by suite name.
    ///
    /// Files are processed in order and the first failure aborts. When two
    /// files declare the same `suite_name` the later one wins.
    pub fn get_suites<I, P>(&self, paths: I) -> Result<BTreeMap<String, GeneratedSuite>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut suites = BTreeMap::new();
        for path in paths {
            let path = path.as_ref();
            let suite = self.build_from_path(path)?;
            if suites.contains_key(suite.name()) {
                warn!(
                    suite.name = %suite.name(),
                    config.path = %path.display(),
                    "Suite name already defined by an earlier file, replacing it"
                );
            }
            suites.insert(suite.name().to_string(), suite);
        }
        Ok(suites)
    }

    fn assemble(&self, config: &SuiteConfig) -> Result<GeneratedSuite> {
        let mut builder = GeneratedSuite::builder(&config.suite_name);
        let mut supported_sets = Vec::with_capacity(config.checks.len());

        for entry in &config.checks {
            let (check, supported_ds) = self.resolve_entry(entry)?;
            supported_sets.push(supported_ds);
            builder = builder.method(&entry.check_id, &entry.check_name, check);
        }

        let supported_ds = intersect_supported(supported_sets);
        info!(
            suite.name = %config.suite_name,
            suite.checks = config.checks.len(),
            suite.supported_ds = ?supported_ds,
            "Assembled check suite"
        );
        Ok(builder.supported_ds(supported_ds).build())
    }

    /// Resolves, parameterizes and instantiates a single entry.
    fn resolve_entry(
        &self,
        entry: &CheckEntry,
    ) -> Result<(Arc<dyn Check>, BTreeSet<DatasetType>)> {
        let implementation = self.registry.resolve(&entry.check_name)?;

        let mut parameters = implementation.defaults();
        parameters.extend(entry.parameters.clone());

        if let Some(required) = implementation.required_parameters() {
            let location = format!("parameters of check '{}'", entry.check_id);
            validate_parameters(&required, &parameters, &location)
                .map_err(|e| SuiteError::parameter(&entry.check_id, e))?;
        }

        let check: Arc<dyn Check> = implementation
            .instantiate(parameters, entry.check_level)
            .map_err(|e| SuiteError::parameter(&entry.check_id, e))?
            .into();

        debug!(
            check.id = %entry.check_id,
            check.name = %entry.check_name,
            check.level = ?entry.check_level,
            check.parameters = check.parameters().len(),
            "Resolved check"
        );
        if self.log_config.log_check_details {
            for (name, value) in check.parameters() {
                debug!(
                    check.id = %entry.check_id,
                    parameter.name = %name,
                    parameter.value = %truncate_field(&value.to_string(), self.log_config.max_field_length),
                    "Check parameter"
                );
            }
        }

        let supported_ds = implementation.supported_ds().into_iter().collect();
        Ok((check, supported_ds))
    }
}

/// Dataset types supported by every set; empty if any set is empty.
fn intersect_supported(sets: Vec<BTreeSet<DatasetType>>) -> Vec<DatasetType> {
    let mut sets = sets.into_iter();
    let Some(first) = sets.next() else {
        return Vec::new();
    };
    sets.fold(first, |acc, set| acc.intersection(&set).cloned().collect())
        .into_iter()
        .collect()
}

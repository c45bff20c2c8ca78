//! Registry resolving textual check references to implementations.
//!
//! Configuration refers to implementations as `<container>.<member>`, e.g.
//! `term_yaml.checks.FileSizeCheck`. The reference is split at the last dot;
//! the container groups related members, so an unknown container and an
//! unknown member in a known container are reported differently.

use crate::checks::{FileSizeCheck, FilenamePatternCheck};
use crate::core::CheckImplementation;
use crate::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Container under which the built-in checks are registered.
pub const BUILTIN_CONTAINER: &str = "term_yaml.checks";

/// Maps check references to implementations.
#[derive(Clone, Default)]
pub struct CheckRegistry {
    containers: BTreeMap<String, BTreeMap<String, Arc<dyn CheckImplementation>>>,
}

impl std::fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckRegistry")
            .field("checks", &self.names())
            .finish()
    }
}

impl CheckRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in checks.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.insert(BUILTIN_CONTAINER, "FileSizeCheck", Arc::new(FileSizeCheck));
        registry.insert(
            BUILTIN_CONTAINER,
            "FilenamePatternCheck",
            Arc::new(FilenamePatternCheck),
        );
        registry
    }

    /// Registers an implementation under a qualified name.
    ///
    /// Registering an existing name replaces the earlier implementation.
    /// Returns [`SuiteError::Resolution`] if the name has no container part.
    pub fn register<C>(&mut self, name: impl Into<String>, implementation: C) -> Result<&mut Self>
    where
        C: CheckImplementation + 'static,
    {
        self.register_arc(name, Arc::new(implementation))
    }

    /// Registers a shared implementation under a qualified name.
    pub fn register_arc(
        &mut self,
        name: impl Into<String>,
        implementation: Arc<dyn CheckImplementation>,
    ) -> Result<&mut Self> {
        let name = name.into();
        let (container, member) = split_reference(&name)?;
        debug!(check.name = %name, "Registering check implementation");
        self.insert(container, member, implementation);
        Ok(self)
    }

    fn insert(
        &mut self,
        container: &str,
        member: &str,
        implementation: Arc<dyn CheckImplementation>,
    ) {
        self.containers
            .entry(container.to_string())
            .or_default()
            .insert(member.to_string(), implementation);
    }

    /// Resolves a reference to its implementation.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn CheckImplementation>> {
        let (container, member) = split_reference(name)?;
        let members = self.containers.get(container).ok_or_else(|| {
            SuiteError::resolution(name, format!("no container named '{container}'"))
        })?;
        members.get(member).cloned().ok_or_else(|| {
            SuiteError::resolution(
                name,
                format!("container '{container}' has no member '{member}'"),
            )
        })
    }

    /// Returns true if the reference resolves.
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    /// Lists every registered reference, sorted.
    pub fn names(&self) -> Vec<String> {
        self.containers
            .iter()
            .flat_map(|(container, members)| {
                members.keys().map(move |member| format!("{container}.{member}"))
            })
            .collect()
    }

    /// Number of registered implementations.
    pub fn len(&self) -> usize {
        self.containers.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn split_reference(name: &str) -> Result<(&str, &str)> {
    match name.rsplit_once('.') {
        Some((container, member)) if !container.is_empty() && !member.is_empty() => {
            Ok((container, member))
        }
        _ => Err(SuiteError::resolution(
            name,
            "expected a reference of the form '<container>.<member>'",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_resolve() {
        let registry = CheckRegistry::with_builtins();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("term_yaml.checks.FileSizeCheck"));
        assert!(registry.contains("term_yaml.checks.FilenamePatternCheck"));
        assert_eq!(
            registry.names(),
            vec![
                "term_yaml.checks.FileSizeCheck".to_string(),
                "term_yaml.checks.FilenamePatternCheck".to_string(),
            ]
        );
    }

    #[test]
    fn test_unknown_container_and_member() {
        let registry = CheckRegistry::with_builtins();

        let err = registry.resolve("nowhere.FileSizeCheck").err().unwrap();
        assert!(err.to_string().contains("no container named 'nowhere'"));

        let err = registry.resolve("term_yaml.checks.Missing").err().unwrap();
        assert!(err.to_string().contains("has no member 'Missing'"));
        assert_eq!(err.category(), ErrorCategory::Resolution);
    }

    #[test]
    fn test_unqualified_names_are_rejected() {
        let mut registry = CheckRegistry::new();
        assert!(registry.register("FileSizeCheck", FileSizeCheck).is_err());
        assert!(registry.register(".FileSizeCheck", FileSizeCheck).is_err());
        assert!(registry.resolve("FileSizeCheck").is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_nested_containers() {
        let mut registry = CheckRegistry::new();
        registry
            .register("org.team.checks.Size", FileSizeCheck)
            .unwrap();
        assert!(registry.contains("org.team.checks.Size"));
        assert!(!registry.contains("org.team.Size"));
    }
}

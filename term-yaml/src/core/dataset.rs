//! Datasets that checks run against.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt::{self, Debug};
use std::path::{Path, PathBuf};

/// An implementation-defined marker describing a kind of data.
///
/// Check implementations declare the markers they can operate on, and a
/// generated suite supports the markers shared by all of its checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetType(String);

impl DatasetType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatasetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DatasetType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DatasetType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A dataset handed to a check by the host framework.
///
/// Checks downcast through [`Dataset::as_any`] to the concrete dataset they
/// know how to inspect.
pub trait Dataset: Debug + Send + Sync {
    /// The kind of data this dataset holds.
    fn dataset_type(&self) -> DatasetType;

    /// Returns `self` for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// A file on disk, of dataset type `"file"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDataset {
    path: PathBuf,
}

impl FileDataset {
    /// The dataset type marker of file datasets.
    pub const TYPE: &'static str = "file";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Dataset for FileDataset {
    fn dataset_type(&self) -> DatasetType {
        DatasetType::new(Self::TYPE)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

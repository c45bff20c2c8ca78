//! Built-in check implementations.
//!
//! These are registered by [`CheckRegistry::with_builtins`] under the
//! `term_yaml.checks` container and operate on [`FileDataset`]s.
//!
//! [`CheckRegistry::with_builtins`]: crate::registry::CheckRegistry::with_builtins
//! [`FileDataset`]: crate::core::FileDataset

mod file_size;
mod filename;

pub use file_size::{FileSizeCheck, FileSizeLimit};
pub use filename::{FilenameMatcher, FilenamePatternCheck};

use crate::core::{CheckResult, Dataset, FileDataset};

/// Downcasts a dataset to a file, or produces the skipped result to return.
fn as_file(dataset: &dyn Dataset) -> std::result::Result<&FileDataset, CheckResult> {
    dataset.as_any().downcast_ref::<FileDataset>().ok_or_else(|| {
        CheckResult::skipped(format!(
            "dataset of type '{}' is not a file",
            dataset.dataset_type()
        ))
    })
}

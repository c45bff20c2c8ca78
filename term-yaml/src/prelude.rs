//! Prelude for commonly used types and traits in term-yaml.

pub use crate::error::{ErrorCategory, Result, SuiteError};
pub use crate::logging::LogConfig;

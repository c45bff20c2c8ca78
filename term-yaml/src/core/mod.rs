//! Core types shared by configuration, assembly and the host framework.
//!
//! ## Overview
//!
//! - **[`CheckImplementation`]**: A named, reusable unit of validation logic with
//!   parameter defaults, parameter requirements and supported dataset types
//! - **[`Check`]**: A configured instance of an implementation
//! - **[`BaseCheck`]**: The contract a suite satisfies towards the host framework
//! - **[`GeneratedSuite`]**: A suite assembled from configuration
//! - **[`CheckLevel`]**: Severity levels for checks (HIGH, MEDIUM, LOW)
//!
//! ## Architecture
//!
//! ```text
//! GeneratedSuite (supported_ds = ∩ of all checks)
//!     ├── check_size   ──> Check (FileSizeCheck, level HIGH)
//!     └── check_naming ──> Check (FilenamePatternCheck, level LOW)
//! ```

pub mod base;
mod check;
mod dataset;
mod level;
mod suite;

pub use base::{check_method_name, BaseCheck, CHECK_METHOD_PREFIX};
pub use check::{Check, CheckImplementation, CheckResult, CheckStatus, RequiredParameters};
pub use dataset::{Dataset, DatasetType, FileDataset};
pub use level::{CheckLevel, ParseLevelError};
pub use suite::{GeneratedSuite, GeneratedSuiteBuilder, SuiteMethod, SuiteSummary};

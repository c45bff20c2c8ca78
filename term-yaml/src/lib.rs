//! # term-yaml - Check suites from YAML
//!
//! term-yaml builds check suites from declarative YAML configuration instead
//! of hand-written code. A configuration names a suite and lists the checks
//! it is made of; each check refers to a registered implementation and
//! supplies its parameters.
//!
//! ## Quick Start
//!
//! ```rust
//! use term_yaml::prelude::*;
//! use term_yaml::assembler::SuiteAssembler;
//! use term_yaml::core::{BaseCheck, CheckStatus, FileDataset};
//! use term_yaml::registry::CheckRegistry;
//!
//! # fn example() -> Result<()> {
//! let assembler = SuiteAssembler::new(CheckRegistry::with_builtins());
//! let suite = assembler.build_from_str(
//!     r#"
//! suite_name: ocean_files
//! checks:
//!   - check_id: size
//!     check_name: term_yaml.checks.FileSizeCheck
//!     check_level: HIGH
//!     parameters:
//!       threshold: 4
//!   - check_id: naming
//!     check_name: term_yaml.checks.FilenamePatternCheck
//!     check_level: LOW
//!     parameters:
//!       pattern: '^[a-z_]+\.nc$'
//! "#,
//! )?;
//!
//! assert_eq!(suite.name(), "ocean_files");
//! assert_eq!(suite.check_methods(), vec!["check_size", "check_naming"]);
//!
//! let result = suite.invoke("check_naming", &FileDataset::new("sea_surface.nc"))?;
//! assert_eq!(result.status, CheckStatus::Pass);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## How a suite is assembled
//!
//! 1. The document is parsed into an untyped [`value::Value`].
//! 2. [`config::validate`] checks its shape and fails on the first problem.
//! 3. Every entry's `check_name` is resolved through a [`registry::CheckRegistry`].
//! 4. Implementation defaults are merged with the entry's parameters and
//!    checked against the implementation's required parameters.
//! 5. The implementation is instantiated and bound to a `check_<check_id>`
//!    method of a [`core::GeneratedSuite`].
//! 6. The suite's `supported_ds` is the intersection of every check's
//!    supported dataset types.
//!
//! ## Modules
//!
//! - **`config`**: Configuration documents and their validation
//! - **`core`**: Check contract, severity levels, datasets and generated suites
//! - **`registry`**: Resolution of check references to implementations
//! - **`assembler`**: Suite assembly
//! - **`checks`**: Built-in check implementations
//! - **`value`**: Tagged-union value model for untyped configuration data

pub mod assembler;
pub mod checks;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod registry;
pub mod value;

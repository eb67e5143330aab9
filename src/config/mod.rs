//! Build-flag resolution for the RAPIDS build backend
//!
//! Implements the 4-tier flag precedence:
//! 1. Environment variables (RAPIDS_*)
//! 2. Operation settings passed by the build front-end
//! 3. [tool.rapids_builder] in pyproject.toml
//! 4. Built-in defaults

mod error;
mod flags;
mod pyproject;
mod resolve;

pub use error::ConfigError;
pub use flags::{parse_bool, Flag, FlagOrigin};
pub use pyproject::{ProjectTable, Pyproject, PYPROJECT_FILE};
pub use resolve::{Config, ConfigReport, SourceInfo, SCHEMA_ID, SCHEMA_VERSION};

//! RAPIDS Build Config - effective build settings for the RAPIDS build backend
//!
//! This crate resolves the build flags consumed by the RAPIDS package build
//! backend. It merges the [tool.rapids_builder] table of a project's
//! pyproject.toml with caller-supplied operation settings and RAPIDS_*
//! environment overrides, in a fixed precedence order.

pub mod config;

pub use config::{Config, ConfigError, ConfigReport, Flag, FlagOrigin};

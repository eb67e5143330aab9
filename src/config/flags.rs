//! Flag registry for the `[tool.rapids_builder]` table.
//!
//! Each build flag is described by static data: the kebab-case name it
//! carries in pyproject.toml and operation settings, the environment
//! variable that overrides it, and the raw spelling of its built-in
//! default. Resolution walks this registry instead of transforming flag
//! names at runtime.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// The build flags recognized by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// File to stamp with the current commit hash during the build
    CommitFile,
    /// Skip appending the CUDA version suffix to the package name
    DisableCudaSuffix,
    /// Pin dependencies to release versions only
    OnlyReleaseDeps,
    /// Fail the build when no CUDA toolchain is available
    RequireCuda,
}

/// Which tier supplied a resolved flag value.
///
/// Listed highest precedence first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlagOrigin {
    Environment,
    Settings,
    Project,
    Default,
}

impl Flag {
    /// All flags, in table order.
    pub const ALL: [Flag; 4] = [
        Flag::CommitFile,
        Flag::DisableCudaSuffix,
        Flag::OnlyReleaseDeps,
        Flag::RequireCuda,
    ];

    /// Kebab-case name used in pyproject.toml and operation settings.
    pub fn name(&self) -> &'static str {
        match self {
            Flag::CommitFile => "commit-file",
            Flag::DisableCudaSuffix => "disable-cuda-suffix",
            Flag::OnlyReleaseDeps => "only-release-deps",
            Flag::RequireCuda => "require-cuda",
        }
    }

    /// Environment variable that overrides this flag.
    pub fn env_var(&self) -> &'static str {
        match self {
            Flag::CommitFile => "RAPIDS_COMMIT_FILE",
            Flag::DisableCudaSuffix => "RAPIDS_DISABLE_CUDA_SUFFIX",
            Flag::OnlyReleaseDeps => "RAPIDS_ONLY_RELEASE_DEPS",
            Flag::RequireCuda => "RAPIDS_REQUIRE_CUDA",
        }
    }

    /// Built-in default, spelled as a raw value.
    pub fn default_raw(&self) -> &'static str {
        match self {
            Flag::CommitFile => "",
            Flag::DisableCudaSuffix => "false",
            Flag::OnlyReleaseDeps => "false",
            Flag::RequireCuda => "true",
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FlagOrigin {
    /// Returns the string representation of the origin
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagOrigin::Environment => "environment",
            FlagOrigin::Settings => "settings",
            FlagOrigin::Project => "project",
            FlagOrigin::Default => "default",
        }
    }
}

impl std::fmt::Display for FlagOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a raw flag value into a boolean.
///
/// Only the exact spellings "true" and "false" are accepted, at every
/// precedence tier. Anything else, including capitalized variants, is a
/// validation error naming the flag and the offending value.
pub fn parse_bool(flag: Flag, raw: &str) -> Result<bool, ConfigError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidFlagValue {
            flag: flag.name(),
            value: raw.to_string(),
        }),
    }
}

//! Four-tier flag resolution.
//!
//! Precedence, highest to lowest:
//! 1. Environment variables (RAPIDS_*)
//! 2. Operation settings passed by the build front-end
//! 3. [tool.rapids_builder] in pyproject.toml
//! 4. Built-in defaults
//!
//! Resolution is lazy: every accessor re-runs the tier walk against the
//! live process environment, so an override exported after construction is
//! honored on the next read, and a fixed spelling succeeds without
//! reconstructing the `Config`.

use serde::Serialize;
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::flags::{parse_bool, Flag, FlagOrigin};
use super::pyproject::Pyproject;

/// Schema version for the effective-flags report
pub const SCHEMA_VERSION: u32 = 1;

/// Schema identifier for the effective-flags report
pub const SCHEMA_ID: &str = "rapids-build-config/effective_flags@1";

/// Resolved build configuration for one packaging operation.
///
/// Reads `pyproject.toml` once at construction; flag values are resolved
/// per accessor call.
#[derive(Debug, Clone)]
pub struct Config {
    project_dir: PathBuf,
    pyproject: Pyproject,
    operation_settings: BTreeMap<String, String>,
}

impl Config {
    /// Build a resolver for the project in `project_dir`.
    ///
    /// `operation_settings` is the build front-end's config-settings
    /// channel; `None` means no operation-scoped overrides.
    pub fn new(
        project_dir: impl AsRef<Path>,
        operation_settings: Option<BTreeMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let project_dir = project_dir.as_ref().to_path_buf();
        let pyproject = Pyproject::load(&project_dir)?;

        Ok(Self {
            project_dir,
            pyproject,
            operation_settings: operation_settings.unwrap_or_default(),
        })
    }

    /// File to stamp with the current commit hash; empty when stamping is
    /// disabled. A quoted file-tier value has its surrounding quotes
    /// stripped; settings and environment values pass through verbatim.
    pub fn commit_file(&self) -> String {
        let (raw, origin) = self.raw_value(Flag::CommitFile);
        if origin == FlagOrigin::Project {
            strip_quotes(&raw).to_string()
        } else {
            raw
        }
    }

    /// Whether to skip appending the CUDA version suffix to the package name.
    pub fn disable_cuda_suffix(&self) -> Result<bool, ConfigError> {
        self.resolve_bool(Flag::DisableCudaSuffix)
    }

    /// Whether to pin dependencies to release versions only.
    pub fn only_release_deps(&self) -> Result<bool, ConfigError> {
        self.resolve_bool(Flag::OnlyReleaseDeps)
    }

    /// Whether the build must fail when no CUDA toolchain is available.
    pub fn require_cuda(&self) -> Result<bool, ConfigError> {
        self.resolve_bool(Flag::RequireCuda)
    }

    /// Which tier currently supplies a flag's value.
    pub fn origin(&self, flag: Flag) -> FlagOrigin {
        self.raw_value(flag).1
    }

    /// Directory the resolver was constructed for.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Package name from `[project]`, if declared.
    pub fn project_name(&self) -> Option<&str> {
        self.pyproject.project.name.as_deref()
    }

    /// Declared dependency list from `[project]`.
    pub fn dependencies(&self) -> &[String] {
        &self.pyproject.project.dependencies
    }

    /// Path of the project-description file that was read.
    pub fn source_path(&self) -> &Path {
        &self.pyproject.path
    }

    /// SHA-256 hex digest of the project-description file bytes.
    pub fn source_digest(&self) -> &str {
        &self.pyproject.digest
    }

    /// Resolve every flag into a serializable snapshot.
    ///
    /// The snapshot is taken at call time; the accessors remain the live
    /// interface and keep re-reading the environment afterwards.
    pub fn report(&self) -> Result<ConfigReport, ConfigError> {
        let mut origins = BTreeMap::new();
        for flag in Flag::ALL {
            origins.insert(flag.name(), self.origin(flag));
        }

        Ok(ConfigReport {
            schema_version: SCHEMA_VERSION,
            schema_id: SCHEMA_ID.to_string(),
            source: SourceInfo {
                path: self.pyproject.path.display().to_string(),
                digest: self.pyproject.digest.clone(),
            },
            commit_file: self.commit_file(),
            disable_cuda_suffix: self.disable_cuda_suffix()?,
            only_release_deps: self.only_release_deps()?,
            require_cuda: self.require_cuda()?,
            origins,
        })
    }

    /// Walk the tiers for one flag, returning the winning raw value and its
    /// origin. The default tier supplies the flag's raw default spelling.
    fn raw_value(&self, flag: Flag) -> (String, FlagOrigin) {
        if let Ok(value) = env::var(flag.env_var()) {
            return (value, FlagOrigin::Environment);
        }
        if let Some(value) = self.operation_settings.get(flag.name()) {
            return (value.clone(), FlagOrigin::Settings);
        }
        if let Some(value) = self.pyproject.flags.get(flag.name()) {
            return (value.clone(), FlagOrigin::Project);
        }
        (flag.default_raw().to_string(), FlagOrigin::Default)
    }

    fn resolve_bool(&self, flag: Flag) -> Result<bool, ConfigError> {
        let (raw, _) = self.raw_value(flag);
        parse_bool(flag, &raw)
    }
}

/// Strip one pair of surrounding double quotes from a file-tier string
/// value. Values templated into the tool table sometimes arrive as quoted
/// literals.
fn strip_quotes(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw)
}

/// Provenance of the file tier in an effective-flags report.
#[derive(Debug, Clone, Serialize)]
pub struct SourceInfo {
    pub path: String,
    pub digest: String,
}

/// Snapshot of all resolved flags with per-flag origins.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigReport {
    pub schema_version: u32,
    pub schema_id: String,
    pub source: SourceInfo,
    pub commit_file: String,
    pub disable_cuda_suffix: bool,
    pub only_release_deps: bool,
    pub require_cuda: bool,
    pub origins: BTreeMap<&'static str, FlagOrigin>,
}

//! pyproject.toml loading (`[project]` metadata and the flag table).
//!
//! The resolver reads one file per invocation: `<project_dir>/pyproject.toml`.
//! From it we keep the `[project]` dependency section as passthrough metadata
//! for the surrounding build backend, and the `[tool.rapids_builder]` table
//! as the file tier of flag resolution. Flag values are held as raw strings;
//! typed coercion happens later, at field access.

use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::ConfigError;

/// Fixed file name of the project-description file.
pub const PYPROJECT_FILE: &str = "pyproject.toml";

/// `[project]` metadata carried through for the build backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectTable {
    pub name: Option<String>,

    #[serde(default)]
    pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ToolTable {
    #[serde(default)]
    rapids_builder: BTreeMap<String, toml::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Document {
    #[serde(default)]
    project: ProjectTable,

    #[serde(default)]
    tool: ToolTable,
}

/// Parsed pyproject.toml with provenance of the raw bytes.
#[derive(Debug, Clone)]
pub struct Pyproject {
    /// Path the document was read from
    pub path: PathBuf,

    /// SHA-256 hex digest of the raw file bytes
    pub digest: String,

    /// `[project]` metadata
    pub project: ProjectTable,

    /// Raw string values from `[tool.rapids_builder]`. Keys outside the
    /// known flag set stay in the map and are never consulted.
    pub flags: BTreeMap<String, String>,
}

impl Pyproject {
    /// Load and parse `pyproject.toml` from a project directory.
    pub fn load(project_dir: &Path) -> Result<Self, ConfigError> {
        let path = project_dir.join(PYPROJECT_FILE);
        let bytes = fs::read(&path).map_err(|e| ConfigError::Read {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Self::parse(path, bytes)
    }

    fn parse(path: PathBuf, bytes: Vec<u8>) -> Result<Self, ConfigError> {
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hex::encode(hasher.finalize());

        let contents = String::from_utf8(bytes).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            message: format!("Invalid UTF-8: {}", e),
        })?;

        let doc: Document = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        // Flag values are strings at this boundary. TOML booleans are
        // rendered to their literal spellings; any other type is malformed.
        let mut flags = BTreeMap::new();
        for (key, value) in doc.tool.rapids_builder {
            let raw = match value {
                toml::Value::String(s) => s,
                toml::Value::Boolean(b) => b.to_string(),
                other => {
                    return Err(ConfigError::InvalidFlagTable {
                        key,
                        reason: format!("expected a string, got {}", other.type_str()),
                    })
                }
            };
            flags.insert(key, raw);
        }

        Ok(Self {
            path,
            digest,
            project: doc.project,
            flags,
        })
    }
}

//! Custom binding (`<module>_custom_bindings.toml`) parsing.
//!
//! A custom bindings file supplies raw replacement source for functions the
//! descriptor flags as custom. Its contents are emitted verbatim — no
//! wrapping, no validation, and no guarantee the source defines the expected
//! export. Correctness of custom source is the supplier's responsibility.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

/// Custom bindings for one module, keyed by function name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomBindings {
    /// Entries keyed by declared function name.
    #[serde(default)]
    pub bindings: BTreeMap<String, CustomBinding>,
}

/// A single custom binding entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomBinding {
    /// Replacement JavaScript source, emitted verbatim.
    pub js: String,
    /// Optional host-side C fragment (a `handle_<fn>` implementation).
    #[serde(default)]
    pub c: Option<String>,
}

impl CustomBindings {
    /// Parse custom bindings from a TOML string.
    pub fn parse(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(GenError::Toml)
    }

    /// Parse custom bindings from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Look up the entry for a function name.
    pub fn get(&self, name: &str) -> Option<&CustomBinding> {
        self.bindings.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Conventional location: `<module>_custom_bindings.toml` next to the
    /// descriptor file.
    pub fn conventional_path(descriptor_path: &Path, module_name: &str) -> PathBuf {
        let dir = descriptor_path.parent().unwrap_or(Path::new("."));
        dir.join(format!("{module_name}_custom_bindings.toml"))
    }
}

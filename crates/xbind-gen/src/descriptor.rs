//! Module descriptor (`<module>.toml`) parsing.
//!
//! A descriptor declares an extension module and the functions its generated
//! JavaScript API must expose. Function order in the file determines emission
//! order — significant only for reproducible output, not semantics.

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

/// A complete module descriptor parsed from a descriptor TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Metadata about the module.
    pub module: ModuleMeta,
    /// The functions to expose, in emission order.
    #[serde(default, rename = "functions")]
    pub functions: Vec<FunctionSpec>,
}

/// Metadata about the module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleMeta {
    /// Module name (e.g., "geo"); used for extension naming and diagnostics.
    pub name: String,
    /// Optional namespace prefix for the registered extension name.
    #[serde(default)]
    pub namespace: Option<String>,
}

/// A single exposed function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSpec {
    /// Function name; becomes the exported symbol and the wire command name,
    /// with no renaming or escaping.
    pub name: String,
    /// Whether this function uses a custom binding instead of a generated
    /// stub.
    #[serde(default)]
    pub custom: bool,
}

impl ModuleDescriptor {
    /// Parse a module descriptor from a TOML string.
    pub fn parse(input: &str) -> Result<Self> {
        let desc: ModuleDescriptor = toml::from_str(input).map_err(GenError::Toml)?;

        if desc.module.name.is_empty() {
            return Err(GenError::InvalidDescriptor {
                detail: "module.name is required".to_string(),
            });
        }

        Ok(desc)
    }

    /// Parse a module descriptor from a file path.
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// The name the extension registers under: `<namespace>.<name>` when a
    /// namespace is set, the module name alone otherwise.
    pub fn extension_name(&self) -> String {
        match &self.module.namespace {
            Some(ns) => format!("{ns}.{}", self.module.name),
            None => self.module.name.clone(),
        }
    }
}

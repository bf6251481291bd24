//! CLI command implementations.

pub mod check;
pub mod generate;

use std::path::Path;

use anyhow::{bail, Context, Result};
use xbind_gen::{CustomBindings, ModuleDescriptor};

/// Load a descriptor and its custom bindings.
///
/// When no customs path is given, the conventional
/// `<module>_custom_bindings.toml` next to the descriptor is used if it
/// exists; otherwise the bindings are empty.
pub(crate) fn load_inputs(
    descriptor_path: &Path,
    customs_path: Option<&Path>,
) -> Result<(ModuleDescriptor, CustomBindings)> {
    if !descriptor_path.is_file() {
        bail!("descriptor file not found: {}", descriptor_path.display());
    }

    let module = ModuleDescriptor::load(descriptor_path)
        .with_context(|| format!("loading {}", descriptor_path.display()))?;

    let customs = match customs_path {
        Some(path) => {
            if !path.is_file() {
                bail!("custom bindings file not found: {}", path.display());
            }
            CustomBindings::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => {
            let conventional =
                CustomBindings::conventional_path(descriptor_path, &module.module.name);
            if conventional.is_file() {
                CustomBindings::load(&conventional)
                    .with_context(|| format!("loading {}", conventional.display()))?
            } else {
                CustomBindings::default()
            }
        }
    };

    Ok((module, customs))
}

pub(crate) fn print_inert_warnings(inert_keys: &[String]) {
    for key in inert_keys {
        eprintln!("warning: custom binding '{key}' matches no declared function");
    }
}

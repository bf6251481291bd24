//! `xbind check` — validate a descriptor without emitting sources.

use std::path::Path;

use anyhow::Result;
use xbind_gen::Binding;

/// Validate a descriptor and its custom bindings; print a summary.
pub fn run(descriptor_path: &Path, customs_path: Option<&Path>) -> Result<()> {
    let (module, customs) = super::load_inputs(descriptor_path, customs_path)?;

    let resolution = xbind_gen::resolve(&module, &customs, |f| f.custom)
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    super::print_inert_warnings(&resolution.inert_keys);

    let stubs = resolution
        .bindings
        .iter()
        .filter(|b| matches!(b, Binding::Stub(_)))
        .count();
    let custom = resolution.bindings.len() - stubs;

    println!(
        "{}: {} functions ({} stubs, {} custom) — OK",
        module.extension_name(),
        resolution.bindings.len(),
        stubs,
        custom
    );

    Ok(())
}

//! `xbind generate` — descriptor → generated source files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Generate sources for one module descriptor and write them to `out_dir`.
///
/// Writes `<module>_js_api.js`, and unless `js_only` also `<module>_c_api.c`
/// and `<module>_js_api.c` (the JS embedded as a C string). Generation
/// failures abort before any file is written.
pub fn run(
    descriptor_path: &Path,
    customs_path: Option<&Path>,
    out_dir: Option<&Path>,
    js_only: bool,
) -> Result<()> {
    let (module, customs) = super::load_inputs(descriptor_path, customs_path)?;

    let generated =
        xbind_gen::generate(&module, &customs, |f| f.custom).map_err(|e| anyhow::anyhow!("{e}"))?;
    super::print_inert_warnings(&generated.inert_keys);

    let out_dir = out_dir.unwrap_or(Path::new("."));
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let name = &module.module.name;

    let js_path = out_dir.join(format!("{name}_js_api.js"));
    fs::write(&js_path, &generated.js)?;
    println!("Generated JS API → {}", js_path.display());

    if !js_only {
        let c_path = out_dir.join(format!("{name}_c_api.c"));
        fs::write(&c_path, &generated.c)?;
        println!("Generated C dispatcher → {}", c_path.display());

        let embedded_path = out_dir.join(format!("{name}_js_api.c"));
        fs::write(&embedded_path, &generated.embedded_js)?;
        println!("Generated embedded JS → {}", embedded_path.display());
    }

    println!(
        "Generated bindings for '{}' ({} functions)",
        module.extension_name(),
        module.functions.len()
    );

    Ok(())
}

//! Embedding generated JavaScript as a C string constant.
//!
//! The JS API module is compiled into the extension binary as a
//! NUL-terminated `const char` array of decimal character codes, named
//! `kSource_<module>_js_api` and referenced by the generated dispatcher's
//! `XW_Initialize`.

/// Emit a C translation unit embedding `js` for module `module_name`.
pub fn embed_js(module_name: &str, js: &str) -> String {
    let var = format!("kSource_{module_name}_js_api");
    let codes = js
        .bytes()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("extern const char {var}[];\nconst char {var}[] = {{ {codes}, 0 }};\n")
}

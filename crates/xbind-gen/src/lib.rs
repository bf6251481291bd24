//! Binding generation for synchronous-bridge extension modules.
//!
//! Turns a declarative module descriptor into the sources a native extension
//! needs to expose its functions to JavaScript: a JS API module whose stubs
//! proxy every call over a blocking message channel, a host-side C
//! dispatcher, and the JS text embedded as a C string. Functions flagged
//! custom are replaced by caller-supplied source, emitted verbatim.
//!
//! Generation is a pure function from descriptor to source text; every
//! failure aborts before any output is produced.
//!
//! ## Modules
//!
//! - [`descriptor`] — `<module>.toml` descriptor parsing
//! - [`custom`] — custom bindings file parsing
//! - [`resolve`] — stub/custom classification and validation
//! - [`emit_js`] — JS API module emission (bridge prelude + stubs)
//! - [`emit_c`] — host-side C dispatcher emission
//! - [`embed`] — JS-as-C-string embedding
//! - [`error`] — `GenError` taxonomy

pub mod custom;
pub mod descriptor;
pub mod embed;
pub mod emit_c;
pub mod emit_js;
pub mod error;
pub mod resolve;

// Re-export key types for convenience
pub use custom::{CustomBinding, CustomBindings};
pub use descriptor::{FunctionSpec, ModuleDescriptor};
pub use error::GenError;
pub use resolve::{resolve, Binding, Resolution};

/// All generated sources for one module.
#[derive(Debug, Clone)]
pub struct GeneratedModule {
    /// The JavaScript API module.
    pub js: String,
    /// The host-side C dispatcher.
    pub c: String,
    /// The JS module embedded as a C string constant.
    pub embedded_js: String,
    /// Custom binding keys that matched no declared function.
    pub inert_keys: Vec<String>,
}

/// Generate all sources for a module in one pass.
///
/// Resolution runs first, so any generation-time failure (duplicate names,
/// missing custom binding, invalid identifier) aborts with no partial
/// output.
pub fn generate<F>(
    module: &ModuleDescriptor,
    customs: &CustomBindings,
    is_custom: F,
) -> error::Result<GeneratedModule>
where
    F: Fn(&FunctionSpec) -> bool,
{
    let resolution = resolve::resolve(module, customs, is_custom)?;
    let js = emit_js::generate_js(&resolution);
    let c = emit_c::generate_c(module, &resolution);
    let embedded_js = embed::embed_js(&module.module.name, &js);

    Ok(GeneratedModule {
        js,
        c,
        embedded_js,
        inert_keys: resolution.inert_keys,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use xbind_bridge::SyncBridge;

    use super::*;

    #[test]
    fn generate_produces_all_three_sources() {
        let desc = ModuleDescriptor::parse(
            r#"
[module]
name = "geo"

[[functions]]
name = "getLocation"
"#,
        )
        .unwrap();
        let customs = CustomBindings::default();
        let generated = generate(&desc, &customs, |f| f.custom).unwrap();

        assert!(generated.js.contains("exports.getLocation"));
        assert!(generated.c.contains("handle_getLocation"));
        assert!(generated.embedded_js.contains("kSource_geo_js_api"));
        assert!(generated.inert_keys.is_empty());
    }

    #[test]
    fn generate_fails_atomically() {
        let desc = ModuleDescriptor::parse(
            r#"
[module]
name = "m"

[[functions]]
name = "dup"

[[functions]]
name = "dup"
"#,
        )
        .unwrap();
        let customs = CustomBindings::default();
        assert!(generate(&desc, &customs, |f| f.custom).is_err());
    }

    /// The semantics a generated stub encodes, driven end to end through the
    /// bridge runtime against a fake host: getLocation("high") sends
    /// `{"cmd":"getLocation","args":["high"]}` and returns the reply's data.
    #[test]
    fn stub_semantics_against_fake_host() {
        let desc = ModuleDescriptor::parse(
            r#"
[module]
name = "geo"

[[functions]]
name = "getLocation"
"#,
        )
        .unwrap();
        let customs = CustomBindings::default();
        let generated = generate(&desc, &customs, |f| f.custom).unwrap();
        assert!(generated
            .js
            .contains("sendSyncMessage({ cmd: 'getLocation', args: Array.prototype.slice.call(arguments, 0) })"));

        let host = |text: &str| {
            let req: Value = serde_json::from_str(text).unwrap();
            assert_eq!(req, json!({"cmd": "getLocation", "args": ["high"]}));
            r#"{"data":{"lat":1,"lng":2}}"#.to_string()
        };
        let bridge = SyncBridge::new(host);
        let ret = bridge.call("getLocation", vec![json!("high")]).unwrap();
        assert_eq!(ret, json!({"lat": 1, "lng": 2}));
    }
}

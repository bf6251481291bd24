//! Binding resolution.
//!
//! Classifies every declared function as either a generated stub or a
//! verbatim custom override — once, before any emission. The stub/custom
//! choice is fixed when the module is produced, so it is represented as a
//! tagged variant here rather than dispatched at runtime.

use std::collections::HashSet;

use crate::custom::CustomBindings;
use crate::descriptor::{FunctionSpec, ModuleDescriptor};
use crate::error::{GenError, Result};

/// The resolved binding for one declared function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding<'a> {
    /// Default stub forwarding the call across the synchronous bridge.
    Stub(&'a FunctionSpec),
    /// Caller-supplied source, emitted verbatim.
    Custom {
        name: &'a str,
        js: &'a str,
        c: Option<&'a str>,
    },
}

impl Binding<'_> {
    /// The declared function name this binding covers.
    pub fn name(&self) -> &str {
        match self {
            Binding::Stub(f) => &f.name,
            Binding::Custom { name, .. } => name,
        }
    }
}

/// Outcome of resolution: ordered bindings plus non-fatal warnings.
#[derive(Debug)]
pub struct Resolution<'a> {
    /// One binding per declared function, in descriptor order.
    pub bindings: Vec<Binding<'a>>,
    /// Custom binding keys that match no declared function. Inert — never
    /// emitted — but surfaced so the caller can warn rather than silently
    /// drop them.
    pub inert_keys: Vec<String>,
}

/// Validate a descriptor and classify every function.
///
/// The predicate decides stub vs. custom per function and is treated as
/// total over the functions list. Fails, producing no bindings, on:
///
/// - duplicate function names,
/// - a custom-flagged function with no matching bindings entry,
/// - a name that cannot be exported as a JavaScript identifier.
pub fn resolve<'a, F>(
    module: &'a ModuleDescriptor,
    customs: &'a CustomBindings,
    is_custom: F,
) -> Result<Resolution<'a>>
where
    F: Fn(&FunctionSpec) -> bool,
{
    let mut seen = HashSet::new();
    for f in &module.functions {
        if !seen.insert(f.name.as_str()) {
            return Err(GenError::DuplicateFunction {
                name: f.name.clone(),
            });
        }
        if !is_js_identifier(&f.name) {
            return Err(GenError::InvalidIdentifier {
                name: f.name.clone(),
            });
        }
    }

    let mut bindings = Vec::with_capacity(module.functions.len());
    for f in &module.functions {
        if is_custom(f) {
            match customs.get(&f.name) {
                Some(entry) => bindings.push(Binding::Custom {
                    name: &f.name,
                    js: &entry.js,
                    c: entry.c.as_deref(),
                }),
                None => {
                    return Err(GenError::MissingCustomBinding {
                        name: f.name.clone(),
                    })
                }
            }
        } else {
            bindings.push(Binding::Stub(f));
        }
    }

    let inert_keys = customs
        .bindings
        .keys()
        .filter(|k| !seen.contains(k.as_str()))
        .cloned()
        .collect();

    Ok(Resolution {
        bindings,
        inert_keys,
    })
}

/// Whether `name` can be emitted as a JavaScript export identifier.
///
/// Names are used verbatim — never sanitized — so anything outside the
/// identifier grammar (or a reserved word) is a generation-time failure.
fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$');
    starts_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        && !JS_RESERVED.contains(&name)
}

/// ECMAScript reserved words, including strict-mode and literal keywords.
const JS_RESERVED: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
    "implements", "import", "in", "instanceof", "interface", "let", "new", "null", "package",
    "private", "protected", "public", "return", "static", "super", "switch", "this", "throw",
    "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ModuleDescriptor;

    fn descriptor(toml: &str) -> ModuleDescriptor {
        ModuleDescriptor::parse(toml).unwrap()
    }

    #[test]
    fn all_stubs_in_descriptor_order() {
        let desc = descriptor(
            r#"
[module]
name = "geo"

[[functions]]
name = "getLocation"

[[functions]]
name = "clearWatch"
"#,
        );
        let customs = CustomBindings::default();
        let res = resolve(&desc, &customs, |f| f.custom).unwrap();

        assert_eq!(res.bindings.len(), 2);
        assert!(matches!(res.bindings[0], Binding::Stub(f) if f.name == "getLocation"));
        assert!(matches!(res.bindings[1], Binding::Stub(f) if f.name == "clearWatch"));
        assert!(res.inert_keys.is_empty());
    }

    #[test]
    fn custom_flag_selects_custom_binding() {
        let desc = descriptor(
            r#"
[module]
name = "m"

[[functions]]
name = "foo"
custom = true
"#,
        );
        let customs = CustomBindings::parse(
            r#"
[bindings.foo]
js = "exports.foo = () => 'bar';"
"#,
        )
        .unwrap();
        let res = resolve(&desc, &customs, |f| f.custom).unwrap();

        assert_eq!(res.bindings.len(), 1);
        match &res.bindings[0] {
            Binding::Custom { name, js, c } => {
                assert_eq!(*name, "foo");
                assert_eq!(*js, "exports.foo = () => 'bar';");
                assert!(c.is_none());
            }
            other => panic!("expected Custom, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_names_rejected() {
        let desc = descriptor(
            r#"
[module]
name = "m"

[[functions]]
name = "f"

[[functions]]
name = "f"
"#,
        );
        let customs = CustomBindings::default();
        let err = resolve(&desc, &customs, |f| f.custom).unwrap_err();
        assert!(matches!(err, GenError::DuplicateFunction { name } if name == "f"));
    }

    #[test]
    fn custom_without_entry_rejected() {
        let desc = descriptor(
            r#"
[module]
name = "m"

[[functions]]
name = "orphan"
custom = true
"#,
        );
        let customs = CustomBindings::default();
        let err = resolve(&desc, &customs, |f| f.custom).unwrap_err();
        assert!(matches!(err, GenError::MissingCustomBinding { name } if name == "orphan"));
    }

    #[test]
    fn invalid_identifier_rejected() {
        for bad in ["get-location", "1st", "a b", "", "delete"] {
            let toml = format!(
                r#"
[module]
name = "m"

[[functions]]
name = "{bad}"
"#
            );
            let desc = descriptor(&toml);
            let customs = CustomBindings::default();
            let err = resolve(&desc, &customs, |f| f.custom).unwrap_err();
            assert!(
                matches!(err, GenError::InvalidIdentifier { .. }),
                "expected InvalidIdentifier for {bad:?}"
            );
        }
    }

    #[test]
    fn valid_identifiers_accepted() {
        for good in ["getLocation", "_private", "$jquery", "snake_case2"] {
            assert!(is_js_identifier(good), "{good:?} should be valid");
        }
    }

    #[test]
    fn inert_custom_keys_surfaced() {
        let desc = descriptor(
            r#"
[module]
name = "m"

[[functions]]
name = "f"
"#,
        );
        let customs = CustomBindings::parse(
            r#"
[bindings.ghost]
js = "exports.ghost = function() {};"
"#,
        )
        .unwrap();
        let res = resolve(&desc, &customs, |f| f.custom).unwrap();
        assert_eq!(res.inert_keys, ["ghost"]);
        // The inert entry is never emitted as a binding.
        assert_eq!(res.bindings.len(), 1);
        assert!(matches!(res.bindings[0], Binding::Stub(_)));
    }

    #[test]
    fn external_predicate_overrides_flag() {
        // The predicate is supplied by the caller; the descriptor flag is
        // only the CLI's default.
        let desc = descriptor(
            r#"
[module]
name = "m"

[[functions]]
name = "f"
"#,
        );
        let customs = CustomBindings::parse(
            r#"
[bindings.f]
js = "exports.f = () => 1;"
"#,
        )
        .unwrap();
        let res = resolve(&desc, &customs, |_| true).unwrap();
        assert!(matches!(res.bindings[0], Binding::Custom { .. }));
    }

    #[test]
    fn empty_descriptor_resolves_empty() {
        let desc = descriptor(
            r#"
[module]
name = "empty"
"#,
        );
        let customs = CustomBindings::default();
        let res = resolve(&desc, &customs, |f| f.custom).unwrap();
        assert!(res.bindings.is_empty());
    }
}

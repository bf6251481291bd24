//! JavaScript API module emission.
//!
//! Output shape: one fixed bridge prelude, then one top-level export per
//! resolved binding, in descriptor order. Stubs capture their arguments
//! positionally — arity is never declared or checked — and return the
//! reply's `data` field unchanged.

use std::fmt::Write;

use crate::resolve::{Binding, Resolution};

/// Fixed prelude shared by every generated module.
///
/// Marshals a command and argument list to JSON, blocks on the host's
/// synchronous send primitive, and parses the reply text.
pub const JS_PRELUDE: &str = "\
function sendSyncMessage(msg) {
  return JSON.parse(extension.internal.sendSyncMessage(JSON.stringify(msg)));
}
";

/// Emit the JavaScript API module for a resolved binding list.
pub fn generate_js(resolution: &Resolution<'_>) -> String {
    let mut out = String::from(JS_PRELUDE);

    for binding in &resolution.bindings {
        out.push('\n');
        match binding {
            Binding::Stub(f) => emit_stub(&mut out, &f.name),
            Binding::Custom { js, .. } => {
                out.push_str(js);
                if !js.ends_with('\n') {
                    out.push('\n');
                }
            }
        }
    }

    out
}

fn emit_stub(out: &mut String, name: &str) {
    // String::write_fmt is infallible.
    let _ = write!(
        out,
        "exports.{name} = function() {{\n  \
         var ret = sendSyncMessage({{ cmd: '{name}', args: Array.prototype.slice.call(arguments, 0) }});\n  \
         return ret.data;\n\
         }};\n"
    );
}

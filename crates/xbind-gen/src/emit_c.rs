//! Host-side C dispatcher emission.
//!
//! For each module the generator emits one C translation unit that receives
//! serialized sync messages, routes `cmd` to a per-function handler, and
//! sets the reply. Stub handlers delegate to an extern
//! `json_object* <module>_<fn>(json_object* args)` implemented by the native
//! module; custom bindings contribute their C fragment verbatim (a fragment
//! is expected to define `handle_<fn>` itself).

use std::fmt::Write;

use crate::descriptor::ModuleDescriptor;
use crate::resolve::{Binding, Resolution};

/// Emit the C dispatcher for a resolved module.
pub fn generate_c(module: &ModuleDescriptor, resolution: &Resolution<'_>) -> String {
    let name = &module.module.name;
    let mut out = String::new();

    out.push_str("#include <assert.h>\n");
    out.push_str("#include <stdio.h>\n");
    out.push_str("#include <string.h>\n\n");
    out.push_str("#include \"XW_Extension.h\"\n");
    out.push_str("#include \"XW_Extension_SyncMessage.h\"\n\n");
    out.push_str("#include \"json-c/json.h\"\n\n");
    out.push_str("static XW_Extension xw_extension = 0;\n\n");
    out.push_str("const XW_CoreInterface* core_interface = NULL;\n");
    out.push_str("const XW_Internal_SyncMessagingInterface* sync_messaging_interface = NULL;\n\n");
    let _ = writeln!(out, "extern const char kSource_{name}_js_api[];");

    for binding in &resolution.bindings {
        match binding {
            Binding::Stub(f) => emit_handler(&mut out, name, &f.name),
            Binding::Custom { c: Some(c), .. } => {
                out.push('\n');
                out.push_str(c);
                if !c.ends_with('\n') {
                    out.push('\n');
                }
            }
            // A custom binding without a C fragment keeps its host side
            // elsewhere; it contributes no handler and no dispatch arm.
            Binding::Custom { c: None, .. } => {}
        }
    }

    emit_dispatch(&mut out, resolution);
    emit_initialize(&mut out, module);

    out
}

/// Handler for one generated stub: extract `args`, call the native
/// implementation, reply with `{"data": <result>}`.
fn emit_handler(out: &mut String, module_name: &str, fn_name: &str) {
    out.push('\n');
    let _ = writeln!(
        out,
        "extern json_object* {module_name}_{fn_name}(json_object* args);"
    );
    let _ = writeln!(
        out,
        "void handle_{fn_name}(XW_Instance instance, json_object* msg) {{"
    );
    out.push_str("  struct json_object* args = NULL;\n");
    out.push_str("  json_object_object_get_ex(msg, \"args\", &args);\n\n");
    let _ = writeln!(
        out,
        "  struct json_object* data = {module_name}_{fn_name}(args);"
    );
    out.push_str("  struct json_object* ret = json_object_new_object();\n");
    out.push_str(
        "  json_object_object_add(ret, \"data\", data ? data : json_object_new_object());\n",
    );
    out.push_str(
        "  sync_messaging_interface->SetSyncReply(instance, json_object_to_json_string(ret));\n",
    );
    out.push_str("  json_object_put(ret);\n");
    out.push_str("}\n");
}

fn emit_dispatch(out: &mut String, resolution: &Resolution<'_>) {
    out.push_str("\nvoid handle_sync_message(XW_Instance instance, const char* msg) {\n");
    out.push_str("  json_object* obj = json_tokener_parse(msg);\n");
    out.push_str("  assert(obj && json_object_is_type(obj, json_type_object));\n\n");
    out.push_str("  json_object* cmd_obj = NULL;\n");
    out.push_str("  json_object_object_get_ex(obj, \"cmd\", &cmd_obj);\n");
    out.push_str("  const char* cmd = json_object_get_string(cmd_obj);\n\n");

    let mut first = true;
    for binding in &resolution.bindings {
        // Only bindings that produced a handler get a dispatch arm.
        let dispatched = match binding {
            Binding::Stub(_) => true,
            Binding::Custom { c, .. } => c.is_some(),
        };
        if !dispatched {
            continue;
        }
        let keyword = if first { "if" } else { "else if" };
        let name = binding.name();
        let _ = writeln!(out, "  {keyword} (!strcmp(cmd, \"{name}\"))");
        let _ = writeln!(out, "    handle_{name}(instance, obj);");
        first = false;
    }

    if first {
        out.push_str("  fprintf(stderr, \"unknown command: %s\\n\", cmd);\n");
    } else {
        out.push_str("  else\n");
        out.push_str("    fprintf(stderr, \"unknown command: %s\\n\", cmd);\n");
    }

    out.push_str("\n  json_object_put(obj);\n");
    out.push_str("}\n");
}

fn emit_initialize(out: &mut String, module: &ModuleDescriptor) {
    let name = &module.module.name;
    let extension_name = module.extension_name();
    out.push_str(
        "\nint32_t XW_Initialize(XW_Extension extension, XW_GetInterface get_interface) {\n",
    );
    out.push_str("  xw_extension = extension;\n");
    out.push_str("  core_interface = get_interface(XW_CORE_INTERFACE);\n");
    let _ = writeln!(
        out,
        "  core_interface->SetExtensionName(extension, \"{extension_name}\");"
    );
    let _ = writeln!(
        out,
        "  core_interface->SetJavaScriptAPI(extension, kSource_{name}_js_api);"
    );
    out.push_str(
        "\n  sync_messaging_interface = get_interface(XW_INTERNAL_SYNC_MESSAGING_INTERFACE);\n",
    );
    out.push_str("  sync_messaging_interface->Register(extension, handle_sync_message);\n\n");
    out.push_str("  return XW_OK;\n");
    out.push_str("}\n");
}

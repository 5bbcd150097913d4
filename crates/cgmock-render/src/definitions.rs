//! The definitions document: the mock-pointer global and the trampolines.

use std::fmt::Write as _;

use cgmock_core::FunctionSignature;
use cgmock_core::spelling::declare;

use crate::mocker::Mocker;

pub(crate) fn render(mocker: &Mocker<'_>, header_ref: Option<&str>) -> String {
    let identity = mocker.identity();
    let mut out = String::new();

    if let Some(header) = header_ref {
        let _ = writeln!(out, "#include \"{header}\"\n");
    }

    let _ = writeln!(out, "namespace {} {{\n", identity.namespace());
    let _ = writeln!(out, "{}* {} = nullptr;\n", identity.mock(), identity.mock_object());
    let _ = writeln!(out, "}} // namespace {}", identity.namespace());

    let target = identity.qualified_mock_object();
    for function in mocker.functions() {
        out.push('\n');
        let method = mocker.options().method_name(&function.name);
        trampoline(&mut out, function, &target, &method);
    }

    out
}

/// `extern "C" R name(T0 _0, T1 _1) { [return ]Lib::Obj->method(_0, _1); }`
fn trampoline(out: &mut String, function: &FunctionSignature, target: &str, method: &str) {
    let mut parameters: Vec<String> = function
        .parameter_types
        .iter()
        .enumerate()
        .map(|(idx, ty)| declare(ty, &format!("_{idx}")))
        .collect();
    // Keep the C declaration compatible with the forward declaration.
    if function.parameter_list().ends_with("...)") {
        parameters.push("...".to_string());
    }
    let arguments: Vec<String> = (0..function.arity()).map(|idx| format!("_{idx}")).collect();

    let declarator = format!("{}({})", function.name, parameters.join(", "));
    let _ = writeln!(
        out,
        "extern \"C\" {}",
        declare(&function.return_type, &declarator)
    );
    out.push_str("{\n");
    let keyword = if function.returns_void() { "" } else { "return " };
    let _ = writeln!(out, "    {keyword}{target}->{method}({});", arguments.join(", "));
    out.push_str("}\n");
}

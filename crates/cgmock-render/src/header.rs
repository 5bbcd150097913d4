//! The header document.

use std::fmt::Write as _;

use cgmock_core::spelling::declare;
use cgmock_core::{FunctionSignature, MockStyle};

use crate::mocker::Mocker;
use crate::options::include_directive;

const INDENT: &str = "    ";

pub(crate) fn render(mocker: &Mocker<'_>) -> String {
    let identity = mocker.identity();
    let options = mocker.options();
    let mut out = String::new();

    out.push_str("#pragma once\n\n");
    if !options.includes.is_empty() {
        for include in &options.includes {
            let _ = writeln!(out, "{}", include_directive(include));
        }
        out.push('\n');
    }

    let _ = writeln!(out, "namespace {} {{\n", identity.namespace());

    // ── Interface ──────────────────────────────────────────────────
    let interface = identity.interface();
    let _ = writeln!(out, "class {interface} {{");
    out.push_str("public:\n");
    let _ = writeln!(out, "{INDENT}virtual ~{interface}() {{}}");
    for function in mocker.functions() {
        let method = declare(
            &function.return_type,
            &options.method_name(function.display_name.as_str()),
        );
        let _ = writeln!(out, "{INDENT}virtual {method} = 0;");
    }
    out.push_str("};\n\n");

    // ── Mock ───────────────────────────────────────────────────────
    let _ = writeln!(out, "class {} : public {interface} {{", identity.mock());
    out.push_str("public:\n");
    for function in mocker.functions() {
        let method = options.method_name(&function.name);
        let _ = writeln!(out, "{INDENT}{}", mock_method(function, &method, options.mock_style));
    }
    out.push_str("};\n\n");

    let _ = writeln!(out, "extern {}* {};\n", identity.mock(), identity.mock_object());

    // ── Fixture ────────────────────────────────────────────────────
    let member = &options.mock_member;
    let _ = writeln!(out, "class {} : public ::testing::Test {{", options.fixture_name);
    out.push_str("protected:\n");
    let _ = writeln!(
        out,
        "{INDENT}void SetUp() override {{ {} = &{member}; }}",
        identity.mock_object()
    );
    let _ = writeln!(
        out,
        "{INDENT}void TearDown() override {{ {} = nullptr; }}\n",
        identity.mock_object()
    );
    let _ = writeln!(out, "{INDENT}{} {member};", identity.mock());
    out.push_str("};\n\n");

    let _ = writeln!(out, "}} // namespace {}", identity.namespace());

    // ── C forward declarations ─────────────────────────────────────
    if !mocker.functions().is_empty() {
        out.push('\n');
    }
    for function in mocker.functions() {
        let _ = writeln!(
            out,
            "extern \"C\" {};",
            declare(&function.return_type, &function.display_name)
        );
    }

    out
}

fn mock_method(function: &FunctionSignature, method: &str, style: MockStyle) -> String {
    match style {
        MockStyle::Legacy => format!(
            "MOCK_METHOD{}({method}, {});",
            function.arity(),
            function.signature
        ),
        MockStyle::Modern => {
            // An unprotected comma would split the macro argument.
            let ret = if function.return_type.contains(',') {
                format!("({})", function.return_type)
            } else {
                function.return_type.clone()
            };
            format!(
                "MOCK_METHOD({ret}, {method}, {}, (override));",
                function.parameter_list()
            )
        }
    }
}

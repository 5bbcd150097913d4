//! Type spelling from declaration specifiers and (possibly nested) declarators.
//!
//! A C declarator is read inside out: the operator closest to the name
//! determines the declared entity's type. [`unwind`] records the operators
//! outermost first, so the last entry is the innermost one and [`spell`]
//! applies them in reverse.

use ast_grep_core::Node;
use cgmock_core::spelling::normalize_whitespace;

use crate::frontend::ParamDecl;

pub(super) enum DeclaratorOp {
    /// `*` with its qualifiers (`"const"` for `* const`).
    Pointer(String),
    /// `&` or `&&`.
    Reference(String),
    /// `[size]`, size possibly empty.
    Array(String),
    Function(ParameterList),
}

pub(super) struct ParameterList {
    pub(super) parameters: Vec<ParamDecl>,
    pub(super) variadic: bool,
}

impl ParameterList {
    fn spelled(&self) -> String {
        let mut types: Vec<&str> = self
            .parameters
            .iter()
            .map(|p| p.type_spelling.as_str())
            .collect();
        if self.variadic {
            types.push("...");
        }
        types.join(", ")
    }
}

pub(super) enum DeclaratorName {
    Anonymous,
    Plain(String),
    /// `ns::f`, `operator+`, `~T` and other names no C function can have.
    Qualified,
}

pub(super) struct Unwound {
    pub(super) name: DeclaratorName,
    pub(super) ops: Vec<DeclaratorOp>,
}

pub(super) fn is_declarator(kind: &str) -> bool {
    matches!(
        kind,
        "identifier"
            | "field_identifier"
            | "qualified_identifier"
            | "operator_name"
            | "destructor_name"
            | "template_function"
            | "pointer_declarator"
            | "abstract_pointer_declarator"
            | "reference_declarator"
            | "abstract_reference_declarator"
            | "array_declarator"
            | "abstract_array_declarator"
            | "function_declarator"
            | "abstract_function_declarator"
            | "parenthesized_declarator"
            | "abstract_parenthesized_declarator"
            | "attributed_declarator"
            | "init_declarator"
    )
}

fn is_type_specifier(kind: &str) -> bool {
    matches!(
        kind,
        "primitive_type"
            | "type_identifier"
            | "sized_type_specifier"
            | "struct_specifier"
            | "union_specifier"
            | "enum_specifier"
            | "class_specifier"
            | "macro_type_specifier"
            | "qualified_identifier"
            | "template_type"
            | "placeholder_type_specifier"
            | "decltype"
    )
}

// ── Specifiers ─────────────────────────────────────────────────────

/// Spell the base type of a declaration-like node from its children.
///
/// Returns the spelling and the index of the first declarator child.
/// Storage classes and attributes are dropped; a declaration without a
/// type specifier has implicit `int`.
pub(super) fn split_specifiers<D: ast_grep_core::Doc>(children: &[Node<D>]) -> (String, usize) {
    let mut qualifiers: Vec<String> = Vec::new();
    let mut specifier: Option<String> = None;
    let mut end = children.len();

    for (idx, child) in children.iter().enumerate() {
        let kind = child.kind();
        let kind = kind.as_ref();
        if specifier.is_none() && is_type_specifier(kind) {
            specifier = Some(spell_specifier(child));
        } else if is_declarator(kind) {
            end = idx;
            break;
        } else if kind == "type_qualifier" {
            let text = child.text();
            if matches!(text.as_ref(), "const" | "volatile" | "_Atomic")
                && !qualifiers.iter().any(|q| q == text.as_ref())
            {
                qualifiers.push(text.to_string());
            }
        }
    }

    let specifier = specifier.unwrap_or_else(|| "int".to_string());
    let base = if qualifiers.is_empty() {
        specifier
    } else {
        format!("{} {specifier}", qualifiers.join(" "))
    };
    (base, end)
}

fn spell_specifier<D: ast_grep_core::Doc>(node: &Node<D>) -> String {
    let kind = node.kind();
    if matches!(
        kind.as_ref(),
        "struct_specifier" | "union_specifier" | "enum_specifier" | "class_specifier"
    ) && let (Some(keyword), Some(name)) = (node.children().next(), node.field("name"))
    {
        return format!("{} {}", keyword.text(), name.text());
    }
    normalize_whitespace(node.text().as_ref())
}

// ── Declarators ────────────────────────────────────────────────────

pub(super) fn unwind<D: ast_grep_core::Doc>(node: &Node<D>) -> Unwound {
    let mut ops = Vec::new();
    let name = unwind_into(node, &mut ops);
    Unwound { name, ops }
}

fn unwind_into<D: ast_grep_core::Doc>(
    node: &Node<D>,
    ops: &mut Vec<DeclaratorOp>,
) -> DeclaratorName {
    let inner = match node.kind().as_ref() {
        "identifier" | "field_identifier" => {
            return DeclaratorName::Plain(node.text().to_string());
        }
        "qualified_identifier" | "operator_name" | "destructor_name" | "template_function" => {
            return DeclaratorName::Qualified;
        }
        "pointer_declarator" | "abstract_pointer_declarator" => {
            let qualifiers: Vec<String> = node
                .children()
                .filter(|c| c.kind().as_ref() == "type_qualifier")
                .map(|c| c.text().to_string())
                .collect();
            ops.push(DeclaratorOp::Pointer(qualifiers.join(" ")));
            node.field("declarator")
        }
        "reference_declarator" | "abstract_reference_declarator" => {
            let token = node
                .children()
                .next()
                .map_or_else(|| "&".to_string(), |t| t.text().to_string());
            ops.push(DeclaratorOp::Reference(token));
            first_declarator_child(node)
        }
        "array_declarator" | "abstract_array_declarator" => {
            let size = node
                .field("size")
                .map(|s| normalize_whitespace(s.text().as_ref()))
                .unwrap_or_default();
            ops.push(DeclaratorOp::Array(size));
            node.field("declarator")
        }
        "function_declarator" | "abstract_function_declarator" => {
            let list = node.field("parameters").map_or(
                ParameterList {
                    parameters: Vec::new(),
                    variadic: false,
                },
                |params| parameter_list(&params),
            );
            ops.push(DeclaratorOp::Function(list));
            node.field("declarator")
        }
        "init_declarator" => node.field("declarator"),
        "parenthesized_declarator" | "abstract_parenthesized_declarator" | "attributed_declarator" => {
            first_declarator_child(node)
        }
        _ => None,
    };
    inner.map_or(DeclaratorName::Anonymous, |inner| unwind_into(&inner, ops))
}

fn first_declarator_child<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    node.children().find(|c| is_declarator(c.kind().as_ref()))
}

/// Spell the type obtained by applying `ops` to `base`, with no name.
pub(super) fn spell(base: &str, ops: &[DeclaratorOp]) -> String {
    let mut abstract_declarator = String::new();
    for op in ops.iter().rev() {
        let s = abstract_declarator;
        abstract_declarator = match op {
            DeclaratorOp::Pointer(qualifiers) if qualifiers.is_empty() => format!("*{s}"),
            DeclaratorOp::Pointer(qualifiers) if s.is_empty() => format!("*{qualifiers}"),
            DeclaratorOp::Pointer(qualifiers) => format!("*{qualifiers} {s}"),
            DeclaratorOp::Reference(token) => format!("{token}{s}"),
            DeclaratorOp::Array(size) => format!("{}[{size}]", group(s)),
            DeclaratorOp::Function(list) => format!("{}({})", group(s), list.spelled()),
        };
    }
    if abstract_declarator.is_empty() {
        base.to_string()
    } else {
        format!("{base} {abstract_declarator}")
    }
}

/// Parenthesize a pointer so a following `[]` or `()` binds to the pointee.
fn group(s: String) -> String {
    if s.starts_with(['*', '&']) {
        format!("({s})")
    } else {
        s
    }
}

// ── Parameters ─────────────────────────────────────────────────────

pub(super) fn parameter_list<D: ast_grep_core::Doc>(node: &Node<D>) -> ParameterList {
    let mut list = ParameterList {
        parameters: Vec::new(),
        variadic: false,
    };
    for child in node.children() {
        match child.kind().as_ref() {
            "parameter_declaration" | "optional_parameter_declaration" => {
                list.parameters.push(parameter(&child));
            }
            "variadic_parameter" | "..." => list.variadic = true,
            _ => {}
        }
    }
    list
}

/// A parameter's type spelling, with arrays and functions decayed to pointers.
fn parameter<D: ast_grep_core::Doc>(node: &Node<D>) -> ParamDecl {
    let children: Vec<_> = node.children().collect();
    let (base, start) = split_specifiers(&children);
    let unwound = children[start..]
        .iter()
        .find(|c| is_declarator(c.kind().as_ref()))
        .map_or(
            Unwound {
                name: DeclaratorName::Anonymous,
                ops: Vec::new(),
            },
            unwind,
        );

    let mut ops = unwound.ops;
    match ops.last() {
        Some(DeclaratorOp::Array(_)) => {
            ops.pop();
            ops.push(DeclaratorOp::Pointer(String::new()));
        }
        Some(DeclaratorOp::Function(_)) => ops.push(DeclaratorOp::Pointer(String::new())),
        _ => {}
    }

    ParamDecl {
        type_spelling: spell(&base, &ops),
        name: match unwound.name {
            DeclaratorName::Plain(name) => Some(name),
            DeclaratorName::Anonymous | DeclaratorName::Qualified => None,
        },
    }
}

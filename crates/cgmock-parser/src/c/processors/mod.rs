//! Top-level walk of a C/C++ translation unit.

mod declarations;
mod declarators;
mod preproc;

use std::collections::{BTreeMap, BTreeSet};

use ast_grep_core::Node;

use crate::frontend::Declaration;

use declarations::{process_declaration, process_function_definition};
use preproc::{process_conditional, process_preproc_call, process_preproc_def};

/// Macros known to be defined at the current point of the walk, with the
/// integer values of those defined as a plain literal.
pub(super) struct MacroState {
    defined: BTreeSet<String>,
    values: BTreeMap<String, i64>,
}

impl MacroState {
    pub(super) const fn new(defined: BTreeSet<String>) -> Self {
        Self {
            defined,
            values: BTreeMap::new(),
        }
    }

    fn is_defined(&self, name: &str) -> bool {
        self.defined.contains(name)
    }

    /// `None` for undefined macros and for values that are not a literal.
    fn value(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    fn define(&mut self, name: &str, value: Option<i64>) {
        self.defined.insert(name.to_string());
        match value {
            Some(value) => {
                self.values.insert(name.to_string(), value);
            }
            None => {
                self.values.remove(name);
            }
        }
    }

    fn undefine(&mut self, name: &str) {
        self.defined.remove(name);
        self.values.remove(name);
    }
}

/// Collect the unit's top-level declarations in source order.
pub(super) fn collect_declarations<D: ast_grep_core::Doc>(
    root: &Node<D>,
    macros: &mut MacroState,
    recover: bool,
) -> Vec<Declaration> {
    let mut declarations = Vec::new();
    let children: Vec<_> = root.children().collect();
    walk_nodes(&children, &mut declarations, macros, recover);
    declarations
}

// ── Node dispatcher ────────────────────────────────────────────────

fn walk_nodes<D: ast_grep_core::Doc>(
    nodes: &[Node<D>],
    out: &mut Vec<Declaration>,
    macros: &mut MacroState,
    recover: bool,
) {
    for node in nodes {
        dispatch(node, out, macros, recover);
    }
}

fn dispatch<D: ast_grep_core::Doc>(
    node: &Node<D>,
    out: &mut Vec<Declaration>,
    macros: &mut MacroState,
    recover: bool,
) {
    let kind = node.kind();
    match kind.as_ref() {
        "function_definition" => out.push(process_function_definition(node)),
        "declaration" => out.extend(process_declaration(node)),
        "linkage_specification" => process_linkage_specification(node, out, macros, recover),
        "preproc_def" | "preproc_function_def" => {
            process_preproc_def(node, macros);
            out.push(other(node));
        }
        "preproc_call" => {
            process_preproc_call(node, macros);
            out.push(other(node));
        }
        "preproc_ifdef" | "preproc_if" => process_conditional(node, out, macros, recover),
        "ERROR" if recover => {
            let children: Vec<_> = node.children().collect();
            walk_nodes(&children, out, macros, recover);
        }
        // Comments, stray punctuation and directive tokens.
        "comment" => {}
        k if k.starts_with(|c: char| c.is_ascii_lowercase()) => out.push(other(node)),
        _ => {}
    }
}

/// `extern "C" { ... }` or `extern "C" int f(void);`
fn process_linkage_specification<D: ast_grep_core::Doc>(
    node: &Node<D>,
    out: &mut Vec<Declaration>,
    macros: &mut MacroState,
    recover: bool,
) {
    let is_c_linkage = node
        .field("value")
        .is_some_and(|value| value.text().as_ref() == "\"C\"");
    if !is_c_linkage {
        out.push(other(node));
        return;
    }
    let Some(body) = node.field("body") else {
        return;
    };
    if body.kind().as_ref() == "declaration_list" {
        let children: Vec<_> = body.children().collect();
        walk_nodes(&children, out, macros, recover);
    } else {
        dispatch(&body, out, macros, recover);
    }
}

// ── Shared helpers ─────────────────────────────────────────────────

pub(super) fn other<D: ast_grep_core::Doc>(node: &Node<D>) -> Declaration {
    Declaration::Other {
        kind: node.kind().to_string(),
        line: line_of(node),
    }
}

/// 1-based line of the node's first byte.
pub(super) fn line_of<D: ast_grep_core::Doc>(node: &Node<D>) -> u32 {
    u32::try_from(node.start_pos().line())
        .unwrap_or(u32::MAX)
        .saturating_add(1)
}

/// 1-based line of the first `ERROR` node, if any.
pub(super) fn first_error_line<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<u32> {
    if node.kind().as_ref() == "ERROR" {
        return Some(line_of(node));
    }
    node.children().find_map(|child| first_error_line(&child))
}

//! Function definitions and declarations.

use ast_grep_core::Node;

use crate::frontend::{Declaration, FunctionDecl};

use super::declarators::{
    DeclaratorName, DeclaratorOp, Unwound, is_declarator, spell, split_specifiers, unwind,
};
use super::{line_of, other};

pub(super) fn process_function_definition<D: ast_grep_core::Doc>(node: &Node<D>) -> Declaration {
    let children: Vec<_> = node.children().collect();
    let (base, start) = split_specifiers(&children);
    children[start..]
        .iter()
        .find(|c| is_declarator(c.kind().as_ref()))
        .and_then(|declarator| function_from(&base, declarator, node, true))
        .map_or_else(|| other(node), Declaration::Function)
}

/// A declaration yields one function per function declarator
/// (`int f(void), g(int);` declares two), or a single `Other`.
///
/// Function pointer variables such as `void (*cb)(int);` are not functions.
pub(super) fn process_declaration<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<Declaration> {
    let children: Vec<_> = node.children().collect();
    let (base, start) = split_specifiers(&children);
    let functions: Vec<_> = children[start..]
        .iter()
        .filter(|c| is_declarator(c.kind().as_ref()))
        .filter_map(|declarator| function_from(&base, declarator, node, false))
        .map(Declaration::Function)
        .collect();
    if functions.is_empty() {
        vec![other(node)]
    } else {
        functions
    }
}

fn function_from<D: ast_grep_core::Doc>(
    base: &str,
    declarator: &Node<D>,
    node: &Node<D>,
    is_definition: bool,
) -> Option<FunctionDecl> {
    let Unwound { name, mut ops } = unwind(declarator);
    let DeclaratorName::Plain(name) = name else {
        return None;
    };
    // The operator closest to the name must be the parameter list.
    let Some(DeclaratorOp::Function(list)) = ops.pop() else {
        return None;
    };
    Some(FunctionDecl {
        name,
        return_type: spell(base, &ops),
        parameters: list.parameters,
        variadic: list.variadic,
        is_definition,
        line: line_of(node),
    })
}

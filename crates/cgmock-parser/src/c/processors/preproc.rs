//! Preprocessor directives that steer the walk: `#define`, `#undef` and
//! conditional blocks.

use ast_grep_core::Node;

use crate::frontend::Declaration;

use super::{MacroState, walk_nodes};

// ── Macro definitions ──────────────────────────────────────────────

pub(super) fn process_preproc_def<D: ast_grep_core::Doc>(node: &Node<D>, macros: &mut MacroState) {
    if let Some(name) = node.field("name") {
        let value = node
            .field("value")
            .and_then(|value| macro_value(value.text().as_ref()));
        macros.define(name.text().as_ref(), value);
    }
}

/// The integer a `#define` body spells, ignoring a trailing line comment.
fn macro_value(body: &str) -> Option<i64> {
    let body = body.split_once("//").map_or(body, |(code, _)| code).trim();
    let body = body
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .map_or(body, str::trim);
    parse_integer(body)
}

/// `#undef NAME` is a generic `preproc_call` in the grammar.
pub(super) fn process_preproc_call<D: ast_grep_core::Doc>(node: &Node<D>, macros: &mut MacroState) {
    let is_undef = node
        .field("directive")
        .is_some_and(|directive| directive.text().as_ref() == "#undef");
    if !is_undef {
        return;
    }
    if let Some(argument) = node.field("argument") {
        macros.undefine(argument.text().trim());
    }
}

// ── Conditional blocks ─────────────────────────────────────────────

/// Walk the branch of `#if`/`#ifdef`/`#ifndef` (and their `#elif*`
/// alternatives) selected by the known macros. A condition that cannot be
/// decided walks every branch.
pub(super) fn process_conditional<D: ast_grep_core::Doc>(
    node: &Node<D>,
    out: &mut Vec<Declaration>,
    macros: &mut MacroState,
    recover: bool,
) {
    let children: Vec<_> = node.children().collect();
    let verdict = branch_verdict(node, &children, macros);

    // children[0] is the directive, children[1] the condition or macro name.
    let (alternatives, body): (Vec<_>, Vec<_>) = children
        .into_iter()
        .skip(2)
        .partition(|child| is_alternative(child.kind().as_ref()));

    if verdict != Some(false) {
        walk_nodes(&body, out, macros, recover);
    }
    if verdict != Some(true) {
        for alternative in &alternatives {
            process_alternative(alternative, out, macros, recover);
        }
    }
}

fn process_alternative<D: ast_grep_core::Doc>(
    node: &Node<D>,
    out: &mut Vec<Declaration>,
    macros: &mut MacroState,
    recover: bool,
) {
    if node.kind().as_ref() == "preproc_else" {
        let body: Vec<_> = node.children().skip(1).collect();
        walk_nodes(&body, out, macros, recover);
    } else {
        process_conditional(node, out, macros, recover);
    }
}

fn is_alternative(kind: &str) -> bool {
    matches!(kind, "preproc_else" | "preproc_elif" | "preproc_elifdef")
}

/// `Some(taken)` when the branch condition is decidable.
fn branch_verdict<D: ast_grep_core::Doc>(
    node: &Node<D>,
    children: &[Node<D>],
    macros: &MacroState,
) -> Option<bool> {
    match node.kind().as_ref() {
        "preproc_ifdef" | "preproc_elifdef" => {
            let directive = children.first()?.kind();
            let name = node.field("name")?;
            let defined = macros.is_defined(name.text().as_ref());
            Some(if directive.ends_with("ndef") {
                !defined
            } else {
                defined
            })
        }
        "preproc_if" | "preproc_elif" => evaluate(&node.field("condition")?, macros),
        _ => None,
    }
}

/// Evaluate the subset of `#if` expressions that needs no macro expansion.
fn evaluate<D: ast_grep_core::Doc>(expr: &Node<D>, macros: &MacroState) -> Option<bool> {
    integer_value(expr, macros).map(|value| value != 0)
}

fn integer_value<D: ast_grep_core::Doc>(expr: &Node<D>, macros: &MacroState) -> Option<i64> {
    match expr.kind().as_ref() {
        "number_literal" => parse_integer(expr.text().as_ref()),
        "preproc_defined" => {
            let name = expr
                .children()
                .find(|child| child.kind().as_ref() == "identifier")?;
            Some(i64::from(macros.is_defined(name.text().as_ref())))
        }
        // An undefined identifier evaluates to 0.
        "identifier" => {
            let name = expr.text();
            if macros.is_defined(name.as_ref()) {
                macros.value(name.as_ref())
            } else {
                Some(0)
            }
        }
        // `(` expr `)`
        "parenthesized_expression" => expr
            .children()
            .nth(1)
            .and_then(|inner| integer_value(&inner, macros)),
        "unary_expression" => {
            let operator = expr.field("operator")?;
            let operand = integer_value(&expr.field("argument")?, macros)?;
            match operator.text().as_ref() {
                "!" => Some(i64::from(operand == 0)),
                "-" => operand.checked_neg(),
                "+" => Some(operand),
                _ => None,
            }
        }
        "binary_expression" => {
            let operator = expr.field("operator")?;
            let left = integer_value(&expr.field("left")?, macros);
            let right = integer_value(&expr.field("right")?, macros);
            match operator.text().as_ref() {
                "&&" => match (left, right) {
                    (Some(0), _) | (_, Some(0)) => Some(0),
                    (Some(_), Some(_)) => Some(1),
                    _ => None,
                },
                "||" => match (left, right) {
                    (Some(l), _) if l != 0 => Some(1),
                    (_, Some(r)) if r != 0 => Some(1),
                    (Some(_), Some(_)) => Some(0),
                    _ => None,
                },
                other => apply(other, left?, right?),
            }
        }
        _ => None,
    }
}

fn apply(operator: &str, left: i64, right: i64) -> Option<i64> {
    match operator {
        "==" => Some(i64::from(left == right)),
        "!=" => Some(i64::from(left != right)),
        "<" => Some(i64::from(left < right)),
        ">" => Some(i64::from(left > right)),
        "<=" => Some(i64::from(left <= right)),
        ">=" => Some(i64::from(left >= right)),
        "+" => left.checked_add(right),
        "-" => left.checked_sub(right),
        "*" => left.checked_mul(right),
        _ => None,
    }
}

fn parse_integer(literal: &str) -> Option<i64> {
    let digits = literal.trim_end_matches(['u', 'U', 'l', 'L']);
    if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        i64::from_str_radix(hex, 16).ok()
    } else if digits.len() > 1
        && let Some(octal) = digits.strip_prefix('0')
    {
        i64::from_str_radix(octal, 8).ok()
    } else {
        digits.parse().ok()
    }
}

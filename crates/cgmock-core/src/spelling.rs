//! Helpers for writing C declarations from type spellings.

/// Place `declarator` into the type spelling `ty` the way a C declaration does.
///
/// `declarator` can be a name (`"_0"`), a name with a parameter list
/// (`"foo(int)"`) or a bare parameter list (`"(int)"`). Function-pointer and
/// array-pointer spellings receive the declarator inside their `(*)` hole.
///
/// ```
/// use cgmock_core::spelling::declare;
///
/// assert_eq!(declare("int", "_0"), "int _0");
/// assert_eq!(declare("char *", "_1"), "char *_1");
/// assert_eq!(declare("void (*)(int)", "cb"), "void (*cb)(int)");
/// assert_eq!(declare("int", "(double)"), "int (double)");
/// ```
#[must_use]
pub fn declare(ty: &str, declarator: &str) -> String {
    let ty = ty.trim();
    if declarator.is_empty() {
        return ty.to_string();
    }
    if let Some(hole) = pointer_hole(ty) {
        let (head, tail) = ty.split_at(hole);
        let sep = if head.ends_with(is_identifier_char) {
            " "
        } else {
            ""
        };
        return format!("{head}{sep}{declarator}{tail}");
    }
    if ty.ends_with(['*', '&']) {
        format!("{ty}{declarator}")
    } else {
        format!("{ty} {declarator}")
    }
}

/// Byte offset of the `)` closing the innermost `(*...)` group of a spelling.
fn pointer_hole(ty: &str) -> Option<usize> {
    ty.match_indices(')').find_map(|(close, _)| {
        let open = ty[..close].rfind('(')?;
        let inner = &ty[open + 1..close];
        let is_hole = inner.starts_with(['*', '&'])
            && inner
                .chars()
                .all(|c| matches!(c, '*' | '&' | ' ') || is_identifier_char(c));
        is_hole.then_some(close)
    })
}

const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whether `name` is a valid C identifier.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(is_identifier_char)
}

/// Collapse runs of whitespace into single spaces.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

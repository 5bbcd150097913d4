//! The normalized model of one C function declaration.

use serde::{Deserialize, Serialize};

/// One discovered function, as consumed by the renderer.
///
/// Type strings follow the libclang spelling convention: `"int (double, char *)"`
/// for `signature`, `"const char *"` for a pointer type, `"void (*)(int)"` for a
/// function pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    /// Bare identifier; names the mock method and the trampoline.
    pub name: String,
    /// Full function type, passed verbatim to the mock declaration.
    pub signature: String,
    /// Return type; `"void"` suppresses the `return` in trampolines.
    pub return_type: String,
    /// Name followed by the declared parameter list, e.g. `"foo(int, double)"`.
    pub display_name: String,
    /// One type per parameter that drives the trampoline's arity.
    pub parameter_types: Vec<String>,
}

impl FunctionSignature {
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }

    #[must_use]
    pub fn returns_void(&self) -> bool {
        self.return_type == "void"
    }

    /// The parenthesized parameter list of [`display_name`](Self::display_name).
    ///
    /// Falls back to `"()"` when the display form does not start with the name.
    #[must_use]
    pub fn parameter_list(&self) -> &str {
        self.display_name
            .strip_prefix(self.name.as_str())
            .filter(|rest| rest.starts_with('('))
            .unwrap_or("()")
    }
}

/// Names that occur more than once, in order of their second occurrence.
///
/// Duplicates render invalid C++; callers decide how loudly to complain.
#[must_use]
pub fn duplicate_names(functions: &[FunctionSignature]) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    let mut duplicates = Vec::new();
    for function in functions {
        let name = function.name.as_str();
        if !seen.insert(name) && !duplicates.contains(&name) {
            duplicates.push(name);
        }
    }
    duplicates
}

use cgmock_core::{FunctionSignature, LibraryIdentity, MockStyle};
use rstest::fixture;

use super::*;


fn signature(name: &str, ret: &str, declared: &[&str], parameter_types: &[&str]) -> FunctionSignature {
    let joined = declared.join(", ");
    let display: Vec<&str> = declared.iter().copied().filter(|ty| *ty != "void").collect();
    FunctionSignature {
        name: name.to_string(),
        signature: format!("{ret} ({joined})"),
        return_type: ret.to_string(),
        display_name: format!("{name}({})", display.join(", ")),
        parameter_types: parameter_types.iter().map(ToString::to_string).collect(),
    }
}

/// `int add(int, int);` and `void reset(void);`
#[fixture]
fn sample() -> Vec<FunctionSignature> {
    vec![
        signature("add", "int", &["int", "int"], &["int", "int"]),
        signature("reset", "void", &["void"], &[]),
    ]
}

fn mocker<'a>(lib: &str, functions: &'a [FunctionSignature]) -> Mocker<'a> {
    Mocker::for_library(lib, functions).expect("valid library name")
}

fn with_prefix(prefix: &str) -> RenderOptions {
    RenderOptions {
        method_prefix: prefix.to_string(),
        ..RenderOptions::default()
    }
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

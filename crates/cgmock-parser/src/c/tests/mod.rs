use super::*;
use crate::frontend::FunctionDecl;


fn parse_with(path: &str, source: &str, args: &[&str]) -> CUnit {
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    CFrontend::new()
        .parse_source(path, source, &args)
        .expect("parse should succeed")
}

fn functions_in(unit: &CUnit) -> Vec<FunctionDecl> {
    unit.declarations()
        .iter()
        .filter_map(Declaration::as_function)
        .cloned()
        .collect()
}

fn functions(source: &str) -> Vec<FunctionDecl> {
    functions_in(&parse_with("test.h", source, &[]))
}

fn names(functions: &[FunctionDecl]) -> Vec<&str> {
    functions.iter().map(|f| f.name.as_str()).collect()
}

fn find_by_name<'a>(functions: &'a [FunctionDecl], name: &str) -> &'a FunctionDecl {
    functions
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("should find function '{name}', available: {:?}", names(functions)))
}

fn parameter_types(function: &FunctionDecl) -> Vec<&str> {
    function
        .parameters
        .iter()
        .map(|p| p.type_spelling.as_str())
        .collect()
}

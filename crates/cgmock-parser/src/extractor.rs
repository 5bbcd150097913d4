//! Frontend-agnostic extraction of [`FunctionSignature`]s.
//!
//! Each translation unit contributes its function declarations in source
//! order; files are concatenated in the order they were given. Definitions
//! count like prototypes, and nothing is deduplicated.

use std::path::Path;

use cgmock_core::spelling::declare;
use cgmock_core::{FunctionSignature, NameFilter, ParameterPolicy};

use crate::error::ParserError;
use crate::frontend::{Frontend, FunctionDecl, TranslationUnit};

/// Extract the accepted functions of one parsed unit.
pub fn extract_functions<U: TranslationUnit + ?Sized>(
    unit: &U,
    filter: &NameFilter,
    policy: ParameterPolicy,
) -> Vec<FunctionSignature> {
    let declarations = unit.declarations();
    let functions: Vec<FunctionSignature> = declarations
        .iter()
        .filter_map(|declaration| declaration.as_function())
        .filter(|function| {
            let accepted = filter.accepts(&function.name);
            if !accepted {
                tracing::debug!(name = %function.name, "function rejected by filter");
            }
            accepted
        })
        .map(|function| signature_of(function, policy))
        .collect();

    tracing::debug!(
        path = %unit.path().display(),
        declarations = declarations.len(),
        functions = functions.len(),
        "extracted functions"
    );
    functions
}

/// Parse every path with `frontend` and concatenate the results in order.
///
/// # Errors
/// Returns the first [`ParserError`]; no partial result is produced.
pub fn extract_files<F: Frontend, P: AsRef<Path>>(
    frontend: &F,
    paths: &[P],
    args: &[String],
    filter: &NameFilter,
    policy: ParameterPolicy,
) -> Result<Vec<FunctionSignature>, ParserError> {
    let mut functions = Vec::new();
    for path in paths {
        let unit = frontend.parse(path.as_ref(), args)?;
        functions.extend(extract_functions(&unit, filter, policy));
    }
    Ok(functions)
}

/// Build the signature model of one function declaration.
#[must_use]
pub fn signature_of(function: &FunctionDecl, policy: ParameterPolicy) -> FunctionSignature {
    let mut declared: Vec<&str> = function
        .parameters
        .iter()
        .map(|p| p.type_spelling.as_str())
        .collect();
    if function.variadic {
        declared.push("...");
    }
    let signature = declare(&function.return_type, &format!("({})", declared.join(", ")));

    let void_prototype = function.is_void_prototype();
    let display_name = if void_prototype {
        format!("{}()", function.name)
    } else {
        format!("{}({})", function.name, declared.join(", "))
    };

    let parameter_types = if void_prototype {
        Vec::new()
    } else {
        function
            .parameters
            .iter()
            .filter(|p| match policy {
                ParameterPolicy::Typed => !p.is_void_marker(),
                ParameterPolicy::NamedOnly => p.name.is_some(),
            })
            .map(|p| p.type_spelling.clone())
            .collect()
    };

    FunctionSignature {
        name: function.name.clone(),
        signature,
        return_type: function.return_type.clone(),
        display_name,
        parameter_types,
    }
}

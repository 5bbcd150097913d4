//! Option enums shared by the frontend, the renderer and configuration.

use serde::{Deserialize, Serialize};

/// Which declared parameters become trampoline arguments.
///
/// The lone `void` of an empty prototype and the variadic `...` never have a
/// definition and are always excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterPolicy {
    /// Every parameter with a type counts, named or not.
    // Flagged for product-owner confirmation: earlier generators behaved like
    // `NamedOnly`, which drops the argument of `int f(int)`.
    #[default]
    Typed,
    /// Only parameters that carry a name count.
    NamedOnly,
}

/// Shape of the generated mock-method declarations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MockStyle {
    /// `MOCK_METHODn(name, signature);`
    #[default]
    Legacy,
    /// `MOCK_METHOD(ret, name, (params), (override));`
    Modern,
}

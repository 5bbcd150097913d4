//! `[frontend]` section.

use cgmock_core::ParameterPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FrontendConfig {
    pub parameter_policy: ParameterPolicy,
    /// Recover declarations around syntax errors instead of failing.
    pub tolerate_syntax_errors: bool,
    /// Frontend arguments placed before the ones given after `--`.
    pub args: Vec<String>,
}

impl FrontendConfig {
    /// Configured arguments followed by `extra`.
    #[must_use]
    pub fn args_with(&self, extra: &[String]) -> Vec<String> {
        self.args.iter().chain(extra).cloned().collect()
    }
}

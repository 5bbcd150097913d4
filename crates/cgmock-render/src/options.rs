//! Knobs controlling the rendered artifacts.

use cgmock_core::MockStyle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Prepended to every interface method, mock method and trampoline call.
    pub method_prefix: String,
    pub mock_style: MockStyle,
    /// Test fixture class name.
    pub fixture_name: String,
    /// Fixture member holding the mock instance.
    pub mock_member: String,
    /// Headers included after `#pragma once`. Bare paths are wrapped in `<>`.
    pub includes: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            method_prefix: String::new(),
            mock_style: MockStyle::default(),
            fixture_name: "Fixture".to_string(),
            mock_member: "mock_c".to_string(),
            includes: vec!["gtest/gtest.h".to_string(), "gmock/gmock.h".to_string()],
        }
    }
}

impl RenderOptions {
    /// The method name used for `function` on the interface and the mock.
    #[must_use]
    pub fn method_name(&self, function: &str) -> String {
        format!("{}{function}", self.method_prefix)
    }
}

/// `<path>` or `"path"` as written, otherwise `<path>`.
pub(crate) fn include_directive(include: &str) -> String {
    let include = include.trim();
    if include.starts_with('<') || include.starts_with('"') {
        format!("#include {include}")
    } else {
        format!("#include <{include}>")
    }
}

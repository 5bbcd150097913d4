//! `[render]` section.

use cgmock_core::MockStyle;
use cgmock_render::RenderOptions;
use serde::{Deserialize, Serialize};

/// Library name used when neither `--name` nor `render.library_name` is set.
pub const DEFAULT_LIBRARY_NAME: &str = "MockLib";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Library name used when `--name` is not given.
    pub library_name: String,
    pub method_prefix: String,
    pub mock_style: MockStyle,
    pub fixture_name: String,
    pub mock_member: String,
    pub includes: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            library_name: DEFAULT_LIBRARY_NAME.to_string(),
            method_prefix: options.method_prefix,
            mock_style: options.mock_style,
            fixture_name: options.fixture_name,
            mock_member: options.mock_member,
            includes: options.includes,
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn options(&self) -> RenderOptions {
        RenderOptions {
            method_prefix: self.method_prefix.clone(),
            mock_style: self.mock_style,
            fixture_name: self.fixture_name.clone(),
            mock_member: self.mock_member.clone(),
            includes: self.includes.clone(),
        }
    }
}

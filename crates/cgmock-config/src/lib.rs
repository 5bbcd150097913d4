//! # cgmock-config
//!
//! Layered configuration loading for cgmock using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CGMOCK_*` prefix, `__` as separator)
//! 2. Project-level `./cgmock.toml` (or the file given with `--config`)
//! 3. User-level `~/.config/cgmock/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied by the binary on top of the loaded value.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CGMOCK_RENDER__LIBRARY_NAME` -> `render.library_name`,
//! `CGMOCK_FRONTEND__TOLERATE_SYNTAX_ERRORS` -> `frontend.tolerate_syntax_errors`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use cgmock_config::CgmockConfig;
//!
//! let config = CgmockConfig::load().expect("config");
//! println!("library: {}", config.render.library_name);
//! ```

mod error;
mod frontend;
mod render;

pub use error::ConfigError;
pub use frontend::FrontendConfig;
pub use render::{DEFAULT_LIBRARY_NAME, RenderConfig};

use std::path::{Path, PathBuf};

use cgmock_core::spelling::is_identifier;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-local configuration file, relative to the working directory.
pub const LOCAL_CONFIG_FILE: &str = "cgmock.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CgmockConfig {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub frontend: FrontendConfig,
}

impl CgmockConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a source is malformed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(&Self::figment())
    }

    /// Load configuration with `path` in place of `./cgmock.toml`.
    ///
    /// # Errors
    /// Returns [`ConfigError::NotFound`] if `path` does not exist, otherwise as
    /// [`load`](Self::load).
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Self::extract(&Self::figment_with_local(path))
    }

    /// Build the default figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with_local(Path::new(LOCAL_CONFIG_FILE))
    }

    fn figment_with_local(local_path: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CGMOCK_").split("__"))
    }

    fn extract(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cgmock").join("config.toml"))
    }

    /// Check that every name that ends up in generated C++ is an identifier.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let render = &self.render;
        require_identifier("render.library_name", &render.library_name)?;
        if !render.method_prefix.is_empty() {
            require_identifier("render.method_prefix", &render.method_prefix)?;
        }
        require_identifier("render.fixture_name", &render.fixture_name)?;
        require_identifier("render.mock_member", &render.mock_member)?;
        if let Some(include) = render.includes.iter().find(|i| i.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "render.includes".to_string(),
                reason: format!("empty include path {include:?}"),
            });
        }
        Ok(())
    }
}

fn require_identifier(field: &str, value: &str) -> Result<(), ConfigError> {
    if is_identifier(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("{value:?} is not a C identifier"),
        })
    }
}

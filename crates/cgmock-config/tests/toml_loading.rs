//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed working directory and env var manipulation.

use cgmock_config::{CgmockConfig, ConfigError};
use cgmock_core::{MockStyle, ParameterPolicy};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_render_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[render]
library_name = "Net"
method_prefix = "mock_"
mock_style = "modern"
fixture_name = "NetTest"
mock_member = "net"
includes = ["gmock/gmock.h"]
"#,
        )?;

        let config: CgmockConfig = Figment::from(Serialized::defaults(CgmockConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.render.library_name, "Net");
        assert_eq!(config.render.method_prefix, "mock_");
        assert_eq!(config.render.mock_style, MockStyle::Modern);
        assert_eq!(config.render.fixture_name, "NetTest");
        assert_eq!(config.render.mock_member, "net");
        assert_eq!(config.render.includes, vec!["gmock/gmock.h"]);
        Ok(())
    });
}

#[test]
fn loads_frontend_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[frontend]
parameter_policy = "named-only"
tolerate_syntax_errors = true
args = ["-DUNIT_TEST", "-Iinclude"]
"#,
        )?;

        let config: CgmockConfig = Figment::from(Serialized::defaults(CgmockConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.frontend.parameter_policy, ParameterPolicy::NamedOnly);
        assert!(config.frontend.tolerate_syntax_errors);
        assert_eq!(config.frontend.args, vec!["-DUNIT_TEST", "-Iinclude"]);
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("cgmock.toml", "[render]\nlibrary_name = \"Foo\"\n")?;

        let config = CgmockConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.render.library_name, "Foo");
        assert_eq!(config.render.fixture_name, "Fixture");
        assert_eq!(config.render.mock_style, MockStyle::Legacy);
        assert_eq!(config.frontend.parameter_policy, ParameterPolicy::Typed);
        Ok(())
    });
}

#[test]
fn explicit_config_file_replaces_local_file() {
    Jail::expect_with(|jail| {
        jail.create_file("cgmock.toml", "[render]\nlibrary_name = \"Local\"\n")?;
        jail.create_file("ci.toml", "[render]\nlibrary_name = \"Ci\"\n")?;

        let config =
            CgmockConfig::load_from(&jail.directory().join("ci.toml")).map_err(|e| e.to_string())?;
        assert_eq!(config.render.library_name, "Ci");
        Ok(())
    });
}

#[test]
fn missing_explicit_config_file_is_an_error() {
    Jail::expect_with(|jail| {
        let missing = jail.directory().join("absent.toml");
        let err = CgmockConfig::load_from(&missing).expect_err("file does not exist");
        assert!(matches!(err, ConfigError::NotFound { ref path } if *path == missing));
        Ok(())
    });
}

#[test]
fn invalid_values_fail_loading() {
    Jail::expect_with(|jail| {
        jail.create_file("cgmock.toml", "[render]\nfixture_name = \"not valid\"\n")?;

        let err = CgmockConfig::load().expect_err("fixture name has a space");
        assert!(
            matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "render.fixture_name")
        );
        Ok(())
    });
}

#[test]
fn unknown_mock_style_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("cgmock.toml", "[render]\nmock_style = \"fancy\"\n")?;

        let err = CgmockConfig::load().expect_err("unknown variant");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

#[cfg(target_os = "linux")]
#[test]
fn local_config_overrides_global_config() {
    Jail::expect_with(|jail| {
        let xdg = jail.directory().join("xdg");
        std::fs::create_dir_all(xdg.join("cgmock")).map_err(|e| e.to_string())?;
        jail.set_env("XDG_CONFIG_HOME", xdg.display());
        jail.create_file(
            "xdg/cgmock/config.toml",
            "[render]\nlibrary_name = \"Global\"\nmock_member = \"from_global\"\n",
        )?;
        jail.create_file("cgmock.toml", "[render]\nlibrary_name = \"Local\"\n")?;

        let config = CgmockConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.render.library_name, "Local");
        assert_eq!(config.render.mock_member, "from_global");
        Ok(())
    });
}

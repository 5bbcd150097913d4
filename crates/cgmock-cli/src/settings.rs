//! Effective run settings: configuration layers with command-line flags on top.

use std::path::PathBuf;

use cgmock_config::CgmockConfig;
use cgmock_core::ParameterPolicy;
use cgmock_core::spelling::is_identifier;
use cgmock_render::RenderOptions;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct Settings {
    pub files: Vec<PathBuf>,
    pub filter: Option<PathBuf>,
    pub library_name: String,
    pub render: RenderOptions,
    pub parameter_policy: ParameterPolicy,
    pub tolerate_syntax_errors: bool,
    pub frontend_args: Vec<String>,
    pub include_as: Option<String>,
    pub list: bool,
}

impl Settings {
    /// # Errors
    /// Fails if `--prefix` is not usable in a C++ method name.
    pub fn resolve(cli: &Cli, config: CgmockConfig) -> anyhow::Result<Self> {
        let mut render = config.render.options();
        if let Some(prefix) = &cli.prefix {
            if !prefix.is_empty() && !is_identifier(prefix) {
                anyhow::bail!("invalid --prefix '{prefix}': not a C identifier");
            }
            render.method_prefix.clone_from(prefix);
        }
        if let Some(style) = cli.mock_style {
            render.mock_style = style.into();
        }

        let parameter_policy = if cli.named_params_only {
            ParameterPolicy::NamedOnly
        } else {
            config.frontend.parameter_policy
        };

        Ok(Self {
            files: cli.files.clone(),
            filter: cli.filter.clone(),
            library_name: cli.name.clone().unwrap_or(config.render.library_name),
            render,
            parameter_policy,
            tolerate_syntax_errors: cli.tolerate_syntax_errors
                || config.frontend.tolerate_syntax_errors,
            frontend_args: config.frontend.args_with(&cli.frontend_args),
            include_as: cli.include_as.clone(),
            list: cli.list,
        })
    }
}

#[cfg(test)]
mod tests {
    use cgmock_core::MockStyle;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cgmock").chain(args.iter().copied()))
            .expect("cli should parse")
    }

    fn configured() -> CgmockConfig {
        let mut config = CgmockConfig::default();
        config.render.library_name = "FromConfig".to_string();
        config.render.method_prefix = "cfg_".to_string();
        config.frontend.args = vec!["-DCONFIG".to_string()];
        config.frontend.parameter_policy = ParameterPolicy::NamedOnly;
        config
    }

    #[test]
    fn config_supplies_defaults() {
        let settings = Settings::resolve(&parse(&["a.h"]), configured()).expect("resolve");
        assert_eq!(settings.library_name, "FromConfig");
        assert_eq!(settings.render.method_prefix, "cfg_");
        assert_eq!(settings.parameter_policy, ParameterPolicy::NamedOnly);
        assert_eq!(settings.frontend_args, vec!["-DCONFIG"]);
    }

    #[test]
    fn flags_override_config() {
        let cli = parse(&[
            "-n",
            "FromCli",
            "--prefix",
            "cli_",
            "--mock-style",
            "modern",
            "a.h",
            "--",
            "-DCLI",
        ]);
        let settings = Settings::resolve(&cli, configured()).expect("resolve");
        assert_eq!(settings.library_name, "FromCli");
        assert_eq!(settings.render.method_prefix, "cli_");
        assert_eq!(settings.render.mock_style, MockStyle::Modern);
        assert_eq!(settings.frontend_args, vec!["-DCONFIG", "-DCLI"]);
    }

    #[test]
    fn empty_prefix_flag_clears_configured_prefix() {
        let settings =
            Settings::resolve(&parse(&["--prefix", "", "a.h"]), configured()).expect("resolve");
        assert_eq!(settings.render.method_prefix, "");
    }

    #[test]
    fn invalid_prefix_is_rejected() {
        let err = Settings::resolve(&parse(&["--prefix", "bad-prefix", "a.h"]), configured())
            .expect_err("dash is not allowed");
        assert!(err.to_string().contains("--prefix"));
    }

    #[test]
    fn boolean_flags_switch_behavior_on() {
        let cli = parse(&["--named-params-only", "--tolerate-syntax-errors", "--list", "a.h"]);
        let settings = Settings::resolve(&cli, CgmockConfig::default()).expect("resolve");
        assert_eq!(settings.parameter_policy, ParameterPolicy::NamedOnly);
        assert!(settings.tolerate_syntax_errors);
        assert!(settings.list);
        assert_eq!(settings.library_name, "MockLib");
    }
}

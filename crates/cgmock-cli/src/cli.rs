use std::path::PathBuf;

use cgmock_core::MockStyle;
use clap::{Parser, ValueEnum};

/// Top-level CLI parser for the `cgmock` binary.
#[derive(Debug, Parser)]
#[command(
    name = "cgmock",
    version,
    about = "Generate a gmock interface, mock, trampolines and fixture for C headers"
)]
pub struct Cli {
    /// C headers to scan, in order
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Library name; derives the namespace and the Lib<NAME>... symbols [default: MockLib]
    #[arg(short, long)]
    pub name: Option<String>,

    /// Function allowlist, one name per line (`-` reads standard input)
    #[arg(short, long, value_name = "PATH")]
    pub filter: Option<PathBuf>,

    /// Write the header document here (requires --source)
    #[arg(long, value_name = "PATH", requires = "source")]
    pub header: Option<PathBuf>,

    /// Write the definitions document here (requires --header)
    #[arg(long, value_name = "PATH", requires = "header")]
    pub source: Option<PathBuf>,

    /// Header path written into the definitions document's #include
    #[arg(long, value_name = "PATH")]
    pub include_as: Option<String>,

    /// Prefix for interface and mock method names
    #[arg(long)]
    pub prefix: Option<String>,

    /// Mock declaration macro style
    #[arg(long, value_enum)]
    pub mock_style: Option<MockStyleArg>,

    /// Only named parameters become trampoline arguments
    #[arg(long)]
    pub named_params_only: bool,

    /// Recover declarations around syntax errors instead of failing
    #[arg(long)]
    pub tolerate_syntax_errors: bool,

    /// Print the extracted signatures as JSON instead of rendering
    #[arg(long)]
    pub list: bool,

    /// Configuration file to use instead of ./cgmock.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Arguments forwarded to the C frontend (-D, -U, -x, -std=, ...)
    #[arg(last = true, value_name = "FRONTEND_ARGS")]
    pub frontend_args: Vec<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum MockStyleArg {
    /// MOCK_METHODn(name, signature)
    Legacy,
    /// MOCK_METHOD(ret, name, (params), (override))
    Modern,
}

impl From<MockStyleArg> for MockStyle {
    fn from(style: MockStyleArg) -> Self {
        match style {
            MockStyleArg::Legacy => Self::Legacy,
            MockStyleArg::Modern => Self::Modern,
        }
    }
}

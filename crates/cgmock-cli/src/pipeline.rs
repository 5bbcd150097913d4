//! The generation pipeline: filter → extract → render → write.
//!
//! Output targets are resolved before any input is parsed, and both documents
//! are rendered and staged next to their targets before either target is
//! replaced, so a failing run produces no output at all.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tempfile::NamedTempFile;
use cgmock_config::CgmockConfig;
use cgmock_core::{FunctionSignature, LibraryIdentity, NameFilter, duplicate_names};
use cgmock_parser::{CFrontend, extract_files};
use cgmock_render::Mocker;

use crate::cli::Cli;
use crate::settings::Settings;

/// Where the two documents go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Header, then definitions, on standard output.
    Stdout,
    Files { header: PathBuf, source: PathBuf },
}

impl OutputTarget {
    /// # Errors
    /// Exactly one of the two paths is a usage error.
    pub fn from_paths(header: Option<&Path>, source: Option<&Path>) -> anyhow::Result<Self> {
        match (header, source) {
            (None, None) => Ok(Self::Stdout),
            (Some(header), Some(source)) => Ok(Self::Files {
                header: header.to_path_buf(),
                source: source.to_path_buf(),
            }),
            (Some(_), None) => anyhow::bail!("--header requires --source"),
            (None, Some(_)) => anyhow::bail!("--source requires --header"),
        }
    }

    /// The `#include` written into the definitions document when none is given.
    ///
    /// The header is spelled relative to the source's directory, so a header
    /// next to the source is included by file name. Paths that cannot be
    /// related lexically are used as given.
    #[must_use]
    pub fn default_include(&self) -> Option<String> {
        let Self::Files { header, source } = self else {
            return None;
        };
        let source_dir = source.parent().unwrap_or_else(|| Path::new(""));
        let relative = pathdiff::diff_paths(header, source_dir).unwrap_or_else(|| header.clone());
        Some(include_spelling(&relative))
    }
}

/// `/`-separated, as `#include` expects on every platform.
fn include_spelling(path: &Path) -> String {
    if path.has_root() {
        return path.display().to_string();
    }
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Rendered header and definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub header: String,
    pub definitions: String,
}

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let target = OutputTarget::from_paths(cli.header.as_deref(), cli.source.as_deref())?;

    let config = match &cli.config {
        Some(path) => CgmockConfig::load_from(path),
        None => CgmockConfig::load(),
    }
    .context("failed to load cgmock configuration")?;
    let settings = Settings::resolve(cli, config)?;

    let stdout = std::io::stdout();
    execute(&settings, &target, &mut stdout.lock())
}

/// Run the pipeline for resolved `settings`, writing stdout output to `stdout`.
pub fn execute(
    settings: &Settings,
    target: &OutputTarget,
    stdout: &mut impl Write,
) -> anyhow::Result<()> {
    // Identity problems are reported before the (possibly slow) parse.
    let identity = if settings.list {
        None
    } else {
        Some(LibraryIdentity::new(&settings.library_name)?)
    };

    let filter = load_filter(settings.filter.as_deref())?;
    let functions = extract(settings, &filter)?;

    let Some(identity) = identity else {
        let json = serde_json::to_string_pretty(&functions)?;
        writeln!(stdout, "{json}").context("failed to write signature list")?;
        return Ok(());
    };

    let include = settings
        .include_as
        .clone()
        .or_else(|| target.default_include());
    let artifacts = render(identity, &functions, settings, include.as_deref());
    write_artifacts(&artifacts, target, stdout)
}

fn load_filter(source: Option<&Path>) -> anyhow::Result<NameFilter> {
    let filter = match source {
        None => NameFilter::accept_all(),
        Some(path) if path == Path::new("-") => NameFilter::from_reader(std::io::stdin().lock())
            .context("failed to read function filter from standard input")?,
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open function filter {}", path.display()))?;
            NameFilter::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to read function filter {}", path.display()))?
        }
    };
    tracing::debug!(names = filter.len(), "loaded function filter");
    Ok(filter)
}

fn extract(settings: &Settings, filter: &NameFilter) -> anyhow::Result<Vec<FunctionSignature>> {
    let frontend = CFrontend::new().tolerate_syntax_errors(settings.tolerate_syntax_errors);
    let functions = extract_files(
        &frontend,
        &settings.files,
        &settings.frontend_args,
        filter,
        settings.parameter_policy,
    )
    .context("failed to extract function declarations")?;

    for name in duplicate_names(&functions) {
        tracing::warn!(
            function = name,
            "function declared more than once; generated code will not compile"
        );
    }
    if functions.is_empty() {
        tracing::warn!("no functions matched; rendering empty test doubles");
    }
    Ok(functions)
}

fn render(
    identity: LibraryIdentity,
    functions: &[FunctionSignature],
    settings: &Settings,
    include: Option<&str>,
) -> Artifacts {
    let mocker = Mocker::new(identity, functions).with_options(settings.render.clone());
    Artifacts {
        header: mocker.render_header(),
        definitions: mocker.render_definitions(include),
    }
}

fn write_artifacts(
    artifacts: &Artifacts,
    target: &OutputTarget,
    stdout: &mut impl Write,
) -> anyhow::Result<()> {
    match target {
        OutputTarget::Stdout => {
            write_stdout(artifacts, stdout).context("failed to write to standard output")?;
        }
        OutputTarget::Files { header, source } => {
            let staged_header = stage(header, &artifacts.header)
                .with_context(|| format!("failed to write header {}", header.display()))?;
            let staged_source = stage(source, &artifacts.definitions)
                .with_context(|| format!("failed to write source {}", source.display()))?;
            staged_header
                .persist(header)
                .with_context(|| format!("failed to write header {}", header.display()))?;
            staged_source
                .persist(source)
                .with_context(|| format!("failed to write source {}", source.display()))?;
            tracing::debug!(
                header = %header.display(),
                source = %source.display(),
                "wrote test doubles"
            );
        }
    }
    Ok(())
}

/// Write `contents` to a temporary file in `target`'s directory.
///
/// The file is removed on drop unless persisted.
fn stage(target: &Path, contents: &str) -> std::io::Result<NamedTempFile> {
    let dir = target
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(contents.as_bytes())?;
    staged.flush()?;
    Ok(staged)
}

fn write_stdout(artifacts: &Artifacts, out: &mut impl Write) -> std::io::Result<()> {
    out.write_all(artifacts.header.as_bytes())?;
    out.write_all(b"\n")?;
    out.write_all(artifacts.definitions.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests;

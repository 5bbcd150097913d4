use cgmock_core::ParameterPolicy;
use cgmock_render::RenderOptions;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use super::*;

const HEADER: &str = "\
#ifndef NET_H
#define NET_H
int net_open(const char *host, int port);
void net_close(int fd);
long net_send(int fd, const void *data, unsigned long len);
#endif
";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("write file");
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn files(&self) -> OutputTarget {
        OutputTarget::Files {
            header: self.path("mock_net.h"),
            source: self.path("mock_net.cpp"),
        }
    }
}

fn settings(files: Vec<PathBuf>) -> Settings {
    Settings {
        files,
        filter: None,
        library_name: "Net".to_string(),
        render: RenderOptions::default(),
        parameter_policy: ParameterPolicy::Typed,
        tolerate_syntax_errors: false,
        frontend_args: Vec::new(),
        include_as: None,
        list: false,
    }
}

fn run_to_string(settings: &Settings, target: &OutputTarget) -> anyhow::Result<String> {
    let mut stdout = Vec::new();
    execute(settings, target, &mut stdout)?;
    Ok(String::from_utf8(stdout).expect("utf-8 output"))
}

// ── Output targets ─────────────────────────────────────────────────

#[test]
fn output_paths_are_both_or_neither() {
    assert_eq!(
        OutputTarget::from_paths(None, None).expect("stdout"),
        OutputTarget::Stdout
    );
    assert!(OutputTarget::from_paths(Some(Path::new("m.h")), Some(Path::new("m.cpp"))).is_ok());

    let err = OutputTarget::from_paths(Some(Path::new("m.h")), None).expect_err("missing source");
    assert!(err.to_string().contains("--source"));
    let err = OutputTarget::from_paths(None, Some(Path::new("m.cpp"))).expect_err("missing header");
    assert!(err.to_string().contains("--header"));
}

fn include_for(header: &str, source: &str) -> Option<String> {
    OutputTarget::Files {
        header: PathBuf::from(header),
        source: PathBuf::from(source),
    }
    .default_include()
}

#[test]
fn default_include_uses_file_name_for_sibling_header() {
    assert_eq!(
        include_for("out/mock_net.h", "out/mock_net.cpp").as_deref(),
        Some("mock_net.h")
    );
    assert_eq!(
        include_for("mock_net.h", "mock_net.cpp").as_deref(),
        Some("mock_net.h")
    );
    assert_eq!(OutputTarget::Stdout.default_include(), None);
}

#[test]
fn default_include_is_relative_to_the_source_directory() {
    assert_eq!(
        include_for("include/mock_net.h", "src/mock_net.cpp").as_deref(),
        Some("../include/mock_net.h")
    );
    assert_eq!(
        include_for("mocks/mock_net.h", "mock_net.cpp").as_deref(),
        Some("mocks/mock_net.h")
    );
    assert_eq!(
        include_for("mock_net.h", "build/gen/mock_net.cpp").as_deref(),
        Some("../../mock_net.h")
    );
}

#[test]
fn default_include_falls_back_to_the_given_path() {
    // A source directory above the working directory cannot be related lexically.
    assert_eq!(
        include_for("mock_net.h", "../gen/mock_net.cpp").as_deref(),
        Some("mock_net.h")
    );
}

// ── End to end ─────────────────────────────────────────────────────

#[test]
fn writes_both_documents_to_files() {
    let ws = Workspace::new();
    let input = ws.write("net.h", HEADER);
    let target = ws.files();

    let stdout = run_to_string(&settings(vec![input]), &target).expect("pipeline");
    assert!(stdout.is_empty());

    let header = std::fs::read_to_string(ws.path("mock_net.h")).expect("header written");
    assert!(header.starts_with("#pragma once\n"));
    assert!(header.contains("class LibNetInterface {"));
    assert!(header.contains("    virtual int net_open(const char *, int) = 0;\n"));
    assert!(header.contains("    MOCK_METHOD3(net_send, long (int, const void *, unsigned long));\n"));
    assert!(header.contains("extern \"C\" void net_close(int);\n"));

    let source = std::fs::read_to_string(ws.path("mock_net.cpp")).expect("source written");
    assert!(source.starts_with("#include \"mock_net.h\"\n"));
    assert!(source.contains("LibNetInterfaceMock* LibNetMockObj = nullptr;"));
    assert!(source.contains("extern \"C\" int net_open(const char *_0, int _1)\n"));
    assert!(source.contains("    return Net::LibNetMockObj->net_open(_0, _1);\n"));
    assert!(source.contains("    Net::LibNetMockObj->net_close(_0);\n"));
}

#[test]
fn stdout_receives_header_then_headerless_definitions() {
    let ws = Workspace::new();
    let input = ws.write("net.h", HEADER);

    let stdout = run_to_string(&settings(vec![input]), &OutputTarget::Stdout).expect("pipeline");
    let header_at = stdout.find("#pragma once").expect("header");
    let definitions_at = stdout
        .find("LibNetInterfaceMock* LibNetMockObj = nullptr;")
        .expect("definitions");
    assert!(header_at < definitions_at);
    assert!(!stdout.contains("#include \""));
}

#[test]
fn include_as_overrides_the_default_include() {
    let ws = Workspace::new();
    let input = ws.write("net.h", HEADER);
    let mut settings = settings(vec![input]);
    settings.include_as = Some("mocks/net.h".to_string());

    run_to_string(&settings, &ws.files()).expect("pipeline");
    let source = std::fs::read_to_string(ws.path("mock_net.cpp")).expect("source written");
    assert!(source.starts_with("#include \"mocks/net.h\"\n"));
}

#[test]
fn filter_file_restricts_generated_functions() {
    let ws = Workspace::new();
    let input = ws.write("net.h", HEADER);
    let filter = ws.write("functions.txt", "# only the lifecycle\nnet_close\n\nnet_open\n");
    let mut settings = settings(vec![input]);
    settings.filter = Some(filter);

    let stdout = run_to_string(&settings, &OutputTarget::Stdout).expect("pipeline");
    assert!(stdout.contains("MOCK_METHOD2(net_open"));
    assert!(stdout.contains("MOCK_METHOD1(net_close"));
    assert!(!stdout.contains("net_send"));
}

#[test]
fn empty_filter_file_accepts_everything() {
    let ws = Workspace::new();
    let input = ws.write("net.h", HEADER);
    let filter = ws.write("functions.txt", "# nothing listed\n\n");
    let mut settings = settings(vec![input]);
    settings.filter = Some(filter);

    let stdout = run_to_string(&settings, &OutputTarget::Stdout).expect("pipeline");
    assert!(stdout.contains("net_send"));
}

#[test]
fn list_prints_signatures_as_json() {
    let ws = Workspace::new();
    let input = ws.write("net.h", HEADER);
    let mut settings = settings(vec![input]);
    settings.list = true;
    settings.library_name = "not-an-identifier".to_string();

    let stdout = run_to_string(&settings, &OutputTarget::Stdout).expect("pipeline");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("json output");
    let names: Vec<&str> = value
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|f| f["name"].as_str())
        .collect();
    assert_eq!(names, vec!["net_open", "net_close", "net_send"]);
    assert_eq!(value[1]["signature"], "void (int)");
    assert_eq!(value[1]["parameter_types"][0], "int");
}

#[test]
fn frontend_args_select_conditional_declarations() {
    let ws = Workspace::new();
    let input = ws.write(
        "feature.h",
        "#ifdef WITH_TLS\nint tls_start(int fd);\n#endif\nint plain(void);\n",
    );
    let mut settings = settings(vec![input]);
    settings.frontend_args = vec!["-DWITH_TLS".to_string()];

    let stdout = run_to_string(&settings, &OutputTarget::Stdout).expect("pipeline");
    assert!(stdout.contains("extern \"C\" int tls_start(int);"));
    assert!(stdout.contains("extern \"C\" int plain();"));
}

// ── Failures produce no output ─────────────────────────────────────

#[test]
fn parse_error_writes_nothing() {
    let ws = Workspace::new();
    let good = ws.write("net.h", HEADER);
    let bad = ws.write("bad.h", "int ok(void);\n@@@ not c @@@\n");
    let target = ws.files();

    let err = run_to_string(&settings(vec![good, bad]), &target).expect_err("bad.h fails");
    assert!(format!("{err:#}").contains("bad.h"));
    assert!(!ws.path("mock_net.h").exists());
    assert!(!ws.path("mock_net.cpp").exists());
}

#[test]
fn failed_source_write_leaves_no_header() {
    let ws = Workspace::new();
    let input = ws.write("net.h", HEADER);
    let target = OutputTarget::Files {
        header: ws.path("mock_net.h"),
        source: ws.path("no_such_dir").join("mock_net.cpp"),
    };

    let err = run_to_string(&settings(vec![input]), &target).expect_err("source dir missing");
    assert!(format!("{err:#}").contains("failed to write source"));
    assert!(!ws.path("mock_net.h").exists());
    let leftovers: Vec<_> = std::fs::read_dir(ws.dir.path())
        .expect("read workspace")
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(leftovers, vec!["net.h".to_string()]);
}

#[test]
fn existing_outputs_are_replaced() {
    let ws = Workspace::new();
    let input = ws.write("net.h", HEADER);
    ws.write("mock_net.h", "stale header");
    ws.write("mock_net.cpp", "stale source");

    run_to_string(&settings(vec![input]), &ws.files()).expect("pipeline");
    let header = std::fs::read_to_string(ws.path("mock_net.h")).expect("header written");
    assert!(header.starts_with("#pragma once\n"));
    let source = std::fs::read_to_string(ws.path("mock_net.cpp")).expect("source written");
    assert!(source.contains("LibNetMockObj = nullptr;"));
}

#[test]
fn tolerated_syntax_errors_still_render() {
    let ws = Workspace::new();
    let bad = ws.write("bad.h", "int ok(void);\n@@@ not c @@@\n");
    let mut settings = settings(vec![bad]);
    settings.tolerate_syntax_errors = true;

    let stdout = run_to_string(&settings, &OutputTarget::Stdout).expect("pipeline");
    assert!(stdout.contains("extern \"C\" int ok();"));
}

#[test]
fn missing_filter_file_fails_before_extraction() {
    let ws = Workspace::new();
    let input = ws.write("net.h", HEADER);
    let mut settings = settings(vec![input]);
    settings.filter = Some(ws.path("absent.txt"));

    let err = run_to_string(&settings, &ws.files()).expect_err("filter missing");
    assert!(format!("{err:#}").contains("function filter"));
    assert!(!ws.path("mock_net.h").exists());
}

#[test]
fn default_library_name_is_mock_lib() {
    let ws = Workspace::new();
    let input = ws.write("net.h", HEADER);
    let mut settings = settings(vec![input]);
    settings.library_name = cgmock_config::DEFAULT_LIBRARY_NAME.to_string();

    let stdout = run_to_string(&settings, &OutputTarget::Stdout).expect("pipeline");
    assert!(stdout.contains("namespace MockLib {"));
    assert!(stdout.contains("class LibMockLibInterface {"));
}

#[test]
fn invalid_library_name_is_rejected() {
    let ws = Workspace::new();
    let input = ws.write("net.h", HEADER);
    let mut settings = settings(vec![input]);
    settings.library_name = "net-lib".to_string();

    assert!(run_to_string(&settings, &OutputTarget::Stdout).is_err());
}

#[test]
fn missing_input_file_is_reported() {
    let ws = Workspace::new();
    let err = run_to_string(&settings(vec![ws.path("absent.h")]), &OutputTarget::Stdout)
        .expect_err("input missing");
    assert!(format!("{err:#}").contains("absent.h"));
}

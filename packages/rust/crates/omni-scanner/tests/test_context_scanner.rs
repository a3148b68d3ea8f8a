//! Tests for context_scanner module.
//!
//! Tests directory walking, per-file dispatch, and report rendering.

use omni_scanner::{
    AnnotationValue, ContextScanner, EntryOutcome, FileKind, REPORT_BANNER, ScanConfig, ScanError,
    render_report, scan_python_file,
};
use std::fs;
use tempfile::TempDir;

const EXAMPLE_LIB: &str = r#"
def calculate_risk(amount: float, credit_score: int) -> str:
    """
    Analyzes the financial risk of a loan application.
    This would be the 'Layer 1' disclosure text.
    """
    # Implementation details are hidden from the AI initially
    return "High" if credit_score < 600 else "Low"

def _private_helper():
    """This should be ignored by the scanner."""
    pass
"#;

fn fixture() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("a.py"), "def f():\n    pass\n").unwrap();
    fs::write(root.join("README.md"), "# Title\n\nHello world\n").unwrap();
    fs::write(root.join("data.bin"), [0u8, 159, 146, 150, 255, 1, 2]).unwrap();
    temp_dir
}

/// Test the three-handler directory from the documented example.
#[test]
fn test_scan_mixed_directory() {
    let temp_dir = fixture();
    let report = ContextScanner::default().scan_dir(temp_dir.path()).unwrap();

    let files: Vec<&str> = report.entries().iter().map(|e| e.file.as_str()).collect();
    assert_eq!(files, vec!["README.md", "a.py", "data.bin"]);

    let readme = report.get("README.md").unwrap();
    assert_eq!(readme.kind, FileKind::Markdown);
    assert_eq!(
        readme.outcome,
        EntryOutcome::Markdown {
            title: "Title".to_string(),
            description: "Hello world".to_string(),
        }
    );

    let source = report.get("a.py").unwrap();
    assert_eq!(source.kind, FileKind::Python);
    let functions = source.functions().unwrap();
    assert_eq!(functions.len(), 1);
    assert_eq!(functions[0].name, "f");

    let data = report.get("data.bin").unwrap();
    assert_eq!(data.kind, FileKind::Generic);
    match &data.outcome {
        EntryOutcome::Generic { summary } => assert!(summary.contains('\u{fffd}')),
        other => panic!("expected generic summary, got {other:?}"),
    }
}

/// Test scanning a root that does not exist.
#[test]
fn test_missing_root_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("context_files");
    let result = ContextScanner::default().scan_dir(&missing);
    assert!(matches!(result, Err(ScanError::NotFound(p)) if p == missing));
}

/// Test scanning a regular file as a root.
#[test]
fn test_file_root_is_not_found() {
    let temp_dir = fixture();
    let result = ContextScanner::default().scan_dir(&temp_dir.path().join("a.py"));
    assert!(matches!(result, Err(ScanError::NotFound(_))));
}

/// Test scanning an empty directory.
#[test]
fn test_empty_directory_is_empty_report() {
    let temp_dir = TempDir::new().unwrap();
    let report = ContextScanner::default().scan_dir(temp_dir.path()).unwrap();
    assert!(report.is_empty());
    assert_eq!(
        render_report(&report).unwrap(),
        format!("{REPORT_BANNER}\n[]")
    );
}

/// Test that a malformed source file does not stop the walk.
#[test]
fn test_parse_failure_is_contained() {
    let temp_dir = fixture();
    let root = temp_dir.path();
    fs::write(root.join("broken.py"), "def broken(:\n    pass\n").unwrap();
    fs::write(root.join("example_lib.py"), EXAMPLE_LIB).unwrap();

    let report = ContextScanner::default().scan_dir(root).unwrap();
    assert_eq!(report.len(), 5);

    let broken = report.get("broken.py").unwrap();
    assert_eq!(broken.kind, FileKind::Python);
    assert!(broken.error().unwrap().starts_with("Syntax error"));

    let example = report.get("example_lib.py").unwrap();
    assert!(example.error().is_none());
    let functions = example.functions().unwrap();
    assert_eq!(functions.len(), 1);
    assert_eq!(functions[0].name, "calculate_risk");
    assert_eq!(functions[0].line_number, 2);
    assert_eq!(functions[0].return_annotation, "str");
    assert_eq!(
        functions[0].parameters[0].type_annotation,
        AnnotationValue::from("float")
    );

    assert_eq!(report.failures().count(), 1);
    assert!(report.get("README.md").unwrap().error().is_none());
}

/// Test that undecodable source and prose files become error entries.
#[test]
fn test_read_failure_is_contained() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("latin1.py"), b"# caf\xe9\ndef f():\n    pass\n").unwrap();
    fs::write(root.join("latin1.md"), b"# caf\xe9\n").unwrap();
    fs::write(root.join("ok.txt"), "fine\n").unwrap();

    let report = ContextScanner::default().scan_dir(root).unwrap();
    assert!(report.get("latin1.py").unwrap().error().is_some());
    assert!(report.get("latin1.md").unwrap().error().is_some());
    assert!(report.get("ok.txt").unwrap().error().is_none());
}

/// Test nested directories use relative paths and files-first order.
#[test]
fn test_nested_directories() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("skills/git")).unwrap();
    fs::write(root.join("skills/git/commit.py"), "def commit(message: str):\n    pass\n").unwrap();
    fs::write(root.join("skills/SKILL.md"), "# Skills\n").unwrap();
    fs::write(root.join("zzz.txt"), "last at top level\n").unwrap();

    let report = ContextScanner::default().scan_dir(root).unwrap();
    let files: Vec<String> = report
        .entries()
        .iter()
        .map(|e| e.file.replace('\\', "/"))
        .collect();
    assert_eq!(
        files,
        vec!["zzz.txt", "skills/SKILL.md", "skills/git/commit.py"]
    );
}

/// Test that parallel scanning yields the same report as sequential scanning.
#[test]
fn test_parallel_matches_sequential() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    for i in 0..24 {
        fs::write(
            root.join(format!("tool_{i:02}.py")),
            format!("def tool_{i}(x: int) -> str:\n    \"\"\"Tool {i}.\"\"\"\n"),
        )
        .unwrap();
        fs::write(root.join(format!("doc_{i:02}.md")), format!("# Doc {i}\n\nBody {i}\n")).unwrap();
    }

    let sequential = ContextScanner::new(ScanConfig::default())
        .scan_dir(root)
        .unwrap();
    let parallel = ContextScanner::new(ScanConfig::default().with_parallel(true))
        .scan_dir(root)
        .unwrap();
    assert_eq!(sequential, parallel);
    assert_eq!(sequential.len(), 48);
}

/// Test generic summaries are bounded in bytes read and characters kept.
#[test]
fn test_generic_summary_bounds() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("big.log"), "é".repeat(3000)).unwrap();
    fs::write(root.join("wide.csv"), "x".repeat(5000)).unwrap();

    let report = ContextScanner::default().scan_dir(root).unwrap();
    match &report.get("big.log").unwrap().outcome {
        // 2048 bytes hold exactly 1024 two-byte characters
        EntryOutcome::Generic { summary } => assert_eq!(summary.chars().count(), 1024),
        other => panic!("expected generic summary, got {other:?}"),
    }
    match &report.get("wide.csv").unwrap().outcome {
        EntryOutcome::Generic { summary } => assert_eq!(summary.len(), 1024),
        other => panic!("expected generic summary, got {other:?}"),
    }
}

/// Test configured traversal options reach the structural scanner.
#[test]
fn test_config_controls_disclosure() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(
        root.join("nested.py"),
        "def outer():\n    def inner():\n        pass\n\nasync def fetch():\n    pass\n",
    )
    .unwrap();

    let names = |config: ScanConfig| -> Vec<String> {
        let report = ContextScanner::new(config).scan_dir(root).unwrap();
        report.entries()[0]
            .functions()
            .unwrap()
            .iter()
            .map(|f| f.name.clone())
            .collect()
    };

    assert_eq!(names(ScanConfig::default()), vec!["outer", "inner"]);
    assert_eq!(
        names(ScanConfig::default().with_top_level_only(true)),
        vec!["outer"]
    );
    assert_eq!(
        names(ScanConfig::default().with_include_async(true)),
        vec!["outer", "inner", "fetch"]
    );
}

/// Test single-file scans.
#[test]
fn test_scan_file() {
    let temp_dir = fixture();
    let scanner = ContextScanner::default();

    let entry = scanner.scan_file(&temp_dir.path().join("a.py")).unwrap();
    assert_eq!(entry.file, "a.py");
    assert_eq!(entry.kind, FileKind::Python);

    let missing = scanner.scan_file(&temp_dir.path().join("missing.py"));
    assert!(matches!(missing, Err(ScanError::NotFound(_))));

    let functions = scan_python_file(&temp_dir.path().join("a.py")).unwrap();
    assert_eq!(functions[0].description, "No description provided.");
}

/// Test the rendered report is parseable JSON with the expected fields.
#[test]
fn test_rendered_report_json() {
    let temp_dir = fixture();
    let report = ContextScanner::default().scan_dir(temp_dir.path()).unwrap();
    let rendered = render_report(&report).unwrap();

    let (banner, json) = rendered.split_once('\n').unwrap();
    assert_eq!(banner, REPORT_BANNER);
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(value[1]["file"], "a.py");
    assert_eq!(value[1]["type"], "python");
    assert_eq!(value[1]["functions"][0]["name"], "f");
    assert_eq!(value[1]["functions"][0]["return_annotation"], "Unknown");
    assert_eq!(value[1]["functions"][0]["line_number"], 1);
    assert_eq!(value[0]["title"], "Title");
    assert_eq!(value[2]["type"], "generic");
    assert!(value[2].get("summary").is_some());
}

/// Test that Python 2 sources are reported as errors, not disclosed.
#[test]
fn test_python2_source_is_error_entry() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("legacy.py"), "print \"hi\"\n\ndef f():\n    pass\n").unwrap();
    fs::write(root.join("order.py"), "def f(a=1, b):\n    pass\n").unwrap();

    let report = ContextScanner::default().scan_dir(root).unwrap();
    for name in ["legacy.py", "order.py"] {
        let entry = report.get(name).unwrap();
        assert!(entry.functions().is_none());
        assert!(entry.error().unwrap().starts_with("Syntax error"));
    }
}

/// Test that a generic summary keeps a leading byte-order mark.
#[test]
fn test_generic_summary_keeps_bom() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("bom.csv"), b"\xef\xbb\xbfa,b\n").unwrap();

    let report = ContextScanner::default().scan_dir(temp_dir.path()).unwrap();
    assert_eq!(
        report.get("bom.csv").unwrap().outcome,
        EntryOutcome::Generic {
            summary: "\u{feff}a,b\n".to_string(),
        }
    );
}

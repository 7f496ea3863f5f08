use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="32">
  <g transform="scale(2) translate(1, 1)">
    <path d="M 0 0 L 10 0 C 10 5 5 10 0 10 Z"/>
    <rect x="20" y="0" width="5" height="5"/>
  </g>
</svg>
"#;

fn run_svgr(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_svgr"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("run svgr")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn banner_without_arguments_exits_successfully() {
    let dir = tempdir().unwrap();
    let output = run_svgr(&[], dir.path());

    assert!(output.status.success(), "process failed: {output:?}");
    let text = stdout(&output);
    assert!(text.contains("usage: svgr"));
    assert!(!text.contains("Reading input file"));
}

#[test]
fn missing_input_reports_error() {
    let dir = tempdir().unwrap();
    let output = run_svgr(&["nope.svg", "out.svgr"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Error: Input file not found: nope.svg"));
    assert!(!dir.path().join("out.svgr").exists());
}

#[test]
fn empty_output_path_is_rejected_without_writing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("in.svg"), SQUARE).unwrap();
    let output = run_svgr(&["in.svg", ""], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Error: Invalid output file: "));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn converts_document_and_reports_progress() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("in.svg"), SQUARE).unwrap();
    let output = run_svgr(&["in.svg", "out.svgr"], dir.path());

    assert!(output.status.success(), "process failed: {output:?}");
    let text = stdout(&output);
    assert!(text.contains("Reading input file: in.svg"));
    assert!(text.contains("Processing SVG: 0%"));
    assert!(text.contains("Processing SVG: 100%"));
    assert!(text.contains("Processing completed in "));

    let written = fs::read_to_string(dir.path().join("out.svgr")).unwrap();
    assert!(written.starts_with("Rustangelo SVG file ( svgr.rustangelo.com )|64x32|"));
    // First line of the square, scaled then translated
    assert!(written.contains("|1,1,21,1;"));
    assert!(!written.contains('\n'));
}

#[test]
fn threaded_output_matches_sequential() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("in.svg"), SQUARE).unwrap();

    let sequential = run_svgr(&["in.svg", "seq.svgr"], dir.path());
    let threaded = run_svgr(&["in.svg", "par.svgr", "--threaded", "--workers", "3"], dir.path());
    assert!(sequential.status.success() && threaded.status.success());

    assert_eq!(
        fs::read_to_string(dir.path().join("seq.svgr")).unwrap(),
        fs::read_to_string(dir.path().join("par.svgr")).unwrap()
    );
}

#[test]
fn config_file_sets_magic() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("in.svg"), SQUARE).unwrap();
    fs::write(dir.path().join("svgr.toml"), "magic = \"TEST\"\nworkers = 2\n").unwrap();

    let output = run_svgr(&["in.svg", "out.svgr", "--config", "svgr.toml"], dir.path());
    assert!(output.status.success(), "process failed: {output:?}");
    let written = fs::read_to_string(dir.path().join("out.svgr")).unwrap();
    assert!(written.starts_with("TEST|64x32|"));
}

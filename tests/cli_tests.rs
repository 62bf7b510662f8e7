use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn keylabels(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_keylabels"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_cli_list() {
    let output = keylabels(&["list"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Corne Choc Pro"));
    assert!(text.contains("xk42"));
    assert!(text.contains("6,13,20,27,34,41,42,43,44,48,49"));
}

#[test]
fn test_cli_show() {
    let output = keylabels(&["show", "--layout", "42"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("KEYS_L"));
    assert!(text.contains("45 46 47 50 51 52"));
}

#[test]
fn test_cli_unknown_layout() {
    let output = keylabels(&["show", "--layout", "planck"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_header_to_stdout() {
    let output = keylabels(&["header", "--layout", "xk42"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("#define RT0  6"));
    assert!(text.contains("#define THUMBS LH2 LH1 LH0 RH0 RH1 RH2"));
}

#[test]
fn test_cli_validate_builtin() {
    let output = keylabels(&["validate"]);
    assert!(output.status.success(), "{}", stdout(&output));
    assert!(stdout(&output).contains("same label set"));
}

#[test]
fn test_cli_validate_header_files() {
    let dir = tempfile::tempdir().unwrap();
    let output = keylabels(&["header", "--layout", "xk42", "--output", path_arg(dir.path())]);
    assert!(output.status.success());

    let header = dir.path().join("xk42.h");
    assert!(header.exists());

    let ok = keylabels(&["validate", "--header", path_arg(&header), "--against", "xk42"]);
    assert!(ok.status.success(), "{}", stdout(&ok));

    let mismatch = keylabels(&[
        "validate",
        "--header",
        path_arg(&header),
        "--against",
        "corne_choc_pro",
    ]);
    assert!(!mismatch.status.success());
    assert!(stdout(&mismatch).contains("RT0 = 6 but Corne Choc Pro has 7"));

    let broken = dir.path().join("broken.h");
    let text = fs::read_to_string(&header)
        .unwrap()
        .replace("#define RT0  6", "#define RT0  7");
    fs::write(&broken, text).unwrap();
    let bad = keylabels(&["validate", "--header", path_arg(&broken)]);
    assert!(!bad.status.success());
    assert!(stdout(&bad).contains("index 7 bound to both 'RT0' and 'RT1'"));
}

#[test]
fn test_cli_generate() {
    let dir = tempfile::tempdir().unwrap();
    let points = dir.path().join("points.yaml");
    fs::write(
        &points,
        "matrix_c1_r1: {x: 0, y: 0}\nmatrix_c2_r1: {x: 10, y: 0}\nthumbfan_c1_r1: {x: 10, y: -20, r: -15}\n",
    )
    .unwrap();
    let dtsi = dir.path().join("out.dtsi");
    let json = dir.path().join("out.json");

    let output = keylabels(&[
        "generate",
        path_arg(&points),
        "--dtsi",
        path_arg(&dtsi),
        "--json",
        path_arg(&json),
        "--keyboard-id",
        "demo",
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout(&output).contains("Matrix positions: 6 keys total"));

    assert!(fs::read_to_string(&dtsi).unwrap().contains("zmk,physical-layout"));
    assert!(fs::read_to_string(&json).unwrap().contains("\"id\": \"demo\""));
}

#[test]
fn test_cli_generate_without_keys_fails() {
    let dir = tempfile::tempdir().unwrap();
    let points = dir.path().join("points.yaml");
    fs::write(&points, "{\"hole\": {\"x\": 1, \"y\": 1}}").unwrap();

    let output = keylabels(&["generate", path_arg(&points)]);
    assert!(!output.status.success());
}

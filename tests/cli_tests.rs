//! End-to-end tests of the `morphcheck` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const WITH_SOMA: &str = "\
# soma and a short axon
1 1 0 0 0 5 -1
2 2 0 0 5 1 1
3 2 0 0 10 1 2
4 2 0 0 15 1 3
";

const WITH_GAP: &str = "\
1 3 0 0 0 1 -1
2 3 0 0 1 1 1
4 3 0 0 2 1 2
5 3 0 0 3 1 4
";

fn morphcheck(arg: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_morphcheck"))
        .arg(arg)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn single_file_with_soma_and_consecutive_ids() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "neuron.swc", WITH_SOMA);

    let output = morphcheck(&file);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!(
            "\nCheck file {file}...\nHas soma points? True\nConsecutive indices? True\n"
        )
    );
}

#[test]
fn single_file_with_gap_and_no_soma() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "gap.swc", WITH_GAP);

    let output = morphcheck(&file);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(!text.contains("Checking files in directory"));
    assert!(text.contains("Has soma points? False\n"));
    assert!(text.ends_with("Consecutive indices? False\nNon consecutive IDs detected: [4]\n"));
}

#[test]
fn directory_reports_every_morphology_file() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.swc", WITH_SOMA);
    write(tmp.path(), "b.swc", WITH_GAP);
    write(
        tmp.path(),
        "c.asc",
        "((CellBody) (1 1 0 1) (-1 1 0 1) (-1 -1 0 1))\n((Axon) (0 2 0 1) (0 3 0 1))\n",
    );
    write(tmp.path(), "readme.txt", "not a morphology");
    let dir = tmp.path().to_str().unwrap();

    let output = morphcheck(dir);
    assert!(output.status.success());
    let text = stdout(&output);

    let notice = format!("Checking files in directory {dir}\n");
    assert!(text.starts_with(&notice));
    assert_eq!(text.matches("Checking files in directory").count(), 1);
    assert_eq!(text.matches("\nCheck file ").count(), 3);
    assert_eq!(text.matches("Has soma points? True").count(), 2);
    assert_eq!(text.matches("Non consecutive IDs detected: [4]").count(), 1);
    assert!(!text.contains("readme.txt"));
}

#[test]
fn empty_directory_exits_cleanly() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().to_str().unwrap();

    let output = morphcheck(dir);
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("Checking files in directory {dir}\n"));
}

#[test]
fn invalid_path_is_fatal() {
    let output = morphcheck("does/not/exist.swc");
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert_eq!(stderr(&output).trim_end(), "ERROR: Invalid data path does/not/exist.swc");
}

#[test]
fn malformed_file_aborts_the_run() {
    let tmp = TempDir::new().unwrap();
    let file = write(tmp.path(), "broken.swc", "1 1 0 0 0 1 -1\n2 1 0 0\n");

    let output = morphcheck(&file);
    assert!(!output.status.success());
    assert!(!stdout(&output).contains("Check file"));
    assert!(stderr(&output).contains("line 2"));
}

#[test]
fn help_exits_successfully() {
    let output = morphcheck("--help");
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Morphology raw data checker."));
    assert!(text.contains("Examples:"));
}

#[test]
fn missing_argument_is_a_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_morphcheck"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("<DATAPATH>"));
}

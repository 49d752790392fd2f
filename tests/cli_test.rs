use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_command(args: &[&str]) -> Output {
    Command::new("cargo")
        .arg("run")
        .arg("--quiet")
        .arg("--")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_convert_file_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_path = temp_dir.path();

    let input_path = temp_path.join("deck.md");
    fs::write(&input_path, "# Test Slide\n\nThis is a test slide.\n---\n- point")
        .expect("Failed to write input file");

    let output_path = temp_path.join("deck.html");

    let output = run_command(&[
        "-i",
        input_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(output_path.exists(), "Output file was not created");

    let html = fs::read_to_string(&output_path).expect("Failed to read output file");
    assert!(
        html.contains("<div class=\"slide\" id=\"slide1\">"),
        "Missing first slide container"
    );
    assert!(
        html.contains("<div class=\"slide\" id=\"slide2\">"),
        "Missing second slide container"
    );
    assert!(html.contains("<h1>\nTest Slide </h1>"), "Missing heading");
    assert!(html.contains("<li>\npoint </li>"), "Missing list item");
}

#[test]
fn test_output_defaults_to_stdout() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("deck.md");
    fs::write(&input_path, "Hello").expect("Failed to write input file");

    let output = run_command(&["-i", input_path.to_str().unwrap()]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<p>\nHello </p>"), "Missing paragraph on stdout");
}

#[test]
fn test_malformed_input_exits_nonzero() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("deck.md");
    fs::write(&input_path, "****").expect("Failed to write input file");

    let output = run_command(&["-i", input_path.to_str().unwrap()]);

    assert!(!output.status.success(), "Command should have failed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "Missing error report: {}", stderr);
    assert!(
        stderr.contains("emphasis markers"),
        "Missing diagnostic: {}",
        stderr
    );
}

#[test]
fn test_missing_input_file_exits_nonzero() {
    let output = run_command(&["-i", "/no/such/file.md"]);

    assert!(!output.status.success(), "Command should have failed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Could not open file"),
        "Missing error report: {}",
        stderr
    );
}

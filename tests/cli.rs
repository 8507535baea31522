//! CLI integration tests.
//!
//! Tests the command-line interface by running the binary as a subprocess.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

/// Path to the compiled binary
fn binary_path() -> PathBuf {
    // The binary is built in target/debug or target/release
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("site-cards");
    path
}

/// Helper to create a temporary file with content
fn create_temp_file(content: &str, extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(extension)
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const TEST_BIB: &str = "@article{doe2020, title={A Study}, author={Jane Doe and John Smith}, year={2020}, journal={Nature}}";

// ============================================
// Tests for CLI argument parsing
// ============================================

#[test]
fn test_cli_help() {
    // Given: The CLI binary
    let output = Command::new(binary_path())
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    // Then: Help is displayed with expected content
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("site-cards") || stdout.contains("HTML cards"),
        "Help should mention the tool name or purpose: {}",
        stdout
    );
    assert!(output.status.success(), "Help should exit with success");
}

#[test]
fn test_cli_publications_missing_args() {
    // Given: The publications subcommand without an input
    let output = Command::new(binary_path())
        .args(["publications"])
        .output()
        .expect("Failed to execute command");

    // Then: Error is displayed about missing arguments
    assert!(
        !output.status.success(),
        "publications without args should fail"
    );
}

// ============================================
// Tests for the publications subcommand
// ============================================

#[test]
fn test_publications_to_stdout() {
    // Given: A BibTeX file
    let bib = create_temp_file(TEST_BIB, ".bib");

    // When: We render it
    let output = Command::new(binary_path())
        .args(["publications", bib.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    // Then: The card fragment lands on stdout
    assert!(output.status.success(), "should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("A Study"));
    assert!(stdout.contains("Authors: Jane Doe, John Smith | 2020 | Nature"));
}

#[test]
fn test_publications_to_output_file() {
    // Given: A BibTeX file and an output path
    let bib = create_temp_file(TEST_BIB, ".bib");
    let out_dir = tempfile::tempdir().unwrap();
    let out_path = out_dir.path().join("publications.html");

    // When: We render to the file
    let output = Command::new(binary_path())
        .args([
            "publications",
            bib.path().to_str().unwrap(),
            "-o",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    // Then: The file holds the fragment and a summary goes to stderr
    assert!(output.status.success());
    let html = fs::read_to_string(&out_path).unwrap();
    assert!(html.contains("A Study"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 publication(s)"), "stderr: {}", stderr);
}

#[test]
fn test_publications_from_stdin() {
    // Given: BibTeX text on stdin with '-' as the input
    let mut child = Command::new(binary_path())
        .args(["publications", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(TEST_BIB.as_bytes())
        .unwrap();
    let output = child.wait_with_output().expect("Failed to wait on child");

    // Then: The fragment is rendered
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("A Study"));
}

#[test]
fn test_publications_empty_input_renders_placeholder() {
    // Given: An empty BibTeX file
    let bib = create_temp_file("", ".bib");

    // When: We render it
    let output = Command::new(binary_path())
        .args(["publications", bib.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    // Then: Success, with the placeholder paragraph (not an error)
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No publications found."));
}

#[test]
fn test_publications_missing_input_exit_10() {
    let output = Command::new(binary_path())
        .args(["publications", "/nonexistent/publications.bib"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(10));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("hint:"), "stderr: {}", stderr);
}

// ============================================
// Tests for the coauthors subcommand
// ============================================

#[test]
fn test_coauthors_to_stdout() {
    // Given: A CSV file with a name column
    let csv = create_temp_file("name,affiliation\nJane Doe,MIT\nJohn Smith,ETH\n", ".csv");

    // When: We render it
    let output = Command::new(binary_path())
        .args(["coauthors", csv.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    // Then: One card per name
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Jane Doe"));
    assert!(stdout.contains("John Smith"));
}

// ============================================
// Tests for the projects subcommand
// ============================================

#[test]
fn test_projects_cards() {
    // Given: A projects JSON file
    let projects = create_temp_file(
        r#"[{"name": "Project X", "role": "PI", "funding": "$1M", "website": "https://example.com"}]"#,
        ".json",
    );

    // When: We render cards
    let output = Command::new(binary_path())
        .args(["projects", projects.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    // Then: The card carries the badge and Details link
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Project X"));
    assert!(stdout.contains("badge-pi"));
    assert!(stdout.contains("Details"));
}

#[test]
fn test_projects_stats_with_grants() {
    // Given: Projects and grants files
    let projects = create_temp_file(
        r#"[{"name": "P", "role": "PI", "funding": "$2M"}]"#,
        ".json",
    );
    let grants = create_temp_file(r#"[{"name": "G", "funding": "500K"}]"#, ".json");

    // When: We render the stats grid
    let output = Command::new(binary_path())
        .args([
            "projects",
            projects.path().to_str().unwrap(),
            "--grants",
            grants.path().to_str().unwrap(),
            "--stats",
        ])
        .output()
        .expect("Failed to execute command");

    // Then: Both groups appear with their funding totals
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total Projects"));
    assert!(stdout.contains("Total Grants"));
    assert!(stdout.contains("$2.0M"));
    assert!(stdout.contains("$500K"));
}

// ============================================
// Tests for exit codes (semantic: 10-15)
// ============================================

#[test]
fn test_projects_invalid_json_exit_11() {
    // Given: A projects file that is not a JSON array
    let projects = create_temp_file(r#"{"name": "not an array"}"#, ".json");

    // When: We render it
    let output = Command::new(binary_path())
        .args(["projects", projects.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    // Then: Data-format exit code with a hint
    assert_eq!(output.status.code(), Some(11));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("JSON array"), "stderr: {}", stderr);
}

#[test]
fn test_projects_malformed_json_exit_11() {
    // Given: A projects file that is not JSON at all
    let projects = create_temp_file("not json", ".json");

    // When: We render it
    let output = Command::new(binary_path())
        .args(["projects", projects.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    // Then: Same data-format exit code as the not-an-array case
    assert_eq!(output.status.code(), Some(11));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("hint:"), "stderr: {}", stderr);
}

#[test]
fn test_publications_unwritable_output_exit_15() {
    // Given: A valid BibTeX file and an output path under a directory
    // that does not exist
    let bib = create_temp_file(TEST_BIB, ".bib");
    let out_dir = tempfile::tempdir().unwrap();
    let out_path = out_dir.path().join("missing-subdir").join("out.html");

    // When: We render to the unwritable path
    let output = Command::new(binary_path())
        .args([
            "publications",
            bib.path().to_str().unwrap(),
            "-o",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    // Then: Output-file exit code with a hint about the directory
    assert_eq!(output.status.code(), Some(15));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("hint:"), "stderr: {}", stderr);
    assert!(stderr.contains("writable"), "stderr: {}", stderr);
}

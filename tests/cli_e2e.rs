//! End-to-end CLI tests for chatlift.
//!
//! These tests verify the complete CLI workflow by running the actual binary
//! with various arguments and checking the output.
//!
//! # Test Categories
//!
//! - **Basic functionality**: Each action works via CLI
//! - **Output handling**: Default filenames, -o, --stdout
//! - **Metadata**: URL recording
//! - **Error handling**: Proper error messages for bad input
//! - **Edge cases**: Unicode, paths with spaces
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with saved-page fixtures.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    // A typical saved chat page with test-id markers
    let saved_page = r#"<!DOCTYPE html>
<html>
<body>
    <nav><button>New chat</button></nav>
    <div data-testid="conversation">
        <div data-testid="user-message">What is ownership in Rust, in one sentence?</div>
        <div data-testid="assistant-message">A value has exactly one owner, and the compiler proves it.</div>
        <div data-testid="user-message">Great, now explain lifetimes the same way 🎉</div>
    </div>
    <footer><button>Send</button></footer>
</body>
</html>"#;
    fs::write(dir.path().join("saved_page.html"), saved_page).unwrap();

    // A page with nothing extractable
    let no_conversation = r"<html><body>
        <nav><button>Menu</button></nav>
        <footer>All rights reserved.</footer>
    </body></html>";
    fs::write(dir.path().join("no_conversation.html"), no_conversation).unwrap();

    // Unicode-heavy content
    let unicode_page = r#"<html><body>
        <div data-testid="conversation">
            <div data-testid="user-message">Переведи: こんにちは</div>
            <div data-testid="assistant-message">That greeting means hello. 🎉</div>
        </div>
    </body></html>"#;
    fs::write(dir.path().join("unicode_page.html"), unicode_page).unwrap();

    // Not JSON at all, for decode failures
    fs::write(dir.path().join("broken.json"), "this is not json").unwrap();

    dir
}

fn chatlift_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatlift"));
    Command::from_std(cmd)
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_json_action() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("saved_page.html");
        let output = output_path(&fixtures, "out.json");

        chatlift_cmd()
            .args([
                "json",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Done"))
            .stdout(predicate::str::contains("messages"));

        assert!(output.exists());
        let content = fs::read_to_string(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["meta"]["messageCount"], 3);
        assert_eq!(parsed["conversation"][0]["role"], "user");
    }

    #[test]
    fn test_html_action() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("saved_page.html");
        let output = output_path(&fixtures, "out.html");

        chatlift_cmd()
            .args([
                "html",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("<!DOCTYPE html>"));
        assert!(content.contains("exactly one owner"));
        assert!(!content.contains("<script"));
    }

    #[test]
    fn test_lzw_action() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("saved_page.html");
        let output = output_path(&fixtures, "out.json");

        chatlift_cmd()
            .args([
                "lzw",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["meta"]["compression"], "dictionary");
        assert!(parsed["compressedContent"].is_string());
        assert!(parsed.get("conversation").is_none());
    }

    #[test]
    fn test_decode_round_trip() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("saved_page.html");
        let compressed = output_path(&fixtures, "compressed.json");
        let restored = output_path(&fixtures, "restored.json");

        chatlift_cmd()
            .args([
                "lzw",
                input.to_str().unwrap(),
                "-o",
                compressed.to_str().unwrap(),
                "--url",
                "https://claude.ai/chat/xyz",
            ])
            .assert()
            .success();

        chatlift_cmd()
            .args([
                "decode",
                compressed.to_str().unwrap(),
                "-o",
                restored.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Restored 3 messages"));

        let content = fs::read_to_string(&restored).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["meta"]["url"], "https://claude.ai/chat/xyz");
        assert_eq!(parsed["meta"]["compression"], "none");
        let conversation = parsed["conversation"].as_array().unwrap();
        assert_eq!(conversation.len(), 3);
        assert!(
            conversation[1]["content"]
                .as_str()
                .unwrap()
                .contains("exactly one owner")
        );
    }

    #[test]
    fn test_decode_to_html_output() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("saved_page.html");
        let compressed = output_path(&fixtures, "compressed.json");
        let page = output_path(&fixtures, "restored.html");

        chatlift_cmd()
            .args([
                "lzw",
                input.to_str().unwrap(),
                "-o",
                compressed.to_str().unwrap(),
            ])
            .assert()
            .success();

        // The output extension picks the republication format.
        chatlift_cmd()
            .args([
                "decode",
                compressed.to_str().unwrap(),
                "-o",
                page.to_str().unwrap(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&page).unwrap();
        assert!(content.starts_with("<!DOCTYPE html>"));
        assert!(content.contains("exactly one owner"));
    }

    #[test]
    fn test_action_aliases() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("saved_page.html");

        for alias in ["json", "j"] {
            let output = output_path(&fixtures, &format!("out_{}.json", alias));
            chatlift_cmd()
                .args([
                    alias,
                    input.to_str().unwrap(),
                    "-o",
                    output.to_str().unwrap(),
                ])
                .assert()
                .success();
            assert!(output.exists());
        }
    }
}

// ============================================================================
// Output Handling Tests
// ============================================================================

mod output_handling {
    use super::*;

    #[test]
    fn test_default_output_filename() {
        let fixtures = setup_fixtures();

        // Run from the fixtures dir so the default output lands there
        chatlift_cmd()
            .current_dir(fixtures.path())
            .args(["json", "saved_page.html"])
            .assert()
            .success();

        let produced: Vec<String> = fs::read_dir(fixtures.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n.starts_with("conversation-"))
            .collect();
        assert_eq!(produced.len(), 1);
        assert!(produced[0].ends_with(".json"));
    }

    #[test]
    fn test_default_compressed_filename_has_suffix() {
        let fixtures = setup_fixtures();

        chatlift_cmd()
            .current_dir(fixtures.path())
            .args(["lzw", "saved_page.html"])
            .assert()
            .success();

        let produced: Vec<String> = fs::read_dir(fixtures.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n.starts_with("conversation-"))
            .collect();
        assert_eq!(produced.len(), 1);
        assert!(produced[0].ends_with("-compressed.json"));
    }

    #[test]
    fn test_stdout_mode_is_clean_json() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("saved_page.html");

        let assert = chatlift_cmd()
            .args(["json", input.to_str().unwrap(), "--stdout"])
            .assert()
            .success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        // No banner, no summary: the artifact must be pipeable as-is.
        assert!(stdout.trim_start().starts_with('{'));
        let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert!(parsed["conversation"].is_array());
    }

    #[test]
    fn test_stdout_mode_html() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("saved_page.html");

        let assert = chatlift_cmd()
            .args(["html", input.to_str().unwrap(), "--stdout"])
            .assert()
            .success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        assert!(stdout.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_stdout_writes_no_file() {
        let fixtures = setup_fixtures();

        chatlift_cmd()
            .current_dir(fixtures.path())
            .args(["json", "saved_page.html", "--stdout"])
            .assert()
            .success();

        let produced = fs::read_dir(fixtures.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n.starts_with("conversation-"))
            .count();
        assert_eq!(produced, 0);
    }
}

// ============================================================================
// Metadata Tests
// ============================================================================

mod metadata {
    use super::*;

    #[test]
    fn test_url_flag_recorded() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("saved_page.html");
        let output = output_path(&fixtures, "out.json");

        chatlift_cmd()
            .args([
                "json",
                input.to_str().unwrap(),
                "--url",
                "https://claude.ai/chat/abc123",
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("abc123"));

        let content = fs::read_to_string(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["meta"]["url"], "https://claude.ai/chat/abc123");
    }

    #[test]
    fn test_url_defaults_to_input_path() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("saved_page.html");
        let output = output_path(&fixtures, "out.json");

        chatlift_cmd()
            .args([
                "json",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(
            parsed["meta"]["url"]
                .as_str()
                .unwrap()
                .contains("saved_page.html")
        );
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_nonexistent_file() {
        chatlift_cmd()
            .args(["json", "nonexistent_file.html"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
    }

    #[test]
    fn test_page_without_conversation() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("no_conversation.html");

        chatlift_cmd()
            .args(["json", input.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no conversation container"));
    }

    #[test]
    fn test_decode_refuses_non_json() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("broken.json");

        chatlift_cmd()
            .args(["decode", input.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
    }

    #[test]
    fn test_decode_refuses_saved_page() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("saved_page.html");

        chatlift_cmd()
            .args(["decode", input.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
    }

    #[test]
    fn test_invalid_action() {
        chatlift_cmd()
            .args(["csv", "file.html"])
            .assert()
            .failure();
    }

    #[test]
    fn test_missing_input_argument() {
        chatlift_cmd().args(["json"]).assert().failure();
    }
}

// ============================================================================
// Edge Cases
// ============================================================================

mod edge_cases {
    use super::*;

    #[test]
    fn test_unicode_content() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("unicode_page.html");
        let output = output_path(&fixtures, "out.json");

        chatlift_cmd()
            .args([
                "json",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("こんにちは"));
        assert!(content.contains("Переведи"));
        assert!(content.contains("🎉"));
    }

    #[test]
    fn test_unicode_survives_compression_round_trip() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("unicode_page.html");
        let compressed = output_path(&fixtures, "compressed.json");
        let restored = output_path(&fixtures, "restored.json");

        chatlift_cmd()
            .args([
                "lzw",
                input.to_str().unwrap(),
                "-o",
                compressed.to_str().unwrap(),
            ])
            .assert()
            .success();

        chatlift_cmd()
            .args([
                "decode",
                compressed.to_str().unwrap(),
                "-o",
                restored.to_str().unwrap(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&restored).unwrap();
        assert!(content.contains("こんにちは"));
        assert!(content.contains("🎉"));
    }

    #[test]
    fn test_path_with_spaces() {
        let fixtures = setup_fixtures();
        let dir_with_space = fixtures.path().join("path with spaces");
        fs::create_dir_all(&dir_with_space).unwrap();

        let input = dir_with_space.join("saved_page.html");
        fs::copy(fixtures.path().join("saved_page.html"), &input).unwrap();

        let output = dir_with_space.join("output.json");

        chatlift_cmd()
            .args([
                "json",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        assert!(output.exists());
    }
}

// ============================================================================
// Help and Version Tests
// ============================================================================

mod help_and_version {
    use super::*;

    #[test]
    fn test_help_flag() {
        chatlift_cmd()
            .args(["--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("chatlift"))
            .stdout(predicate::str::contains("json"))
            .stdout(predicate::str::contains("lzw"))
            .stdout(predicate::str::contains("html"))
            .stdout(predicate::str::contains("decode"));
    }

    #[test]
    fn test_help_flag_short() {
        chatlift_cmd()
            .args(["-h"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage"));
    }

    #[test]
    fn test_version_flag() {
        chatlift_cmd()
            .args(["--version"])
            .assert()
            .success()
            .stdout(predicate::str::contains("chatlift"))
            .stdout(predicate::str::contains("0.")); // Version starts with 0.
    }
}

// ============================================================================
// Output Verification Tests
// ============================================================================

mod output_verification {
    use super::*;

    #[test]
    fn test_output_shows_banner_and_summary() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("saved_page.html");
        let output = output_path(&fixtures, "out.json");

        chatlift_cmd()
            .args([
                "json",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Action:"))
            .stdout(predicate::str::contains("Input:"))
            .stdout(predicate::str::contains("Summary"))
            .stdout(predicate::str::contains("Total:"))
            .stdout(predicate::str::contains("User:"))
            .stdout(predicate::str::contains("Assistant:"));
    }

    #[test]
    fn test_output_shows_winning_strategies() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("saved_page.html");
        let output = output_path(&fixtures, "out.json");

        chatlift_cmd()
            .args([
                "json",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("conversation-marker"))
            .stdout(predicate::str::contains("role-marker"));
    }
}

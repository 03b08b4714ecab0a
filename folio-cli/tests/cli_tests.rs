//! Integration tests for the Folio CLI

use assert_cmd::Command;
use predicates::prelude::*;

/// Nothing listens on port 1, so every request is refused
const REFUSED_API: &str = "http://127.0.0.1:1";

fn folio() -> Command {
    let mut cmd = Command::cargo_bin("folio-cli").unwrap();
    cmd.env_remove("FOLIO_API_URL")
        .env_remove("FOLIO_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    folio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("edit"))
        .stdout(predicate::str::contains("open"))
        .stdout(predicate::str::contains("--api-url"));
}

#[test]
fn test_version() {
    folio()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn test_show_help() {
    folio()
        .args(["show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Show the details of a book"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_edit_help() {
    folio()
        .args(["edit", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Edit a book"))
        .stdout(predicate::str::contains("--set"))
        .stdout(predicate::str::contains("--touch-all"));
}

#[test]
fn test_open_help() {
    folio()
        .args(["open", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("route path"));
}

#[test]
fn test_show_missing_isbn_argument() {
    folio().arg("show").assert().failure();
}

#[test]
fn test_show_server_down() {
    folio()
        .args(["--api-url", REFUSED_API, "show", "978-0441013593"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Network error. Please check if the API server is running on http://127.0.0.1:1",
        ))
        .stderr(predicate::str::contains("folio list"));
}

#[test]
fn test_list_server_down() {
    folio()
        .args(["--api-url", REFUSED_API, "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Network error"));
}

#[test]
fn test_edit_server_down() {
    folio()
        .args(["--api-url", REFUSED_API, "edit", "978-0441013593"])
        .args(["--set", "title=Dune Messiah"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Network error"));
}

#[test]
fn test_open_unknown_path_falls_back_to_list() {
    folio()
        .args(["--api-url", REFUSED_API, "open", "/authors/42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("showing the book list"))
        .stderr(predicate::str::contains("Network error"));
}

#[test]
fn test_env_api_url() {
    folio()
        .env("FOLIO_API_URL", REFUSED_API)
        .args(["show", "978-0441013593"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("running on http://127.0.0.1:1"));
}

#[test]
fn test_invalid_api_url() {
    folio()
        .args(["--api-url", "ftp://example.com", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_invalid_timeout() {
    folio()
        .args(["--timeout", "soon", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_edit_malformed_assignment() {
    folio()
        .args(["edit", "978-0441013593", "--set", "title"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected field=value"));
}

#[test]
fn test_edit_unknown_field() {
    folio()
        .args(["edit", "978-0441013593", "--set", "isbn=123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown field"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn booklist_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("booklist"));
    cmd.env_remove("BOOKLIST_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("booklist.yml");
    fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    booklist_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL"));
}

#[test]
fn test_version() {
    booklist_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("booklist"));
}

#[test]
fn test_missing_config_file() {
    booklist_cmd()
        .args(["--config", "/definitely/not/here.yml", "schema"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

// =============================================================================
// Schema
// =============================================================================

#[test]
fn test_schema_prints_sdl() {
    booklist_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Book"))
        .stdout(predicate::str::contains("type Author"))
        .stdout(predicate::str::contains("author: Author!"))
        .stdout(predicate::str::contains("deleteBook(id: Int!): [Book]"));
}

// =============================================================================
// GraphQL
// =============================================================================

#[test]
fn test_query_seeded_authors() {
    booklist_cmd()
        .args(["query", "{ authors { id name } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("J. K. Rowling"))
        .stdout(predicate::str::contains("J. R. R. Tolkien"))
        .stdout(predicate::str::contains("Brent Weeks"));
}

#[test]
fn test_query_book_with_author() {
    booklist_cmd()
        .args(["query", "{ book(id: 4) { name author { name } } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Fellowship of the Ring"))
        .stdout(predicate::str::contains("J. R. R. Tolkien"));
}

#[test]
fn test_query_with_variables() {
    booklist_cmd()
        .args([
            "query",
            "query Find($id: Int) { author(id: $id) { name } }",
            "--variables",
            r#"{"id": 3}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brent Weeks"));
}

#[test]
fn test_query_with_invalid_variables() {
    booklist_cmd()
        .args(["query", "{ books { id } }", "--variables", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Variables must be a JSON object"));
}

#[test]
fn test_mutate_add_author() {
    booklist_cmd()
        .args(["mutate", r#"addAuthor(name: "Ursula K. Le Guin") { id name }"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 4"))
        .stdout(predicate::str::contains("Ursula K. Le Guin"));
}

#[test]
fn test_mutate_missing_argument_reports_error() {
    booklist_cmd()
        .args(["mutate", r#"addBook(name: "X") { id }"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("errors"))
        .stdout(predicate::str::contains("authorId"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_disables_seed() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "library:\n  seed: false\n");

    booklist_cmd()
        .arg("--config")
        .arg(&path)
        .args(["query", "{ books { id } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"books\": []"));
}

#[test]
fn test_config_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "library:\n  seed: false\n");

    booklist_cmd()
        .env("BOOKLIST_CONFIG", &path)
        .args(["query", "{ authors { id } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"authors\": []"));
}

#[test]
fn test_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "server:\n  port: not-a-number\n");

    booklist_cmd()
        .arg("--config")
        .arg(&path)
        .arg("schema")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

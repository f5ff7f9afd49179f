#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn slashcmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("slashcmd").unwrap();
    cmd.current_dir(dir.path()).env("HOME", dir.path().join("home"));
    cmd
}

fn project_file(dir: &TempDir, name: &str) -> std::path::PathBuf {
    dir.path().join(".claude/commands").join(format!("{name}.md"))
}

// ---------------------------------------------------------------------------
// Happy paths
// ---------------------------------------------------------------------------

#[test]
fn basic_command_in_project_scope() {
    let dir = TempDir::new().unwrap();

    slashcmd(&dir)
        .arg("review-pr")
        .write_stdin("Review a pull request\nCheck for bugs and style issues\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating slash command: /review-pr"))
        .stdout(predicate::str::contains("Type: basic"))
        .stdout(predicate::str::contains("Scope: project"))
        .stdout(predicate::str::contains("Created slash command: .claude/commands/review-pr.md"))
        .stdout(predicate::str::contains("You can now use it with: /review-pr"))
        .stdout(predicate::str::contains(
            "Edit the file to customize further: .claude/commands/review-pr.md",
        ));

    let content = fs::read_to_string(project_file(&dir, "review-pr")).unwrap();
    assert_eq!(
        content,
        "---\ndescription: Review a pull request\n---\n\nCheck for bugs and style issues\n\n$ARGUMENTS\n"
    );
}

#[test]
fn multi_arg_blank_answers_use_defaults() {
    let dir = TempDir::new().unwrap();

    slashcmd(&dir)
        .args(["move-files", "--template", "multi-arg"])
        .write_stdin("Move files\nMove $1 to $2\n\n\n")
        .assert()
        .success();

    let content = fs::read_to_string(project_file(&dir, "move-files")).unwrap();
    assert!(content.contains("argument-hint: <arg1> <arg2>\n"));
    assert!(content.contains("allowed-tools: [CreateFile, Edit]\n"));
    assert!(content.contains("Move $1 to $2\n"));
}

#[test]
fn file_analysis_template() {
    let dir = TempDir::new().unwrap();

    slashcmd(&dir)
        .args(["lint_file", "--project", "--template", "file-analysis"])
        .write_stdin("Lint a file\nLook for smells\n")
        .assert()
        .success();

    let content = fs::read_to_string(project_file(&dir, "lint_file")).unwrap();
    assert!(content.contains("allowed-tools: [View]\n"));
    assert!(content.contains("Analyze the file: @$1\n"));
    assert!(content.contains("Look for smells\n"));
}

#[test]
fn git_workflow_template() {
    let dir = TempDir::new().unwrap();

    slashcmd(&dir)
        .args(["recap", "--template", "git-workflow"])
        .write_stdin("Recap work\nSummarize\n")
        .assert()
        .success();

    let content = fs::read_to_string(project_file(&dir, "recap")).unwrap();
    assert!(content.contains("!git status\n"));
    assert!(content.contains("!git log --oneline -5\n"));
}

#[test]
fn user_scope_writes_under_home() {
    let dir = TempDir::new().unwrap();

    slashcmd(&dir)
        .args(["mine", "--user"])
        .write_stdin("Personal\nDo the thing\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Scope: user"));

    assert!(dir.path().join("home/.claude/commands/mine.md").exists());
    assert!(!project_file(&dir, "mine").exists());
}

// ---------------------------------------------------------------------------
// Validation failures
// ---------------------------------------------------------------------------

#[test]
fn invalid_name_exits_before_prompting() {
    let dir = TempDir::new().unwrap();

    slashcmd(&dir)
        .arg("bad name!")
        .write_stdin("desc\nprompt\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Error: Command name must be alphanumeric (with - or _)",
        ))
        .stdout(predicate::str::contains("Description").not());

    assert!(!dir.path().join(".claude").exists());
}

#[test]
fn both_scope_flags_exit_one() {
    let dir = TempDir::new().unwrap();

    slashcmd(&dir)
        .args(["x", "--project", "--user"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: Cannot specify both --project and --user"));

    assert!(!dir.path().join(".claude").exists());
    assert!(!dir.path().join("home").exists());
}

#[test]
fn missing_description_exits_one() {
    let dir = TempDir::new().unwrap();

    slashcmd(&dir)
        .arg("empty")
        .write_stdin("   \n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: Description is required"))
        .stdout(predicate::str::contains("\x1b").not());

    assert!(!project_file(&dir, "empty").exists());
}

#[test]
fn missing_prompt_exits_one() {
    let dir = TempDir::new().unwrap();

    slashcmd(&dir)
        .arg("empty")
        .write_stdin("desc\n\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: Prompt is required"));
}

#[test]
fn unknown_template_is_a_usage_error() {
    let dir = TempDir::new().unwrap();

    slashcmd(&dir)
        .args(["x", "--template", "fancy"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// Existing files
// ---------------------------------------------------------------------------

#[test]
fn declining_overwrite_keeps_file_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    let path = project_file(&dir, "keep");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "hand edited\n").unwrap();

    slashcmd(&dir)
        .arg("keep")
        .write_stdin("desc\nprompt\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists. Overwrite? (y/N): "))
        .stdout(predicate::str::contains("Cancelled."));

    assert_eq!(fs::read_to_string(&path).unwrap(), "hand edited\n");
}

#[test]
fn padded_overwrite_answer_declines() {
    let dir = TempDir::new().unwrap();
    let path = project_file(&dir, "padded");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "hand edited\n").unwrap();

    slashcmd(&dir)
        .arg("padded")
        .write_stdin("desc\nprompt\n Y \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."));

    assert_eq!(fs::read_to_string(&path).unwrap(), "hand edited\n");
}

#[test]
fn confirming_overwrite_replaces_file() {
    let dir = TempDir::new().unwrap();
    let path = project_file(&dir, "replace");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "old\n").unwrap();

    slashcmd(&dir)
        .arg("replace")
        .write_stdin("New description\nNew prompt\nY\n")
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("description: New description\n"));
}

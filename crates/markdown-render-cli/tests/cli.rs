use pretty_assertions::assert_eq;
use std::{fs, path::Path, process::Command};
use tempfile::TempDir;

const NO_CONFIG: &str = "no-config.toml";

/// Runs the binary in `dir` with an explicit config path, so the user's own
/// config never leaks into a test. Pass a missing file for built-in defaults.
fn markdown_render(dir: &Path, config: &str, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_markdown-render"))
        .current_dir(dir)
        .args(["--config", config])
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn prints_ansi_to_stdout_by_default() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("doc.md"), "This is **bold** text.").unwrap();

    let output = markdown_render(temp_dir.path(), NO_CONFIG, &["doc.md"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "This is \x1b[1mbold\x1b[0m text.\n\n"
    );
}

#[test]
fn writes_html_to_out_file_by_default() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("doc.md"), "This is _italic_ text.").unwrap();

    let output = markdown_render(
        temp_dir.path(),
        NO_CONFIG,
        &["doc.md", "--out", "site/doc.html"],
    );

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("site/doc.html")).unwrap(),
        "<p>This is <i>italic</i> text.</p>"
    );
}

#[test]
fn format_flag_overrides_destination_default() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("doc.md"), "`code`").unwrap();

    let output = markdown_render(
        temp_dir.path(),
        NO_CONFIG,
        &["doc.md", "--format", "html"],
    );

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "<p><tt>code</tt></p>\n"
    );
}

#[test]
fn config_file_sets_stdout_default() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("doc.md"), "**x**").unwrap();
    fs::write(
        temp_dir.path().join("config.toml"),
        "stdout_format = \"html\"\n",
    )
    .unwrap();

    let output = markdown_render(temp_dir.path(), "config.toml", &["doc.md"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "<p><b>x</b></p>\n");
}

#[test]
fn missing_input_fails_with_message() {
    let temp_dir = TempDir::new().unwrap();

    let output = markdown_render(temp_dir.path(), NO_CONFIG, &["missing.md"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error reading file missing.md"));
}

#[test]
fn invalid_config_fails_with_message() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("doc.md"), "text").unwrap();
    fs::write(temp_dir.path().join("config.toml"), "file_format = 3\n").unwrap();

    let output = markdown_render(temp_dir.path(), "config.toml", &["doc.md"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to parse config file"));
}

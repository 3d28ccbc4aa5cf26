// refilter/tests/cli_integration_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn refilter() -> Command {
    Command::cargo_bin("refilter").expect("binary under test")
}

#[test]
fn no_arguments_prints_help_and_fails() {
    refilter()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn filter_passes_stdin_through_enabled_presets() {
    refilter()
        .args(["filter", "--enable", "remove_markdown_bold", "--quiet"])
        .write_stdin("**hi** there")
        .assert()
        .success()
        .stdout("hi there");
}

#[test]
fn filter_without_rules_is_identity() {
    refilter()
        .args(["filter", "--quiet"])
        .write_stdin("**kept** <think>kept</think>")
        .assert()
        .success()
        .stdout("**kept** <think>kept</think>");
}

#[test]
fn rules_lists_active_rule_names() {
    refilter()
        .args([
            "rules",
            "--enable",
            "remove_markdown_bold,remove_think_tag",
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 rule(s) active"))
        .stdout(predicate::str::contains("[preset] Markdown粗体"))
        .stdout(predicate::str::contains("[preset] 思考标签"));
}

#[test]
fn rules_warns_on_unknown_preset_key() {
    refilter()
        .args(["rules", "--enable", "no_such_preset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 rule(s) active"))
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_command_expands_literal_newlines_and_reports() {
    refilter()
        .args([
            "test",
            "**hi**\\nplain",
            "--enable",
            "remove_markdown_bold",
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("-- before --"))
        .stdout(predicate::str::contains("**hi**\nplain"))
        .stdout(predicate::str::contains("-- after --"))
        .stdout(predicate::str::contains("hi\nplain"))
        .stdout(predicate::str::contains(
            "rules fired: [preset] Markdown粗体",
        ));
}

#[test]
fn test_command_reports_when_nothing_fires() {
    refilter()
        .args(["test", "plain text", "--enable", "remove_think_tag", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no rules fired"));
}

#[test]
fn test_command_diff_output() {
    refilter()
        .args([
            "test",
            "**hi** there",
            "--diff",
            "--enable",
            "remove_markdown_bold",
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("+hi there"));
}

#[test]
fn filter_uses_custom_rules_from_config_file() -> anyhow::Result<()> {
    let yaml_content = r#"
custom_rules:
  - name: strip-foo
    pattern: "foo"
    replacement: "bar"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    refilter()
        .args(["filter", "--quiet", "--config"])
        .arg(file.path())
        .write_stdin("foofoo")
        .assert()
        .success()
        .stdout("barbar");
    Ok(())
}

#[test]
fn disabled_plugin_in_config_is_a_no_op() -> anyhow::Result<()> {
    let yaml_content = r#"
enable_plugin: false
remove_markdown_bold: true
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    refilter()
        .args(["filter", "--quiet", "--config"])
        .arg(file.path())
        .write_stdin("**kept**")
        .assert()
        .success()
        .stdout("**kept**");
    Ok(())
}

#[test]
fn missing_config_file_is_a_hard_error() {
    refilter()
        .args(["rules", "--config", "/definitely/not/here.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

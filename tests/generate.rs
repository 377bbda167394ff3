//! End-to-end tests: descriptor tables on disk to generated text.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use stylegen::{generate, validate_tables, EmitOptions, GenError, Tables};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn fixture_tables() -> Tables {
    let dir = fixtures_dir();
    Tables::load(&dir.join("style.csv"), &dir.join("colors.csv")).unwrap()
}

fn stylegen(cwd: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_stylegen"))
        .args(args)
        .current_dir(cwd)
        .output()
        .unwrap()
}

#[test]
fn fixture_output() {
    let text = generate(&fixture_tables(), &EmitOptions::default()).to_string();
    insta::assert_snapshot!("fixture_output", text);
}

#[test]
fn rows_map_to_fragments_in_order() {
    let tables = fixture_tables();
    let generated = generate(&tables, &EmitOptions::default());

    let saved: Vec<&str> = generated
        .style_save
        .iter()
        .filter_map(|l| l.trim().strip_prefix("out << YAML::Key << \""))
        .map(|rest| rest.trim_end_matches("\";"))
        .filter(|name| *name != "style")
        .collect();
    let loaded: Vec<&str> = generated
        .style_load
        .iter()
        .filter_map(|l| l.strip_prefix("if (style[\""))
        .map(|rest| rest.trim_end_matches("\"]) {"))
        .collect();
    let names: Vec<&str> = tables.style.iter().map(|f| f.name.as_str()).collect();

    assert_eq!(saved, names);
    assert_eq!(loaded, names);
}

#[test]
fn output_is_deterministic() {
    let first = generate(&fixture_tables(), &EmitOptions::default()).to_string();
    let second = generate(&fixture_tables(), &EmitOptions::default()).to_string();
    assert_eq!(first, second);
}

#[test]
fn fixture_tables_validate_cleanly() {
    assert!(validate_tables(&fixture_tables()).is_ok());
}

#[test]
fn indent_shifts_code_but_not_banners() {
    let text = generate(&fixture_tables(), &EmitOptions { indent: 8 }).to_string();

    for line in text.lines() {
        if line.starts_with("-----------") {
            continue;
        }
        assert!(line.starts_with("        "), "not indented: {line:?}");
    }
}

#[test]
fn unknown_type_fails_load() {
    let dir = tempdir().unwrap();
    let style = dir.path().join("style.csv");
    let colors = dir.path().join("colors.csv");
    fs::write(&style, "float,Alpha,\nint,Count,\"a count\"\n").unwrap();
    fs::write(&colors, "Text,\n").unwrap();

    match Tables::load(&style, &colors).unwrap_err() {
        GenError::UnknownType { path, line, token } => {
            assert_eq!(path, style);
            assert_eq!(line, 2);
            assert_eq!(token, "int");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_color_table() {
    let dir = tempdir().unwrap();
    let style = dir.path().join("style.csv");
    fs::write(&style, "float,Alpha,\n").unwrap();

    let err = Tables::load(&style, &dir.path().join("colors.csv")).unwrap_err();
    assert!(matches!(err, GenError::FileNotFound { .. }));
}

#[test]
fn binary_generates_from_working_directory() {
    let dir = tempdir().unwrap();
    fs::copy(fixtures_dir().join("style.csv"), dir.path().join("style.csv")).unwrap();
    fs::copy(fixtures_dir().join("colors.csv"), dir.path().join("colors.csv")).unwrap();

    let output = stylegen(dir.path(), &[]);

    assert!(output.status.success());
    let expected = generate(&fixture_tables(), &EmitOptions::default()).to_string();
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

#[test]
fn binary_reads_manifest() {
    let dir = tempdir().unwrap();
    let tables = dir.path().join("tables");
    fs::create_dir_all(&tables).unwrap();
    fs::copy(fixtures_dir().join("style.csv"), tables.join("s.csv")).unwrap();
    fs::copy(fixtures_dir().join("colors.csv"), tables.join("c.csv")).unwrap();
    fs::write(
        dir.path().join("stylegen.yaml"),
        "style: tables/s.csv\ncolors: tables/c.csv\nindent: 4\n",
    )
    .unwrap();

    let output = stylegen(dir.path(), &["generate", "--quiet"]);

    assert!(output.status.success());
    let expected = generate(&fixture_tables(), &EmitOptions { indent: 4 }).to_string();
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
    assert!(output.stderr.is_empty());
}

#[test]
fn binary_fails_without_output_on_unknown_type() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("style.csv"), "int,Count,\n").unwrap();
    fs::write(dir.path().join("colors.csv"), "Text,\n").unwrap();

    let output = stylegen(dir.path(), &[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("int"));
}

#[test]
fn binary_fails_on_missing_tables() {
    let dir = tempdir().unwrap();
    let output = stylegen(dir.path(), &["generate"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn binary_rejects_duplicate_names() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("style.csv"), "float,Alpha,\n").unwrap();
    fs::write(dir.path().join("colors.csv"), "Text,\nText,again\n").unwrap();

    let generate = stylegen(dir.path(), &[]);
    assert!(!generate.status.success());
    assert!(generate.stdout.is_empty());

    let check = stylegen(dir.path(), &["check"]);
    let stderr = String::from_utf8_lossy(&check.stderr);
    assert!(!check.status.success());
    assert!(stderr.contains("duplicate-name"));
    assert!(stderr.contains("colors.csv:2: name 'Text' already used on line 1"));
}

#[test]
fn binary_accepts_table_flags_without_subcommand() {
    let dir = tempdir().unwrap();
    fs::copy(fixtures_dir().join("style.csv"), dir.path().join("s.csv")).unwrap();
    fs::copy(fixtures_dir().join("colors.csv"), dir.path().join("c.csv")).unwrap();

    let output = stylegen(dir.path(), &["--style", "s.csv", "--colors", "c.csv"]);

    assert!(output.status.success());
    let expected = generate(&fixture_tables(), &EmitOptions::default()).to_string();
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

#[test]
fn binary_lists_json() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("style.csv"), "ImVec2,WindowPadding,pad\n").unwrap();
    fs::write(dir.path().join("colors.csv"), "Text,\n").unwrap();

    let output = stylegen(dir.path(), &["list", "--json", "-q"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["style"][0]["type"], "ImVec2");
    assert_eq!(value["style"][0]["name"], "WindowPadding");
    assert_eq!(value["style"][0]["doc"], "pad");
    assert_eq!(value["colors"][0]["name"], "Text");
}

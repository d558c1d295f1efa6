//! Integration tests for theme generation from a tokens directory.
//!
//! Uses the starter token set in `test-fixtures/starter`, which mirrors the
//! layout of a site's `resources/design-tokens` directory.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use theme_tokens::{Theme, TokenError, generate_theme_css, write_theme};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test-fixtures/starter")
}

/// Copy the starter fixtures into a scratch directory so tests can mutate them.
fn scratch_tokens() -> TempDir {
    let dir = TempDir::new().unwrap();
    for entry in fs::read_dir(fixture_dir()).unwrap() {
        let entry = entry.unwrap();
        fs::copy(entry.path(), dir.path().join(entry.file_name())).unwrap();
    }
    dir
}

fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_starter_theme_css() {
    let css = generate_theme_css(&fixture_dir()).unwrap();

    insta::assert_snapshot!(css, @r#"
    /* This file is generated from design tokens. Do not edit it directly. */

    @theme {
      --color-dark: #1a1a1a;
      --color-light: #fafafa;
      --color-light-shade: #eef3ff;
      --color-primary: #0042bf;
      --font-base: Inter, 'Segoe UI', Roboto, sans-serif;
      --font-mono: ui-monospace, monospace;
      --font-weight-regular: 400;
      --font-weight-bold: 700;
      --leading-flat: 1;
      --leading-fine: 1.2;
      --leading-standard: 1.5;
      --text-step-0: clamp(1rem, 0.96rem + 0.21vw, 1.125rem);
      --text-step-1: clamp(1.125rem, 1.04rem + 0.42vw, 1.375rem);
      --text-step-2: clamp(1.5rem, 1.33rem + 0.83vw, 2rem);
      --text-step-5: 3rem;
      --spacing-3xs: 0.25rem;
      --spacing-xs: clamp(0.5rem, 0.46rem + 0.21vw, 0.625rem);
      --spacing-s: clamp(1rem, 0.92rem + 0.42vw, 1.25rem);
      --spacing-l: clamp(2rem, 1.67rem + 1.67vw, 3rem);
    }
    "#);
}

#[test]
fn test_sections_follow_manifest_order() {
    let theme = Theme::load(&fixture_dir()).unwrap();
    let prefixes: Vec<&str> = theme.sections.iter().map(|s| s.prefix).collect();
    assert_eq!(
        prefixes,
        vec!["color", "font", "font-weight", "leading", "text", "spacing"]
    );
    assert_eq!(theme.len(), 19);
}

#[test]
fn test_write_is_idempotent() {
    let tokens = scratch_tokens();
    let out = TempDir::new().unwrap();
    let output_path = out.path().join("css/theme.css");

    let first = write_theme(tokens.path(), &output_path).unwrap();
    assert!(first.written);
    let content = fs::read_to_string(&output_path).unwrap();

    let second = write_theme(tokens.path(), &output_path).unwrap();
    assert!(!second.written);
    assert_eq!(fs::read_to_string(&output_path).unwrap(), content);
}

#[test]
fn test_write_reports_change_after_token_edit() {
    let tokens = scratch_tokens();
    let out = TempDir::new().unwrap();
    let output_path = out.path().join("theme.css");

    assert!(write_theme(tokens.path(), &output_path).unwrap().written);

    write_file(
        tokens.path(),
        "colors.json",
        r##"{"items": [{"name": "Primary", "value": "#ff0000"}]}"##,
    );
    assert!(write_theme(tokens.path(), &output_path).unwrap().written);

    let css = fs::read_to_string(&output_path).unwrap();
    assert!(css.contains("--color-primary: #ff0000;"));
    assert!(!css.contains("--color-dark"));
}

#[test]
fn test_duplicate_slug_fails_and_leaves_output_alone() {
    let tokens = scratch_tokens();
    let out = TempDir::new().unwrap();
    let output_path = out.path().join("theme.css");
    assert!(write_theme(tokens.path(), &output_path).unwrap().written);
    let before = fs::read_to_string(&output_path).unwrap();

    write_file(
        tokens.path(),
        "colors.json",
        r##"{"items": [{"name": "Light Shade", "value": "#eee"}, {"name": "light shade", "value": "#fff"}]}"##,
    );

    let err = write_theme(tokens.path(), &output_path).unwrap_err();
    assert!(matches!(err, TokenError::DuplicateToken { ref slug } if slug == "light-shade"));
    assert_eq!(fs::read_to_string(&output_path).unwrap(), before);
}

#[test]
fn test_missing_tokens_dir_fails_and_leaves_output_alone() {
    let site = TempDir::new().unwrap();
    let output_path = site.path().join("theme.css");
    fs::write(&output_path, "@theme {\n  --color-primary: red;\n}\n").unwrap();
    let misspelled = site.path().join("design-tokns");

    let err = write_theme(&misspelled, &output_path).unwrap_err();
    assert!(matches!(err, TokenError::Io { ref path, .. } if *path == misspelled));
    assert!(err.to_string().contains("design-tokns"));
    assert_eq!(
        fs::read_to_string(&output_path).unwrap(),
        "@theme {\n  --color-primary: red;\n}\n"
    );
}

#[test]
fn test_invalid_file_is_named_in_error() {
    let tokens = scratch_tokens();
    write_file(
        tokens.path(),
        "text-sizes.json",
        r#"{"items": [{"name": "Step 0", "min": 16}]}"#,
    );

    let err = generate_theme_css(tokens.path()).unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("text-sizes.json"));
}

#[test]
fn test_inverted_range_in_file_is_rejected() {
    let tokens = scratch_tokens();
    write_file(
        tokens.path(),
        "spacing.json",
        r#"{"items": [{"name": "s", "min": 20, "max": 16}]}"#,
    );

    let err = generate_theme_css(tokens.path()).unwrap_err();
    assert!(matches!(err, TokenError::InvertedRange { .. }));
}

#[test]
fn test_unknown_json_files_are_ignored() {
    let tokens = scratch_tokens();
    write_file(tokens.path(), "notes.json", r#"{"anything": true}"#);

    let with_extra = generate_theme_css(tokens.path()).unwrap();
    assert_eq!(with_extra, generate_theme_css(&fixture_dir()).unwrap());
}

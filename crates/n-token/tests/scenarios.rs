//! End-to-end runs of `validate_tokens` against token sources on disk.

use std::fs;
use std::path::PathBuf;

use n_token::{
    AliasMap, AliasRef, ErrorCode, LoadError, SourceLocation, ValidationReport, ValidatorConfig,
    load_alias_map, validate_tokens,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────

fn write_source(dir: &TempDir, tokens: &Value) -> SourceLocation {
    let path = dir.path().join("index.dtcg.json");
    fs::write(&path, serde_json::to_string_pretty(tokens).unwrap()).unwrap();
    SourceLocation::File(path)
}

fn clean_tokens() -> Value {
    json!({
        "color": {
            "background": {
                "light": { "primary": { "value": "#ffffff", "type": "color" } },
                "dark":  { "primary": { "value": "#0b0b0f", "type": "color" } }
            },
            "text": {
                "light": { "primary": { "value": "#18181b", "type": "color" } },
                "dark":  { "primary": { "value": "#fafafa", "type": "color" } }
            }
        },
        "space": { "md": { "value": "16px" } },
        "type": {
            "body": {
                "size": { "value": "16px" },
                "weight": { "value": "400" },
                "lineHeight": { "value": "1.5" }
            }
        }
    })
}

fn clean_aliases() -> AliasMap {
    AliasMap::new()
        .with_color("background", "primary", "light", AliasRef::path("color.background.light.primary"))
        .with_color("background", "primary", "dark", AliasRef::path("color.background.dark.primary"))
        .with_color("text", "primary", "light", AliasRef::path("color.text.light.primary"))
        .with_color("text", "primary", "dark", AliasRef::path("color.text.dark.primary"))
        .with_alias("space", "gutter", AliasRef::path("space.md"))
        .with_alias("radius", "pill", AliasRef::value("9999px"))
        .with_alias("type", "body", AliasRef::path("type.body"))
}

fn run(tokens: &Value, aliases: &AliasMap) -> ValidationReport {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(&dir, tokens);
    validate_tokens(&source, aliases, &ValidatorConfig::default()).unwrap()
}

// ── Scenarios ────────────────────────────────────────────────────────

#[test]
fn clean_pass() {
    let report = run(&clean_tokens(), &clean_aliases());
    assert_eq!(report, ValidationReport::default());
}

#[test]
fn missing_dark_key() {
    let mut tokens = clean_tokens();
    tokens["color"]["background"]["dark"] = json!({});
    // Without the dark alias too, resolution would also report it.
    let mut aliases = clean_aliases();
    aliases.color["background"]["primary"].shift_remove("dark");

    let report = run(&tokens, &aliases);
    assert_eq!(report.errors.len(), 1, "{report}");
    assert_eq!(report.errors[0].code, ErrorCode::ModeMissing);
    assert!(report.errors[0].message.contains("background"));
    assert!(report.errors[0].suggestion.contains("Missing in dark: primary."));
}

#[test]
fn dangling_alias() {
    let aliases = clean_aliases().with_color(
        "background",
        "secondary",
        "light",
        AliasRef::path("color.background.light.secondary"),
    );

    let report = run(&clean_tokens(), &aliases);
    assert_eq!(report.errors.len(), 1, "{report}");
    assert_eq!(report.errors[0].code, ErrorCode::AliasMissing);
    assert!(report.errors[0].message.contains("background.secondary.light"));
}

#[test]
fn literal_color_alias_is_never_accepted() {
    let aliases = clean_aliases().with_color("text", "primary", "light", AliasRef::value("#112233"));
    let report = run(&clean_tokens(), &aliases);
    assert_eq!(report.with_code(ErrorCode::AliasRawValue).count(), 1, "{report}");
}

#[test]
fn failing_contrast_in_dark_mode() {
    let mut tokens = clean_tokens();
    tokens["color"]["text"]["dark"]["primary"]["value"] = json!("#27272a");

    let report = run(&tokens, &clean_aliases());
    assert_eq!(report.errors.len(), 1, "{report}");
    assert_eq!(report.errors[0].code, ErrorCode::ContrastFail);
    assert!(report.errors[0].message.contains("in dark mode"));
}

#[test]
fn uncovered_light_token() {
    let mut tokens = clean_tokens();
    tokens["color"]["text"]["light"]["muted"] = json!({ "value": "#52525b" });
    tokens["color"]["text"]["dark"]["muted"] = json!({ "value": "#a1a1aa" });

    let report = run(&tokens, &clean_aliases());
    assert_eq!(report.errors.len(), 1, "{report}");
    assert_eq!(report.errors[0].code, ErrorCode::AliasValueMissing);
    assert!(report.errors[0].message.ends_with(": muted"));
}

#[test]
fn determinism() {
    let mut tokens = clean_tokens();
    tokens["color"]["icon"] = json!({ "light": { "a": { "value": "#000000" } } });
    tokens["color"]["text"]["light"]["primary"]["value"] = json!("#eeeeee");
    let aliases = clean_aliases()
        .with_color("border", "x", "dark", AliasRef::path("color.border.dark.x"))
        .with_alias("space", "odd", AliasRef::value("13px"));

    let dir = tempfile::tempdir().unwrap();
    let source = write_source(&dir, &tokens);
    let config = ValidatorConfig::default();
    let first = validate_tokens(&source, &aliases, &config).unwrap();
    let second = validate_tokens(&source, &aliases, &config).unwrap();

    assert!(first.errors.len() >= 4, "{first}");
    assert_eq!(first, second);
}

#[test]
fn source_is_reloaded_on_every_call() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(&dir, &clean_tokens());
    let config = ValidatorConfig::default();
    assert!(validate_tokens(&source, &clean_aliases(), &config).unwrap().is_clean());

    let mut broken = clean_tokens();
    broken["color"]["background"]["dark"] = json!({});
    write_source(&dir, &broken);
    assert!(!validate_tokens(&source, &clean_aliases(), &config).unwrap().is_clean());
}

// ── Load failures ────────────────────────────────────────────────────

#[test]
fn malformed_source_fails_the_whole_run() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("index.dtcg.json");
    fs::write(&path, "{ not json").unwrap();

    let result = validate_tokens(&SourceLocation::File(path), &clean_aliases(), &ValidatorConfig::default());
    assert!(matches!(result, Err(LoadError::Json { .. })));
}

#[test]
fn alias_map_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aliases.json");
    fs::write(&path, serde_json::to_string(&clean_aliases()).unwrap()).unwrap();
    assert_eq!(load_alias_map(&path).unwrap(), clean_aliases());
}

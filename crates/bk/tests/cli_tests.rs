//! CLI integration tests via the JSON interface.

mod test_helpers;
use test_helpers::{bk_bin, bk_json, bk_stdout};

use std::io::Write;

fn write_tmp(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    path.to_string_lossy().to_string()
}

// ── check ───────────────────────────────────────────────────────

#[test]
fn sample_answers_check_passes_strict() {
    let v = bk_json(
        &["check", "samples/answers.json", "--strict", "--json"],
        0,
    );
    assert_eq!(v[0]["pass"], true);
    assert!(v[0]["errors"].as_array().unwrap().is_empty());
}

#[test]
fn missing_required_field_fails_check() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_tmp(
        &dir,
        "incomplete.json",
        r#"{
            "business_stage": "launch",
            "business_type": "product",
            "target_age_group": "thirties"
        }"#,
    );
    let v = bk_json(&["check", path.as_str(), "--json"], 1);
    assert_eq!(v[0]["pass"], false);
    let errors = v[0]["errors"].as_array().unwrap();
    assert!(errors
        .iter()
        .any(|e| e["code"] == "E010" && e["message"].as_str().unwrap().contains("brand_archetype")));
}

#[test]
fn unknown_business_type_warns_but_passes() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_tmp(
        &dir,
        "unknown.json",
        r#"{
            "business_stage": "growth",
            "business_type": "unknown_type",
            "target_age_group": "twenties",
            "brand_archetype": "hero",
            "primary_goals": []
        }"#,
    );
    let v = bk_json(&["check", path.as_str(), "--json"], 0);
    assert_eq!(v[0]["pass"], true);
    let warnings = v[0]["warnings"].as_array().unwrap();
    assert!(warnings.iter().any(|w| w["code"] == "W001"));
    assert!(warnings.iter().any(|w| w["code"] == "W002"));
}

#[test]
fn validate_rejects_schema_violations() {
    let out = bk_bin()
        .args(["validate", "samples/answers.json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let dir = tempfile::tempdir().unwrap();
    let path = write_tmp(
        &dir,
        "bad.json",
        r#"{ "business_stage": "retired", "tone": { "humor": 9 } }"#,
    );
    let out = bk_bin().args(["validate", path.as_str()]).output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("FAIL"));
}

// ── strategy resolution via the CLI ─────────────────────────────

#[test]
fn sample_answers_resolve_to_product_awareness() {
    let v = bk_json(&["strategy", "samples/answers.json", "--json"], 0);
    assert_eq!(v["key"], "product_awareness");
    assert_eq!(v["brand_type"], "Product-First Visual Brand");
    assert_eq!(v["content_mix"]["릴스"], 70);
    assert_eq!(v["content_mix"]["캐러셀"], 25);
    assert_eq!(v["content_mix"]["싱글포스트"], 5);
}

#[test]
fn unmatched_key_falls_back_to_default_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_tmp(
        &dir,
        "unknown.json",
        r#"{
            "business_stage": "idea",
            "business_type": "unknown_type",
            "target_age_group": "teens",
            "brand_archetype": "creator",
            "primary_goals": []
        }"#,
    );
    let v = bk_json(&["strategy", path.as_str(), "--json"], 0);
    assert_eq!(v["key"], "product_awareness");
}

// ── profile / plan ──────────────────────────────────────────────

#[test]
fn profile_json_carries_id_and_verbatim_fields() {
    let v = bk_json(&["profile", "samples/answers.json"], 0);
    assert!(!v["id"].as_str().unwrap().is_empty());
    assert_eq!(v["business_type"], "product");
    assert_eq!(v["primary_goals"][0], "awareness");
    assert_eq!(v["tone"]["expertise"], 5);
}

#[test]
fn profile_fails_naming_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_tmp(&dir, "empty.json", "{}");
    let out = bk_bin().args(["profile", path.as_str()]).output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("business_stage"));
    assert!(stderr.contains("brand_archetype"));
}

#[test]
fn plan_json_has_twelve_phased_weeks() {
    let v = bk_json(&["plan", "samples/answers.json", "--json"], 0);
    let plans = v.as_array().unwrap();
    assert_eq!(plans.len(), 12);
    assert_eq!(plans[0]["week"], 1);
    assert_eq!(plans[0]["phase"], "foundation");
    assert_eq!(plans[2]["phase"], "execution");
    assert_eq!(plans[7]["phase"], "execution");
    assert_eq!(plans[8]["phase"], "growth");
    assert_eq!(plans[11]["week"], 12);

    let week5_tasks = plans[4]["tasks"].as_array().unwrap();
    assert!(week5_tasks
        .iter()
        .any(|t| t.as_str().unwrap().contains("12")));
}

// ── listings ────────────────────────────────────────────────────

#[test]
fn strategies_lists_the_catalog() {
    let stdout = bk_stdout(&["strategies"]);
    assert!(stdout.contains("product_awareness"));
    assert!(stdout.contains("coaching_community"));
    assert!(stdout.contains("Mentorship Community Brand"));
}

#[test]
fn fields_lists_required_markers() {
    let stdout = bk_stdout(&["fields"]);
    assert!(stdout.contains("business_stage"));
    assert!(stdout.contains("required"));
    assert!(stdout.contains("optional"));

    let quick = bk_stdout(&["fields", "--quick"]);
    assert!(quick.contains("mission"));
    assert!(quick.contains("브랜드 미션"));
}

// ── quick variant ───────────────────────────────────────────────

#[test]
fn quick_rejects_blank_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_tmp(
        &dir,
        "quick.json",
        r#"{ "mission": "선배로서 코칭", "passion": "  " }"#,
    );
    let out = bk_bin().args(["quick", path.as_str()]).output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("passion"));
    assert!(stderr.contains("gain"));
}

use anyhow::{bail, Context, Result};
use jsonschema::Validator;
use serde_json::Value;

use crate::errors::{CheckIssue, CheckReport};
use crate::questions;
use crate::types::BusinessType;

const SCHEMA_ANSWERS: &str = include_str!("../schema/answers-v1.schema.json");

/// Compile the embedded answers schema.
pub fn validator() -> Result<Validator> {
    let schema: Value =
        serde_json::from_str(SCHEMA_ANSWERS).context("embedded schema is invalid JSON")?;
    Validator::new(&schema).map_err(|e| anyhow::anyhow!("schema compilation failed: {e}"))
}

/// Validate a single answers value against the schema.
pub fn validate(data: &Value) -> Result<()> {
    let v = validator()?;
    if v.is_valid(data) {
        return Ok(());
    }
    let mut msgs: Vec<String> = Vec::new();
    for error in v.iter_errors(data) {
        let path = error.instance_path.to_string();
        let loc = if path.is_empty() {
            "(root)".into()
        } else {
            path
        };
        msgs.push(format!("  {loc}: {error}"));
    }
    bail!("validation failed:\n{}", msgs.join("\n"));
}

/// Validate multiple files, printing results. Returns (passed, failed) counts.
pub fn validate_files(paths: &[String]) -> Result<(usize, usize)> {
    let mut passed = 0usize;
    let mut failed = 0usize;
    for path in paths {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("cannot read {path}"))?;
        let data: Value =
            serde_json::from_str(&content).with_context(|| format!("{path}: invalid JSON"))?;
        let v = validator()?;
        if v.is_valid(&data) {
            eprintln!("  ok  {path}");
            passed += 1;
        } else {
            failed += 1;
            eprintln!("  FAIL {path}");
            for error in v.iter_errors(&data) {
                let p = error.instance_path.to_string();
                let loc = if p.is_empty() { "(root)".into() } else { p };
                eprintln!("       {loc}: {error}");
            }
        }
    }
    Ok((passed, failed))
}

/// Full check producing a structured report (for `bk check --json`):
/// schema validation, required-field emptiness, and fallback-policy lints.
pub fn check(data: &Value, file: &str, strict: bool) -> CheckReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if let Ok(v) = validator() {
        for error in v.iter_errors(data) {
            let path = error.instance_path.to_string();
            errors.push(CheckIssue {
                code: "E001".to_string(),
                check: "schema".to_string(),
                message: error.to_string(),
                path: Some(if path.is_empty() {
                    "$(root)".to_string()
                } else {
                    format!("${path}")
                }),
            });
        }
    }

    check_required_fields(data, &mut errors);
    lint_checks(data, &mut warnings);

    let pass = errors.is_empty() && (!strict || warnings.is_empty());
    CheckReport {
        file: file.to_string(),
        pass,
        errors,
        warnings,
    }
}

fn check_required_fields(data: &Value, errors: &mut Vec<CheckIssue>) {
    for field in questions::required_fields() {
        let empty = match data.get(field) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.trim().is_empty(),
            Some(_) => false,
        };
        if empty {
            errors.push(CheckIssue {
                code: "E010".to_string(),
                check: "required".to_string(),
                message: format!("required field '{field}' is empty"),
                path: Some(format!("$.{field}")),
            });
        }
    }
}

fn lint_checks(data: &Value, warnings: &mut Vec<CheckIssue>) {
    // W001: no goals selected; selection defaults to awareness
    let has_goals = data
        .get("primary_goals")
        .and_then(Value::as_array)
        .is_some_and(|g| !g.is_empty());
    if !has_goals {
        warnings.push(CheckIssue {
            code: "W001".to_string(),
            check: "lint".to_string(),
            message: "no goals selected; strategy selection defaults to awareness".to_string(),
            path: Some("$.primary_goals".to_string()),
        });
    }

    // W002: business type outside the catalog resolves to the default entry
    if let Some(raw) = data.get("business_type").and_then(Value::as_str) {
        if !BusinessType::from(raw).is_known() {
            warnings.push(CheckIssue {
                code: "W002".to_string(),
                check: "lint".to_string(),
                message: format!(
                    "business type '{raw}' has no catalog entries; the default strategy will be used"
                ),
                path: Some("$.business_type".to_string()),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn good_answers() -> Value {
        json!({
            "business_stage": "launch",
            "business_type": "product",
            "target_age_group": "thirties",
            "brand_archetype": "sage",
            "primary_goals": ["awareness"],
            "tone": { "friendliness": 4, "expertise": 5, "humor": 2 },
            "competitors": ["@glow_kr"],
            "differentiation": "후기 중심"
        })
    }

    #[test]
    fn validate_accepts_good_and_rejects_bad() {
        assert!(validate(&good_answers()).is_ok());

        let mut bad = good_answers();
        bad["tone"]["humor"] = json!(0);
        let err = validate(&bad).unwrap_err();
        assert!(err.to_string().contains("validation failed"));
    }

    #[test]
    fn valid_answers_pass_strict() {
        let report = check(&good_answers(), "answers.json", true);
        assert!(report.pass, "errors: {:?}", report.errors);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn missing_required_field_is_e010() {
        let mut data = good_answers();
        data.as_object_mut().unwrap().remove("brand_archetype");
        let report = check(&data, "answers.json", false);
        assert!(!report.pass);
        assert!(report
            .errors
            .iter()
            .any(|e| e.code == "E010" && e.message.contains("brand_archetype")));
    }

    #[test]
    fn out_of_range_tone_is_schema_error() {
        let mut data = good_answers();
        data["tone"]["humor"] = json!(9);
        let report = check(&data, "answers.json", false);
        assert!(report.errors.iter().any(|e| e.code == "E001"));
    }

    #[test]
    fn empty_goals_warn_but_pass() {
        let mut data = good_answers();
        data["primary_goals"] = json!([]);
        let report = check(&data, "answers.json", false);
        assert!(report.pass);
        assert!(report.warnings.iter().any(|w| w.code == "W001"));

        let strict = check(&data, "answers.json", true);
        assert!(!strict.pass);
    }

    #[test]
    fn unknown_business_type_warns_about_fallback() {
        let mut data = good_answers();
        data["business_type"] = json!("unknown_type");
        let report = check(&data, "answers.json", false);
        assert!(report.pass);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.code == "W002" && w.message.contains("unknown_type")));
    }
}

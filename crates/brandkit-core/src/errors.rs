/// Raised when required intake fields are empty at submission time.
/// Recoverable: the caller re-prompts and must not resolve a strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required field(s): {}", .fields.join(", "))]
pub struct MissingFieldError {
    pub fields: Vec<String>,
}

/// Structured check result for `bk check --json`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CheckReport {
    pub file: String,
    pub pass: bool,
    pub errors: Vec<CheckIssue>,
    pub warnings: Vec<CheckIssue>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct CheckIssue {
    pub code: String,
    pub check: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

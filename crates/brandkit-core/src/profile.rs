use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::MissingFieldError;
use crate::types::{AgeGroup, BrandArchetype, BusinessStage, BusinessType, Goal, ToneScore};

/// Upper bound on multi-select answers (goals, competitor slots).
pub const MAX_GOALS: usize = 3;
pub const MAX_COMPETITORS: usize = 3;

/// Raw intake answers as submitted by the form layer. Every field is
/// optional here; [`build_profile`] decides what is actually required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Answers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_stage: Option<BusinessStage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_type: Option<BusinessType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_age_group: Option<AgeGroup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_archetype: Option<BrandArchetype>,

    /// Up to 3; only the first one drives strategy selection.
    #[serde(default)]
    pub primary_goals: Vec<Goal>,

    #[serde(default)]
    pub tone: ToneScores,

    /// Up to 3 competitor account names. May be empty.
    #[serde(default)]
    pub competitors: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub differentiation: Option<String>,
}

/// Tone sliders from the intake form, each 1..=5.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ToneScores {
    #[serde(default)]
    pub friendliness: ToneScore,
    #[serde(default)]
    pub expertise: ToneScore,
    #[serde(default)]
    pub humor: ToneScore,
}

/// Validated, immutable intake record. Built once per submission and
/// discarded when a new submission replaces it; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub business_stage: BusinessStage,
    pub business_type: BusinessType,
    pub target_age_group: AgeGroup,
    pub brand_archetype: BrandArchetype,
    pub primary_goals: Vec<Goal>,
    pub tone: ToneScores,
    pub competitors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub differentiation: Option<String>,
}

/// Assemble a [`Profile`] from raw answers.
///
/// Fails with a [`MissingFieldError`] naming every empty required field
/// (business stage, business type, target age group, brand archetype).
/// Provided values are copied verbatim; the only normalization is the
/// trim-based emptiness check on free-text entries.
pub fn build_profile(answers: &Answers) -> Result<Profile, MissingFieldError> {
    let mut missing = Vec::new();

    if answers.business_stage.is_none() {
        missing.push("business_stage".to_string());
    }
    if answers.business_type.is_none() {
        missing.push("business_type".to_string());
    }
    if answers.target_age_group.is_none() {
        missing.push("target_age_group".to_string());
    }
    if answers.brand_archetype.is_none() {
        missing.push("brand_archetype".to_string());
    }
    let (Some(business_stage), Some(business_type), Some(target_age_group), Some(brand_archetype)) = (
        answers.business_stage,
        answers.business_type.clone(),
        answers.target_age_group,
        answers.brand_archetype,
    ) else {
        return Err(MissingFieldError { fields: missing });
    };

    let competitors: Vec<String> = answers
        .competitors
        .iter()
        .filter(|c| !c.trim().is_empty())
        .take(MAX_COMPETITORS)
        .cloned()
        .collect();

    let differentiation = answers
        .differentiation
        .as_ref()
        .filter(|d| !d.trim().is_empty())
        .cloned();

    Ok(Profile {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        business_stage,
        business_type,
        target_age_group,
        brand_archetype,
        primary_goals: answers.primary_goals.iter().take(MAX_GOALS).cloned().collect(),
        tone: answers.tone,
        competitors,
        differentiation,
    })
}

/// The simple variant's seven free-text answers. All required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuickAnswers {
    #[serde(default)]
    pub mission: String,
    #[serde(default)]
    pub passion: String,
    #[serde(default)]
    pub expertise: String,
    #[serde(default)]
    pub values: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub pain: String,
    #[serde(default)]
    pub gain: String,
}

impl QuickAnswers {
    /// Same required-field rule as [`build_profile`]: every field must be
    /// non-empty after trimming, or the error names the offenders.
    pub fn validate(&self) -> Result<(), MissingFieldError> {
        let fields: [(&str, &str); 7] = [
            ("mission", &self.mission),
            ("passion", &self.passion),
            ("expertise", &self.expertise),
            ("values", &self.values),
            ("target", &self.target),
            ("pain", &self.pain),
            ("gain", &self.gain),
        ];
        let missing: Vec<String> = fields
            .iter()
            .filter(|(_, v)| v.trim().is_empty())
            .map(|(name, _)| name.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(MissingFieldError { fields: missing })
        }
    }
}
